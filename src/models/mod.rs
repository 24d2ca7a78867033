pub mod application;
pub mod company;
pub mod favorite;
pub mod internship;
pub mod recruitment;
pub mod user;
