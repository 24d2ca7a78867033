pub mod application_service;
pub mod company_service;
pub mod favorite_service;
pub mod internship_service;
pub mod recruitment_service;
pub mod user_service;
