pub mod application_dto;
pub mod favorite_dto;
pub mod listing_dto;
pub mod user_dto;
