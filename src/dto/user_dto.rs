use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::user::{User, UserProfile};

/// Optional profile fields supplied alongside the bearer token. The subject
/// always comes from the verified token, never from the body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct SyncUserPayload {
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(url)]
    pub picture: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SyncUserResponse {
    pub success: bool,
    pub message: String,
    pub user: User,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfilePayload {
    #[validate(length(max = 50))]
    pub last_name: Option<String>,
    #[validate(length(max = 50))]
    pub first_name: Option<String>,
    #[validate(length(max = 50))]
    pub last_name_kana: Option<String>,
    #[validate(length(max = 50))]
    pub first_name_kana: Option<String>,
    #[validate(length(max = 100))]
    pub university: Option<String>,
    #[validate(length(max = 100))]
    pub faculty: Option<String>,
    #[validate(length(max = 100))]
    pub department: Option<String>,
    #[validate(range(min = 2000, max = 2100))]
    pub graduation_year: Option<i32>,
    #[validate(length(min = 10, max = 20))]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub user: User,
    pub profile: Option<UserProfile>,
}
