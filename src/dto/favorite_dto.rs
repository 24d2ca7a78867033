use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::favorite::FavoriteCompany;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddFavoritePayload {
    pub company_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FavoriteListResponse {
    pub items: Vec<FavoriteCompany>,
}
