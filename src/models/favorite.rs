use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Favorite {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct FavoriteCompany {
    pub id: Uuid,
    pub company_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub company_name: String,
    pub company_logo_url: Option<String>,
    pub company_industry: Option<String>,
}
