use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationType {
    Internship,
    Recruitment,
}

impl ApplicationType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Internship => "internship",
            Self::Recruitment => "recruitment",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Application {
    pub id: Uuid,
    pub user_id: Uuid,
    pub internship_id: Option<Uuid>,
    pub recruitment_id: Option<Uuid>,
    pub application_type: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// An application joined with the title and company of what was applied to.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ApplicationSummary {
    pub id: Uuid,
    pub application_type: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub target_id: Uuid,
    pub target_title: Option<String>,
    pub company_id: Uuid,
    pub company_name: String,
    pub company_logo_url: Option<String>,
}
