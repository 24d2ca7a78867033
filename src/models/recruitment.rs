use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::company::CompanyBasicInfo;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Recruitment {
    pub id: Uuid,
    pub company_id: Uuid,
    pub job_type_id: Option<Uuid>,
    pub job_type: Option<String>,
    pub job_type_description: Option<String>,
    pub job_description: Option<String>,
    pub work_location: Option<String>,
    pub work_hours: Option<String>,
    pub number_of_hires: Option<String>,
    pub salary_bonus: Option<String>,
    pub annual_holidays: Option<i32>,
    pub holidays_leave: Option<String>,
    pub benefits: Option<String>,
    pub selection_flow: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub company: CompanyBasicInfo,
}

#[derive(Debug, Clone, FromRow)]
pub struct RecruitmentRow {
    pub id: Uuid,
    pub company_id: Uuid,
    pub job_type_id: Option<Uuid>,
    pub job_type: Option<String>,
    pub job_type_description: Option<String>,
    pub job_description: Option<String>,
    pub work_location: Option<String>,
    pub work_hours: Option<String>,
    pub number_of_hires: Option<String>,
    pub salary_bonus: Option<String>,
    pub annual_holidays: Option<i32>,
    pub holidays_leave: Option<String>,
    pub benefits: Option<String>,
    pub selection_flow: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub company_name: String,
    pub company_name_kana: Option<String>,
    pub company_logo_url: Option<String>,
    pub company_industry: Option<String>,
}

impl From<RecruitmentRow> for Recruitment {
    fn from(row: RecruitmentRow) -> Self {
        Self {
            id: row.id,
            company_id: row.company_id,
            job_type_id: row.job_type_id,
            job_type: row.job_type,
            job_type_description: row.job_type_description,
            job_description: row.job_description,
            work_location: row.work_location,
            work_hours: row.work_hours,
            number_of_hires: row.number_of_hires,
            salary_bonus: row.salary_bonus,
            annual_holidays: row.annual_holidays,
            holidays_leave: row.holidays_leave,
            benefits: row.benefits,
            selection_flow: row.selection_flow,
            created_at: row.created_at,
            updated_at: row.updated_at,
            company: CompanyBasicInfo {
                id: row.company_id,
                name: row.company_name,
                name_kana: row.company_name_kana,
                logo_url: row.company_logo_url,
                industry: row.company_industry,
            },
        }
    }
}

impl Recruitment {
    /// Recruitments carry no title of their own; the job type stands in.
    pub fn display_title(&self) -> &str {
        self.job_type
            .as_deref()
            .or(self.job_type_description.as_deref())
            .unwrap_or("求人情報")
    }
}
