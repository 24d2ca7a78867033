use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::company::CompanyBasicInfo;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Internship {
    pub id: Uuid,
    pub company_id: Uuid,
    pub title: Option<String>,
    pub job_type_id: Option<Uuid>,
    pub job_type: Option<String>,
    pub job_type_description: Option<String>,
    pub job_description: Option<String>,
    pub skills_to_acquire: Option<String>,
    pub work_location: Option<String>,
    pub work_hours: Option<String>,
    pub hourly_wage: Option<String>,
    pub required_skills: Option<String>,
    pub preferred_skills: Option<String>,
    pub selection_flow: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub company: CompanyBasicInfo,
    pub tags: Vec<InternshipTag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct InternshipTag {
    pub id: Uuid,
    pub name: String,
    pub category: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct InternshipTagLink {
    pub internship_id: Uuid,
    pub id: Uuid,
    pub name: String,
    pub category: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct InternshipRow {
    pub id: Uuid,
    pub company_id: Uuid,
    pub title: Option<String>,
    pub job_type_id: Option<Uuid>,
    pub job_type: Option<String>,
    pub job_type_description: Option<String>,
    pub job_description: Option<String>,
    pub skills_to_acquire: Option<String>,
    pub work_location: Option<String>,
    pub work_hours: Option<String>,
    pub hourly_wage: Option<String>,
    pub required_skills: Option<String>,
    pub preferred_skills: Option<String>,
    pub selection_flow: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub company_name: Option<String>,
    pub company_name_kana: Option<String>,
    pub company_logo_url: Option<String>,
    pub company_industry: Option<String>,
}

impl Internship {
    /// Returns `None` when the joined company is missing (deleted or hidden).
    pub fn from_row(row: InternshipRow, tags: Vec<InternshipTag>) -> Option<Self> {
        let company = CompanyBasicInfo {
            id: row.company_id,
            name: row.company_name?,
            name_kana: row.company_name_kana,
            logo_url: row.company_logo_url,
            industry: row.company_industry,
        };

        Some(Self {
            id: row.id,
            company_id: row.company_id,
            title: row.title,
            job_type_id: row.job_type_id,
            job_type: row.job_type,
            job_type_description: row.job_type_description,
            job_description: row.job_description,
            skills_to_acquire: row.skills_to_acquire,
            work_location: row.work_location,
            work_hours: row.work_hours,
            hourly_wage: row.hourly_wage,
            required_skills: row.required_skills,
            preferred_skills: row.preferred_skills,
            selection_flow: row.selection_flow,
            created_at: row.created_at,
            updated_at: row.updated_at,
            company,
            tags,
        })
    }

    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.job_description.as_deref())
            .unwrap_or("インターン募集")
    }
}
