use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub name_kana: Option<String>,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub overview: Option<CompanyOverview>,
    pub data: Option<CompanyData>,
    /// Job-type names of the company's recruitments, one entry per recruitment.
    pub recruitment_job_types: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyOverview {
    pub industry: Option<String>,
    pub established_year: Option<i32>,
    pub headquarters_address: Option<String>,
    pub employee_count: Option<i32>,
    pub listing_classification: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyData {
    pub profile: Option<String>,
    pub business_content: Option<String>,
    pub headquarters_location: Option<String>,
    pub offices: Option<String>,
}

/// The subset of a company embedded in recruitment and internship records.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyBasicInfo {
    pub id: Uuid,
    pub name: String,
    pub name_kana: Option<String>,
    pub logo_url: Option<String>,
    pub industry: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct CompanyRow {
    pub id: Uuid,
    pub name: String,
    pub name_kana: Option<String>,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub has_overview: bool,
    pub industry: Option<String>,
    pub established_year: Option<i32>,
    pub headquarters_address: Option<String>,
    pub employee_count: Option<i32>,
    pub listing_classification: Option<String>,
    pub has_data: bool,
    pub profile: Option<String>,
    pub business_content: Option<String>,
    pub headquarters_location: Option<String>,
    pub offices: Option<String>,
}

impl Company {
    pub fn from_row(row: CompanyRow, recruitment_job_types: Vec<String>) -> Self {
        let overview = row.has_overview.then(|| CompanyOverview {
            industry: row.industry,
            established_year: row.established_year,
            headquarters_address: row.headquarters_address,
            employee_count: row.employee_count,
            listing_classification: row.listing_classification,
        });
        let data = row.has_data.then(|| CompanyData {
            profile: row.profile,
            business_content: row.business_content,
            headquarters_location: row.headquarters_location,
            offices: row.offices,
        });

        Self {
            id: row.id,
            name: row.name,
            name_kana: row.name_kana,
            logo_url: row.logo_url,
            website_url: row.website_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
            overview,
            data,
            recruitment_job_types,
        }
    }

    pub fn industry(&self) -> Option<&str> {
        self.overview.as_ref().and_then(|o| o.industry.as_deref())
    }

    /// Overview address first, then the free-text headquarters location.
    /// Empty strings count as missing.
    pub fn location(&self) -> Option<&str> {
        self.overview
            .as_ref()
            .and_then(|o| o.headquarters_address.as_deref())
            .filter(|s| !s.is_empty())
            .or_else(|| {
                self.data
                    .as_ref()
                    .and_then(|d| d.headquarters_location.as_deref())
                    .filter(|s| !s.is_empty())
            })
    }

    pub fn basic_info(&self) -> CompanyBasicInfo {
        CompanyBasicInfo {
            id: self.id,
            name: self.name.clone(),
            name_kana: self.name_kana.clone(),
            logo_url: self.logo_url.clone(),
            industry: self.industry().map(str::to_string),
        }
    }
}
