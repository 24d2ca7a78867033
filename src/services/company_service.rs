use std::collections::HashMap;
use std::time::Instant;

use crate::error::{Error, Result};
use crate::models::company::{Company, CompanyRow};
use sqlx::PgPool;
use uuid::Uuid;

const COMPANY_SELECT: &str = r#"
    SELECT
        c.id, c.name, c.name_kana, c.logo_url, c.website_url, c.created_at, c.updated_at,
        (o.id IS NOT NULL) AS has_overview,
        i.name AS industry,
        o.established_year,
        o.headquarters_address,
        o.employee_count,
        o.listing_classification,
        (d.id IS NOT NULL) AS has_data,
        d.profile,
        d.business_content,
        d.headquarters_location,
        d.offices
    FROM companies c
    LEFT JOIN company_overviews o ON o.company_id = c.id
    LEFT JOIN industries i ON i.id = o.industry_id
    LEFT JOIN company_data d ON d.company_id = c.id
    WHERE c.deleted_at IS NULL
"#;

#[derive(Clone)]
pub struct CompanyService {
    pool: PgPool,
}

impl CompanyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All visible companies, newest first, with overview, data and the job
    /// types of their recruitments.
    pub async fn list_public(&self) -> Result<Vec<Company>> {
        let started = Instant::now();
        let query = format!("{} ORDER BY c.created_at DESC NULLS LAST", COMPANY_SELECT);
        let rows = sqlx::query_as::<_, CompanyRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(operation = "list_companies", error = ?e, "company fetch failed");
                Error::from(e)
            })?;

        let mut job_types = self.recruitment_job_types(None).await?;
        let companies: Vec<Company> = rows
            .into_iter()
            .map(|row| {
                let types = job_types.remove(&row.id).unwrap_or_default();
                Company::from_row(row, types)
            })
            .collect();

        tracing::debug!(
            count = companies.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "fetched companies"
        );
        Ok(companies)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Company> {
        let query = format!("{} AND c.id = $1", COMPANY_SELECT);
        let row = sqlx::query_as::<_, CompanyRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Company not found".to_string()))?;

        let mut job_types = self.recruitment_job_types(Some(id)).await?;
        let types = job_types.remove(&id).unwrap_or_default();
        Ok(Company::from_row(row, types))
    }

    async fn recruitment_job_types(
        &self,
        company_id: Option<Uuid>,
    ) -> Result<HashMap<Uuid, Vec<String>>> {
        let pairs = sqlx::query_as::<_, (Uuid, String)>(
            r#"
            SELECT r.company_id, jt.name
            FROM recruitments r
            JOIN job_types jt ON jt.id = r.job_type_id
            WHERE $1::uuid IS NULL OR r.company_id = $1
            ORDER BY r.created_at DESC NULLS LAST
            "#,
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;

        let mut grouped: HashMap<Uuid, Vec<String>> = HashMap::new();
        for (company_id, name) in pairs {
            grouped.entry(company_id).or_default().push(name);
        }
        Ok(grouped)
    }
}
