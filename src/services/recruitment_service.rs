use std::time::Instant;

use crate::error::{Error, Result};
use crate::models::recruitment::{Recruitment, RecruitmentRow};
use sqlx::PgPool;
use uuid::Uuid;

const RECRUITMENT_SELECT: &str = r#"
    SELECT
        r.id, r.company_id, r.job_type_id, jt.name AS job_type,
        r.job_type_description, r.job_description, r.work_location, r.work_hours,
        r.number_of_hires, r.salary_bonus, r.annual_holidays, r.holidays_leave,
        r.benefits, r.selection_flow, r.created_at, r.updated_at,
        c.name AS company_name,
        c.name_kana AS company_name_kana,
        c.logo_url AS company_logo_url,
        i.name AS company_industry
    FROM recruitments r
    JOIN companies c ON c.id = r.company_id AND c.deleted_at IS NULL
    LEFT JOIN job_types jt ON jt.id = r.job_type_id
    LEFT JOIN company_overviews o ON o.company_id = c.id
    LEFT JOIN industries i ON i.id = o.industry_id
"#;

#[derive(Clone)]
pub struct RecruitmentService {
    pool: PgPool,
}

impl RecruitmentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_with_company(&self) -> Result<Vec<Recruitment>> {
        let started = Instant::now();
        let query = format!("{} ORDER BY r.created_at DESC NULLS LAST", RECRUITMENT_SELECT);
        let rows = sqlx::query_as::<_, RecruitmentRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(operation = "list_recruitments", error = ?e, "recruitment fetch failed");
                Error::from(e)
            })?;

        tracing::debug!(
            count = rows.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "fetched recruitments"
        );
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn list_by_company(&self, company_id: Uuid) -> Result<Vec<Recruitment>> {
        let query = format!(
            "{} WHERE r.company_id = $1 ORDER BY r.created_at DESC NULLS LAST",
            RECRUITMENT_SELECT
        );
        let rows = sqlx::query_as::<_, RecruitmentRow>(&query)
            .bind(company_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Looks a recruitment up under its company so mismatched detail URLs 404.
    pub async fn get_by_id(&self, company_id: Uuid, id: Uuid) -> Result<Recruitment> {
        let query = format!("{} WHERE r.id = $1 AND r.company_id = $2", RECRUITMENT_SELECT);
        let row = sqlx::query_as::<_, RecruitmentRow>(&query)
            .bind(id)
            .bind(company_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Recruitment not found".to_string()))?;
        Ok(row.into())
    }
}
