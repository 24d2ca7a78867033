use std::collections::HashMap;
use std::time::Instant;

use crate::error::{Error, Result};
use crate::models::internship::{Internship, InternshipRow, InternshipTag, InternshipTagLink};
use sqlx::PgPool;
use uuid::Uuid;

const INTERNSHIP_SELECT: &str = r#"
    SELECT
        n.id, n.company_id, n.title, n.job_type_id, jt.name AS job_type,
        n.job_type_description, n.job_description, n.skills_to_acquire,
        n.work_location, n.work_hours, n.hourly_wage, n.required_skills,
        n.preferred_skills, n.selection_flow, n.created_at, n.updated_at,
        c.name AS company_name,
        c.name_kana AS company_name_kana,
        c.logo_url AS company_logo_url,
        i.name AS company_industry
    FROM internships n
    LEFT JOIN companies c ON c.id = n.company_id AND c.deleted_at IS NULL
    LEFT JOIN job_types jt ON jt.id = n.job_type_id
    LEFT JOIN company_overviews o ON o.company_id = c.id
    LEFT JOIN industries i ON i.id = o.industry_id
"#;

#[derive(Clone)]
pub struct InternshipService {
    pool: PgPool,
}

impl InternshipService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Internships whose company is missing are left out.
    pub async fn list_with_company(&self) -> Result<Vec<Internship>> {
        let started = Instant::now();
        let query = format!("{} ORDER BY n.created_at DESC NULLS LAST", INTERNSHIP_SELECT);
        let rows = sqlx::query_as::<_, InternshipRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(operation = "list_internships", error = ?e, "internship fetch failed");
                Error::from(e)
            })?;

        let internships = self.attach_tags(rows).await?;
        tracing::debug!(
            count = internships.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "fetched internships"
        );
        Ok(internships)
    }

    pub async fn list_by_company(&self, company_id: Uuid) -> Result<Vec<Internship>> {
        let query = format!(
            "{} WHERE n.company_id = $1 ORDER BY n.created_at DESC NULLS LAST",
            INTERNSHIP_SELECT
        );
        let rows = sqlx::query_as::<_, InternshipRow>(&query)
            .bind(company_id)
            .fetch_all(&self.pool)
            .await?;
        self.attach_tags(rows).await
    }

    pub async fn get_by_id(&self, company_id: Uuid, id: Uuid) -> Result<Internship> {
        let query = format!("{} WHERE n.id = $1 AND n.company_id = $2", INTERNSHIP_SELECT);
        let row = sqlx::query_as::<_, InternshipRow>(&query)
            .bind(id)
            .bind(company_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Internship not found".to_string()))?;

        self.attach_tags(vec![row])
            .await?
            .pop()
            .ok_or_else(|| Error::NotFound("Internship not found".to_string()))
    }

    async fn attach_tags(&self, rows: Vec<InternshipRow>) -> Result<Vec<Internship>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let links = sqlx::query_as::<_, InternshipTagLink>(
            r#"
            SELECT rel.internship_id, t.id, t.name, t.category
            FROM internship_tag_relations rel
            JOIN internship_tags t ON t.id = rel.tag_id
            WHERE rel.internship_id = ANY($1)
            ORDER BY t.name
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let mut tags: HashMap<Uuid, Vec<InternshipTag>> = HashMap::new();
        for link in links {
            tags.entry(link.internship_id).or_default().push(InternshipTag {
                id: link.id,
                name: link.name,
                category: link.category,
            });
        }

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let row_tags = tags.remove(&row.id).unwrap_or_default();
                Internship::from_row(row, row_tags)
            })
            .collect())
    }
}
