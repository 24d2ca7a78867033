use crate::error::{Error, Result};
use crate::models::application::{Application, ApplicationSummary, ApplicationType};
use sqlx::PgPool;
use uuid::Uuid;

const INITIAL_STATUS: &str = "pending";

#[derive(Clone)]
pub struct ApplicationService {
    pool: PgPool,
}

impl ApplicationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn apply(
        &self,
        user_id: Uuid,
        kind: ApplicationType,
        target_id: Uuid,
    ) -> Result<Application> {
        let exists: bool = sqlx::query_scalar(target_exists_sql(kind))
            .bind(target_id)
            .fetch_one(&self.pool)
            .await?;
        if !exists {
            return Err(Error::NotFound(not_found_message(kind).to_string()));
        }

        let (internship_id, recruitment_id) = match kind {
            ApplicationType::Internship => (Some(target_id), None),
            ApplicationType::Recruitment => (None, Some(target_id)),
        };

        let application = sqlx::query_as::<_, Application>(
            r#"
            INSERT INTO applications (user_id, internship_id, recruitment_id, application_type, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, internship_id, recruitment_id, application_type, status, created_at
            "#,
        )
        .bind(user_id)
        .bind(internship_id)
        .bind(recruitment_id)
        .bind(kind.as_str())
        .bind(INITIAL_STATUS)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match Error::from(e) {
            Error::Conflict(_) => Error::Conflict(duplicate_message(kind).to_string()),
            other => other,
        })?;

        tracing::info!(%user_id, %target_id, kind = kind.as_str(), "application submitted");
        Ok(application)
    }

    /// The caller's applications, newest first.
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<ApplicationSummary>> {
        let items = sqlx::query_as::<_, ApplicationSummary>(
            r#"
            SELECT a.id, a.application_type, a.status, a.created_at,
                   COALESCE(a.internship_id, a.recruitment_id) AS target_id,
                   COALESCE(i.title, jt.name, r.job_type_description) AS target_title,
                   c.id AS company_id,
                   c.name AS company_name,
                   c.logo_url AS company_logo_url
            FROM applications a
            LEFT JOIN internships i ON i.id = a.internship_id
            LEFT JOIN recruitments r ON r.id = a.recruitment_id
            LEFT JOIN job_types jt ON jt.id = r.job_type_id
            JOIN companies c ON c.id = COALESCE(i.company_id, r.company_id)
            WHERE a.user_id = $1
            ORDER BY a.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }
}

/// Openings of soft-deleted companies are not applicable.
fn target_exists_sql(kind: ApplicationType) -> &'static str {
    match kind {
        ApplicationType::Internship => {
            r#"
            SELECT EXISTS(
                SELECT 1 FROM internships n
                JOIN companies c ON c.id = n.company_id AND c.deleted_at IS NULL
                WHERE n.id = $1
            )
            "#
        }
        ApplicationType::Recruitment => {
            r#"
            SELECT EXISTS(
                SELECT 1 FROM recruitments r
                JOIN companies c ON c.id = r.company_id AND c.deleted_at IS NULL
                WHERE r.id = $1
            )
            "#
        }
    }
}

fn duplicate_message(kind: ApplicationType) -> &'static str {
    match kind {
        ApplicationType::Internship => "このインターンシップには既に応募済みです",
        ApplicationType::Recruitment => "この求人には既に応募済みです",
    }
}

fn not_found_message(kind: ApplicationType) -> &'static str {
    match kind {
        ApplicationType::Internship => "Internship not found",
        ApplicationType::Recruitment => "Recruitment not found",
    }
}
