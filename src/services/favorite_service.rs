use crate::error::{Error, Result};
use crate::models::favorite::{Favorite, FavoriteCompany};
use sqlx::PgPool;
use uuid::Uuid;

const DUPLICATE_FAVORITE: &str = "この企業は既にお気に入りに追加されています";

#[derive(Clone)]
pub struct FavoriteService {
    pool: PgPool,
}

impl FavoriteService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, user_id: Uuid) -> Result<Vec<FavoriteCompany>> {
        let items = sqlx::query_as::<_, FavoriteCompany>(
            r#"
            SELECT f.id, f.company_id, f.created_at,
                   c.name AS company_name,
                   c.logo_url AS company_logo_url,
                   i.name AS company_industry
            FROM favorites f
            JOIN companies c ON c.id = f.company_id AND c.deleted_at IS NULL
            LEFT JOIN company_overviews o ON o.company_id = c.id
            LEFT JOIN industries i ON i.id = o.industry_id
            WHERE f.user_id = $1
            ORDER BY f.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    pub async fn add(&self, user_id: Uuid, company_id: Uuid) -> Result<Favorite> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM companies WHERE id = $1 AND deleted_at IS NULL)",
        )
        .bind(company_id)
        .fetch_one(&self.pool)
        .await?;
        if !exists {
            return Err(Error::NotFound("Company not found".to_string()));
        }

        let favorite = sqlx::query_as::<_, Favorite>(
            r#"
            INSERT INTO favorites (user_id, company_id)
            VALUES ($1, $2)
            RETURNING id, user_id, company_id, created_at
            "#,
        )
        .bind(user_id)
        .bind(company_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match Error::from(e) {
            Error::Conflict(_) => Error::Conflict(DUPLICATE_FAVORITE.to_string()),
            other => other,
        })?;

        tracing::info!(%user_id, %company_id, "favorite added");
        Ok(favorite)
    }

    /// Removes one of the caller's own favorites.
    pub async fn remove(&self, user_id: Uuid, favorite_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM favorites WHERE id = $1 AND user_id = $2")
            .bind(favorite_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Favorite not found".to_string()));
        }
        Ok(())
    }
}
