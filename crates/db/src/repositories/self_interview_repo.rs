//! Repository for the `self_interviews` table.

use sqlx::PgPool;
use pickme_core::types::DbId;

use crate::models::self_interview::{SelfInterview, SelfInterviewDto};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, created_at, updated_at";

/// Provides CRUD operations for self-interviews.
pub struct SelfInterviewRepo;

impl SelfInterviewRepo {
    /// Insert a new self-interview, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &SelfInterviewDto,
    ) -> Result<SelfInterview, sqlx::Error> {
        let query = format!(
            "INSERT INTO self_interviews (title, content)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SelfInterview>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Find a self-interview by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SelfInterview>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM self_interviews WHERE id = $1");
        sqlx::query_as::<_, SelfInterview>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all self-interviews in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<SelfInterview>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM self_interviews ORDER BY id ASC");
        sqlx::query_as::<_, SelfInterview>(&query)
            .fetch_all(pool)
            .await
    }

    /// Overwrite title and content of an existing self-interview.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SelfInterviewDto,
    ) -> Result<Option<SelfInterview>, sqlx::Error> {
        let query = format!(
            "UPDATE self_interviews SET
                title = $2,
                content = $3,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SelfInterview>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a self-interview. Returns the removed row, if any.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<SelfInterview>, sqlx::Error> {
        let query = format!("DELETE FROM self_interviews WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, SelfInterview>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Remove every self-interview. Returns the number of rows deleted.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM self_interviews")
            .execute(pool)
            .await?;
        tracing::debug!(rows = result.rows_affected(), "Cleared self_interviews");
        Ok(result.rows_affected())
    }
}
