//! Generic lookups and soft delete over any [`Record`] table.

use crate::error::AppError;
use crate::models::Record;
use sqlx::PgPool;

pub struct CrudService;

impl CrudService {
    /// Fetch one live row by id.
    pub async fn find_by_id<R: Record>(pool: &PgPool, id: i64) -> Result<R, AppError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1 AND deleted_at IS NULL",
            R::COLUMNS,
            R::TABLE
        );
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, R>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::not_found(R::KIND, id))
    }

    /// Every live row in insertion order. No pagination.
    pub async fn find_all<R: Record>(pool: &PgPool) -> Result<Vec<R>, AppError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE deleted_at IS NULL ORDER BY id",
            R::COLUMNS,
            R::TABLE
        );
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, R>(&sql).fetch_all(pool).await?)
    }

    /// Mark a live row deleted and return its last state. The row stays in storage.
    pub async fn soft_delete<R: Record>(pool: &PgPool, id: i64) -> Result<R, AppError> {
        let sql = format!(
            "UPDATE {} SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL RETURNING {}",
            R::TABLE,
            R::COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, R>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::not_found(R::KIND, id))
    }
}
