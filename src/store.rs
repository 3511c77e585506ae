//! Database handle: one pool for the process lifetime.

use crate::config::DbConfig;
use crate::error::AppError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Open the pool. Any failure here is fatal for the caller; there is no retry.
pub async fn connect(config: &DbConfig, max_connections: u32) -> Result<PgPool, AppError> {
    let options = config.connect_options()?;
    tracing::debug!(dsn = %config.dsn(), max_connections, "connecting to database");
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Round-trip a trivial query. Used by the readiness probe.
pub async fn ping(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
