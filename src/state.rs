//! Shared application state for all routes.

use sqlx::PgPool;

/// The pool is the single process-wide database handle; handlers receive it
/// through axum state rather than a global.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        AppState { pool }
    }
}
