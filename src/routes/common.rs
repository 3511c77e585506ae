//! Common routes: health, readiness, version.

use crate::response::Pretty;
use crate::state::AppState;
use crate::store;
use axum::{extract::State, http::StatusCode, routing::get, Router};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
}

async fn health() -> Pretty<HealthBody> {
    Pretty(HealthBody { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Pretty<ReadyBody>) {
    match store::ping(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Pretty(ReadyBody {
                status: "ok",
                database: "ok",
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Pretty(ReadyBody {
                    status: "degraded",
                    database: "unavailable",
                }),
            )
        }
    }
}

async fn version() -> Pretty<serde_json::Value> {
    Pretty(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /health, GET /ready (database round-trip), GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
