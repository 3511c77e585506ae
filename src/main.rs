//! Server: reads config from env, connects, ensures schema, serves the person and book routes.

use people_api::{app, connect, ensure_schema, seed_demo_data, AppState, DbConfig, ServerConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("people_api=info,tower_http=info")),
        )
        .init();

    let db_config = DbConfig::from_env();
    let server_config = ServerConfig::from_env()?;

    let pool = match connect(&db_config, server_config.max_connections).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, dsn = %db_config.dsn(), "database connection failed");
            return Err(e.into());
        }
    };
    tracing::info!("database connected successfully");

    if let Err(e) = ensure_schema(&pool).await {
        tracing::error!(error = %e, "schema migration failed");
    }

    if server_config.seed_demo_data {
        if let Err(e) = seed_demo_data(&pool).await {
            tracing::error!(error = %e, "seeding demo data failed");
        }
    }

    let router = app(AppState::new(pool.clone()));
    let listener = TcpListener::bind(&server_config.listen_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
