//! HTTP server initialization and runtime setup.
//!
//! Handles storage selection, migrations, state assembly and the Axum server
//! lifecycle.

use crate::api::openapi;
use crate::application::services::UsuarioService;
use crate::config::Config;
use crate::domain::repositories::UsuarioRepository;
use crate::infrastructure::persistence::{MemoryUsuarioRepository, PgUsuarioRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Connects to PostgreSQL with the pool settings from `config`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect_pool(database_url: &str, config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")
}

/// Picks the storage backend: PostgreSQL when configured, memory otherwise.
///
/// # Errors
///
/// Returns an error if the database is configured but unreachable, or if
/// migrations fail.
pub async fn build_repository(config: &Config) -> Result<Arc<dyn UsuarioRepository>> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("No database configured, usuarios are kept in memory");
        return Ok(Arc::new(MemoryUsuarioRepository::new()));
    };

    let pool = connect_pool(database_url, config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;
    tracing::info!("Migrations applied");

    Ok(Arc::new(PgUsuarioRepository::new(Arc::new(pool))))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage backend (PostgreSQL + migrations, or in-memory)
/// - OpenAPI document
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = build_repository(&config).await?;

    let usuario_service = Arc::new(UsuarioService::new(repository));
    let document = openapi::generate(&openapi::Info::for_server(&config.public_url));
    let state = AppState::new(usuario_service, document);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
