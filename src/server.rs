//! HTTP server initialization and runtime setup.
//!
//! Handles database pool construction, migrations, service wiring, and the
//! Axum server lifecycle.

use crate::application::services::{AuthService, UrlService};
use crate::config::Config;
use crate::infrastructure::persistence::{
    SqliteSessionRepository, SqliteUrlRepository, SqliteUserRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use chrono::Duration;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration as StdDuration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (WAL journal, foreign keys on)
/// - Migrations
/// - Repositories and services
/// - Axum HTTP server with graceful shutdown on ctrl-c
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let connect_options = SqliteConnectOptions::from_str(&config.database_url)
        .context("Invalid DATABASE_URL")?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(StdDuration::from_secs(config.db_connect_timeout));

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(StdDuration::from_secs(config.db_connect_timeout))
        .idle_timeout(StdDuration::from_secs(config.db_idle_timeout))
        .max_lifetime(StdDuration::from_secs(config.db_max_lifetime))
        .connect_with(connect_options)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let session_repository = Arc::new(SqliteSessionRepository::new(pool.clone()));
    let url_repository = Arc::new(SqliteUrlRepository::new(pool.clone()));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        session_repository,
        config.password_signing_secret.clone(),
        Duration::seconds(config.session_ttl_seconds),
    ));
    let url_service = Arc::new(UrlService::new(url_repository));

    let state = AppState {
        db: pool,
        auth_service,
        url_service,
        home_url: config.home_url.clone(),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to install shutdown signal handler");
        return;
    }

    tracing::info!("Shutdown signal received");
}
