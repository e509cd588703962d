//! Shared application state injected into every handler.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{AuthService, UrlService};
use crate::infrastructure::persistence::{
    SqliteSessionRepository, SqliteUrlRepository, SqliteUserRepository,
};

/// Concrete service types wired over the SQLite repositories.
pub type AppAuthService = AuthService<SqliteUserRepository, SqliteSessionRepository>;
pub type AppUrlService = UrlService<SqliteUrlRepository>;

/// Process-wide state, built once at startup and cloned per request.
///
/// The pool is the single shared mutable resource; it is passed explicitly
/// here rather than living in any ambient global.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub auth_service: Arc<AppAuthService>,
    pub url_service: Arc<AppUrlService>,
    /// Location link visitors are sent to when a short token cannot be
    /// resolved.
    pub home_url: String,
}
