//! # trimlink
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! Users register and sign in, submit long URLs, and get back 8-character
//! short tokens. Visiting a short link counts the click and redirects to the
//! stored destination; every link is owned by the user who created it and
//! only that user can change or remove it.
//!
//! ## Architecture
//!
//! The crate follows a layered structure:
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite repositories
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export PASSWORD_SIGNING_SECRET="change-me"
//! export DATABASE_URL="sqlite://trimlink.db"  # Optional
//!
//! # Start the service (migrations run automatically)
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, UrlService};
    pub use crate::domain::entities::{Identity, NewShortUrl, ShortUrl};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
