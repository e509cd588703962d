//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Accounts, sessions, identity resolution
//! - [`services::url_service::UrlService`] - Owner-scoped link management and redirects

pub mod services;
