//! SQLite repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx
//! runtime queries over a shared connection pool.
//!
//! # Repositories
//!
//! - [`SqliteUrlRepository`] - Short URL storage and retrieval
//! - [`SqliteUserRepository`] - User accounts
//! - [`SqliteSessionRepository`] - Authenticated sessions

pub mod sqlite_session_repository;
pub mod sqlite_url_repository;
pub mod sqlite_user_repository;

pub use sqlite_session_repository::SqliteSessionRepository;
pub use sqlite_url_repository::SqliteUrlRepository;
pub use sqlite_user_repository::SqliteUserRepository;
