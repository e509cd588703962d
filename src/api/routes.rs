//! API route configuration.

use crate::api::handlers::{
    create_url_handler, delete_url_handler, list_urls_handler, login_handler, logout_handler,
    register_handler, update_url_handler,
};
use crate::state::AppState;
use axum::{Router, routing::post};

/// Routes reachable without a session.
///
/// # Endpoints
///
/// - `POST /register` - Create an account
/// - `POST /login`    - Open a session
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
}

/// Routes protected by session authentication via
/// [`crate::api::middleware::auth`].
///
/// # Endpoints
///
/// - `POST   /urls`   - Create a short URL
/// - `GET    /urls`   - List the caller's short URLs, newest first
/// - `PATCH  /urls`   - Update a short URL's destination (body carries the id)
/// - `DELETE /urls?id=` - Delete a short URL
/// - `POST   /logout` - Close the current session
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/urls",
            post(create_url_handler)
                .get(list_urls_handler)
                .patch(update_url_handler)
                .delete(delete_url_handler),
        )
        .route("/logout", post(logout_handler))
}
