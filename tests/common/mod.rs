#![allow(dead_code)]

use axum::{Router, middleware};
use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;
use trimlink::api;
use trimlink::api::middleware::auth;
use trimlink::application::services::{AuthService, UrlService};
use trimlink::infrastructure::persistence::{
    SqliteSessionRepository, SqliteUrlRepository, SqliteUserRepository,
};
use trimlink::state::AppState;
use trimlink::utils::code_generator::{generate_record_id, generate_session_token};

pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let user_repo = Arc::new(SqliteUserRepository::new(pool.clone()));
    let session_repo = Arc::new(SqliteSessionRepository::new(pool.clone()));
    let url_repo = Arc::new(SqliteUrlRepository::new(pool.clone()));

    let auth_service = Arc::new(AuthService::new(
        user_repo,
        session_repo,
        TEST_SIGNING_SECRET.to_string(),
        Duration::days(1),
    ));
    let url_service = Arc::new(UrlService::new(url_repo));

    AppState {
        db: pool,
        auth_service,
        url_service,
        home_url: "/".to_string(),
    }
}

/// Router covering the `/api` surface with the same auth wiring as the
/// real application router.
pub fn api_app(state: AppState) -> Router {
    let api_router = api::routes::public_routes().merge(
        api::routes::protected_routes()
            .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer)),
    );

    Router::new().nest("/api", api_router).with_state(state)
}

pub async fn create_test_user(pool: &SqlitePool, email: &str) -> String {
    let id = generate_record_id();
    let now = Utc::now();

    sqlx::query(
        "INSERT INTO users (id, name, email, password, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind("Test User")
    .bind(email)
    .bind("not-a-real-hash")
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .unwrap();

    id
}

pub async fn create_test_session(pool: &SqlitePool, user_id: &str) -> String {
    create_session_with_expiry(pool, user_id, Utc::now() + Duration::days(1)).await
}

pub async fn create_expired_session(pool: &SqlitePool, user_id: &str) -> String {
    create_session_with_expiry(pool, user_id, Utc::now() - Duration::hours(1)).await
}

async fn create_session_with_expiry(
    pool: &SqlitePool,
    user_id: &str,
    expires: DateTime<Utc>,
) -> String {
    let token = generate_session_token();
    let now = Utc::now();

    sqlx::query(
        "INSERT INTO sessions (id, session_token, user_id, expires, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(generate_record_id())
    .bind(&token)
    .bind(user_id)
    .bind(expires)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .unwrap();

    token
}

pub async fn create_test_url(pool: &SqlitePool, code: &str, url: &str, user_id: &str) -> String {
    create_test_url_at(pool, code, url, user_id, Utc::now()).await
}

pub async fn create_test_url_at(
    pool: &SqlitePool,
    code: &str,
    url: &str,
    user_id: &str,
    created_at: DateTime<Utc>,
) -> String {
    let id = generate_record_id();

    sqlx::query(
        "INSERT INTO urls (id, original_url, short_url, clicks, user_id, created_at, updated_at) \
         VALUES (?, ?, ?, 0, ?, ?, ?)",
    )
    .bind(&id)
    .bind(url)
    .bind(code)
    .bind(user_id)
    .bind(created_at)
    .bind(created_at)
    .execute(pool)
    .await
    .unwrap();

    id
}

pub async fn clicks_for(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT clicks FROM urls WHERE short_url = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_urls(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
