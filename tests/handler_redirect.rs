mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use sqlx::SqlitePool;
use trimlink::api::handlers::redirect_handler;

fn app(pool: SqlitePool) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(common::create_test_state(pool))
}

#[sqlx::test]
async fn test_redirect_success(pool: SqlitePool) {
    let user_id = common::create_test_user(&pool, "a@example.com").await;
    common::create_test_url(&pool, "redirect", "https://example.com/target", &user_id).await;

    let server = TestServer::new(app(pool)).unwrap();

    let response = server.get("/redirect").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_counts_click(pool: SqlitePool) {
    let user_id = common::create_test_user(&pool, "a@example.com").await;
    common::create_test_url(&pool, "clickme1", "https://example.com", &user_id).await;

    let server = TestServer::new(app(pool.clone())).unwrap();

    server.get("/clickme1").await;
    assert_eq!(common::clicks_for(&pool, "clickme1").await, 1);

    server.get("/clickme1").await;
    assert_eq!(common::clicks_for(&pool, "clickme1").await, 2);
}

#[sqlx::test]
async fn test_redirect_unknown_token_goes_home(pool: SqlitePool) {
    let server = TestServer::new(app(pool)).unwrap();

    let response = server.get("/notfound").await;

    // A visitor never sees an error; unknown tokens land on the home page.
    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "/");
}

#[sqlx::test]
async fn test_redirect_unknown_token_counts_nothing(pool: SqlitePool) {
    let user_id = common::create_test_user(&pool, "a@example.com").await;
    common::create_test_url(&pool, "keepzero", "https://example.com", &user_id).await;

    let server = TestServer::new(app(pool.clone())).unwrap();

    server.get("/notfound").await;

    assert_eq!(common::clicks_for(&pool, "keepzero").await, 0);
}

#[sqlx::test]
async fn test_redirect_needs_no_authentication(pool: SqlitePool) {
    let user_id = common::create_test_user(&pool, "a@example.com").await;
    common::create_test_url(&pool, "public12", "https://example.com", &user_id).await;

    let server = TestServer::new(app(pool)).unwrap();

    // No Authorization header, no cookie.
    let response = server.get("/public12").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com");
}

#[sqlx::test]
async fn test_redirect_preserves_stored_destination_verbatim(pool: SqlitePool) {
    let user_id = common::create_test_user(&pool, "a@example.com").await;
    // Destinations are stored unvalidated; whatever was stored is echoed.
    common::create_test_url(&pool, "odddest1", "not-even-a-url", &user_id).await;

    let server = TestServer::new(app(pool)).unwrap();

    let response = server.get("/odddest1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "not-even-a-url");
}
