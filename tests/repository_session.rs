mod common;

use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use trimlink::domain::entities::NewSession;
use trimlink::domain::repositories::SessionRepository;
use trimlink::infrastructure::persistence::SqliteSessionRepository;

#[sqlx::test]
async fn test_create_and_find_by_token(pool: SqlitePool) {
    let user_id = common::create_test_user(&pool, "a@example.com").await;
    let repo = SqliteSessionRepository::new(pool);

    let expires = Utc::now() + Duration::days(30);
    let created = repo
        .create(NewSession {
            id: "sess-1".to_string(),
            session_token: "opaque-token".to_string(),
            user_id: user_id.clone(),
            expires,
        })
        .await
        .unwrap();

    assert_eq!(created.session_token, "opaque-token");
    assert_eq!(created.user_id, user_id);

    let found = repo.find_by_token("opaque-token").await.unwrap().unwrap();
    assert_eq!(found.id, "sess-1");
    assert!(!found.is_expired(Utc::now()));
}

#[sqlx::test]
async fn test_find_by_token_miss(pool: SqlitePool) {
    let repo = SqliteSessionRepository::new(pool);

    assert!(repo.find_by_token("missing").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_expiry_round_trips(pool: SqlitePool) {
    let user_id = common::create_test_user(&pool, "a@example.com").await;
    let repo = SqliteSessionRepository::new(pool);

    repo.create(NewSession {
        id: "sess-1".to_string(),
        session_token: "stale-token".to_string(),
        user_id,
        expires: Utc::now() - Duration::hours(1),
    })
    .await
    .unwrap();

    let found = repo.find_by_token("stale-token").await.unwrap().unwrap();

    // The repository returns the row as stored; expiry is the caller's call.
    assert!(found.is_expired(Utc::now()));
}

#[sqlx::test]
async fn test_delete_by_token(pool: SqlitePool) {
    let user_id = common::create_test_user(&pool, "a@example.com").await;
    let repo = SqliteSessionRepository::new(pool);

    repo.create(NewSession {
        id: "sess-1".to_string(),
        session_token: "opaque-token".to_string(),
        user_id,
        expires: Utc::now() + Duration::days(1),
    })
    .await
    .unwrap();

    assert!(repo.delete_by_token("opaque-token").await.unwrap());
    assert!(repo.find_by_token("opaque-token").await.unwrap().is_none());

    // Deleting again is a miss, not an error.
    assert!(!repo.delete_by_token("opaque-token").await.unwrap());
}
