mod common;

use sqlx::SqlitePool;
use trimlink::domain::entities::NewShortUrl;
use trimlink::domain::repositories::UrlRepository;
use trimlink::infrastructure::persistence::SqliteUrlRepository;

fn new_url(id: &str, code: &str, url: &str, user_id: &str) -> NewShortUrl {
    NewShortUrl {
        id: id.to_string(),
        original_url: url.to_string(),
        short_url: code.to_string(),
        user_id: user_id.to_string(),
    }
}

#[sqlx::test]
async fn test_create_returns_stored_record(pool: SqlitePool) {
    let user_id = common::create_test_user(&pool, "a@example.com").await;
    let repo = SqliteUrlRepository::new(pool);

    let created = repo
        .create(new_url("url-1", "abc12345", "https://example.com", &user_id))
        .await
        .unwrap();

    assert_eq!(created.id, "url-1");
    assert_eq!(created.short_url, "abc12345");
    assert_eq!(created.original_url, "https://example.com");
    assert_eq!(created.clicks, 0);
    assert_eq!(created.user_id, user_id);
    assert_eq!(created.created_at, created.updated_at);
}

#[sqlx::test]
async fn test_create_duplicate_token_fails(pool: SqlitePool) {
    let user_id = common::create_test_user(&pool, "a@example.com").await;
    let repo = SqliteUrlRepository::new(pool);

    repo.create(new_url("url-1", "abc12345", "https://example.com/1", &user_id))
        .await
        .unwrap();

    let result = repo
        .create(new_url("url-2", "abc12345", "https://example.com/2", &user_id))
        .await;

    assert!(result.is_err());
}

#[sqlx::test]
async fn test_find_by_id_miss(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool);

    assert!(repo.find_by_id("missing").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_list_by_owner_filters_and_orders(pool: SqlitePool) {
    let owner = common::create_test_user(&pool, "a@example.com").await;
    let other = common::create_test_user(&pool, "b@example.com").await;
    let repo = SqliteUrlRepository::new(pool);

    repo.create(new_url("url-1", "first123", "https://example.com/1", &owner))
        .await
        .unwrap();
    repo.create(new_url("url-2", "second12", "https://example.com/2", &owner))
        .await
        .unwrap();
    repo.create(new_url("url-3", "foreign1", "https://example.com/3", &other))
        .await
        .unwrap();

    let listed = repo.list_by_owner(&owner).await.unwrap();

    assert_eq!(listed.len(), 2);
    // Newest first.
    assert_eq!(listed[0].short_url, "second12");
    assert_eq!(listed[1].short_url, "first123");
    assert!(listed.iter().all(|url| url.user_id == owner));
}

#[sqlx::test]
async fn test_update_destination_owner_scoped(pool: SqlitePool) {
    let owner = common::create_test_user(&pool, "a@example.com").await;
    let other = common::create_test_user(&pool, "b@example.com").await;
    let repo = SqliteUrlRepository::new(pool);

    let created = repo
        .create(new_url("url-1", "abc12345", "https://example.com/old", &owner))
        .await
        .unwrap();

    // Wrong owner: no match, row untouched.
    let denied = repo
        .update_destination("url-1", &other, "https://example.com/hijack")
        .await
        .unwrap();
    assert!(denied.is_none());

    let updated = repo
        .update_destination("url-1", &owner, "https://example.com/new")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.original_url, "https://example.com/new");
    assert_eq!(updated.short_url, "abc12345");
    assert!(updated.updated_at > created.updated_at);
}

#[sqlx::test]
async fn test_update_destination_missing_row(pool: SqlitePool) {
    let owner = common::create_test_user(&pool, "a@example.com").await;
    let repo = SqliteUrlRepository::new(pool);

    let result = repo
        .update_destination("missing", &owner, "https://example.com")
        .await
        .unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn test_delete_owned_scoping(pool: SqlitePool) {
    let owner = common::create_test_user(&pool, "a@example.com").await;
    let other = common::create_test_user(&pool, "b@example.com").await;
    let repo = SqliteUrlRepository::new(pool);

    repo.create(new_url("url-1", "abc12345", "https://example.com", &owner))
        .await
        .unwrap();

    assert!(!repo.delete_owned("url-1", &other).await.unwrap());
    assert!(repo.find_by_id("url-1").await.unwrap().is_some());

    assert!(repo.delete_owned("url-1", &owner).await.unwrap());
    assert!(repo.find_by_id("url-1").await.unwrap().is_none());

    // Idempotence at the repo level: a second delete simply misses.
    assert!(!repo.delete_owned("url-1", &owner).await.unwrap());
}

#[sqlx::test]
async fn test_resolve_and_count_click(pool: SqlitePool) {
    let owner = common::create_test_user(&pool, "a@example.com").await;
    let repo = SqliteUrlRepository::new(pool);

    repo.create(new_url("url-1", "abc12345", "https://example.com/target", &owner))
        .await
        .unwrap();

    let destination = repo.resolve_and_count_click("abc12345").await.unwrap();
    assert_eq!(destination.as_deref(), Some("https://example.com/target"));

    let resolved = repo.find_by_id("url-1").await.unwrap().unwrap();
    assert_eq!(resolved.clicks, 1);

    repo.resolve_and_count_click("abc12345").await.unwrap();
    let resolved = repo.find_by_id("url-1").await.unwrap().unwrap();
    assert_eq!(resolved.clicks, 2);
}

#[sqlx::test]
async fn test_resolve_unknown_token(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool);

    assert!(repo.resolve_and_count_click("missing1").await.unwrap().is_none());
}
