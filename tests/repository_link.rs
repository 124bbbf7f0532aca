//! PostgreSQL repository tests. `#[sqlx::test]` creates a fresh database per
//! test from `DATABASE_URL` and applies the migrations.

use chrono::{Duration, Utc};
use link_shortener::domain::entities::NewLink;
use link_shortener::domain::errors::RepositoryError;
use link_shortener::domain::repositories::LinkRepository;
use link_shortener::infrastructure::persistence::PgLinkRepository;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

fn new_link(code: &str) -> NewLink {
    NewLink {
        id: Uuid::new_v4(),
        target_url: format!("https://example.com/{code}"),
        short_code: code.to_string(),
        expire_at: Utc::now() + Duration::days(30),
    }
}

#[sqlx::test]
async fn test_create_link(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo.create(new_link("test1234")).await.unwrap();

    assert_eq!(link.short_code, "test1234");
    assert_eq!(link.target_url, "https://example.com/test1234");
    assert_eq!(link.access_count, 0);
    assert!(link.last_access.is_none());
    assert!(link.deleted_at.is_none());
}

#[sqlx::test]
async fn test_create_duplicate_code(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    repo.create(new_link("dupcode1")).await.unwrap();
    let result = repo.create(new_link("dupcode1")).await;

    assert!(matches!(
        result,
        Err(RepositoryError::DuplicateShortCode { code }) if code == "dupcode1"
    ));
}

#[sqlx::test]
async fn test_find_by_code_not_found(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo.find_by_code("notfound").await;

    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

#[sqlx::test]
async fn test_list_newest_first(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    repo.create(new_link("first001")).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    repo.create(new_link("second02")).await.unwrap();

    let codes: Vec<String> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.short_code)
        .collect();

    assert_eq!(codes, vec!["second02", "first001"]);
}

#[sqlx::test]
async fn test_record_access_increments(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    let link = repo.create(new_link("counter1")).await.unwrap();

    repo.record_access(link.id, Utc::now()).await.unwrap();
    repo.record_access(link.id, Utc::now()).await.unwrap();

    let stored = repo.find_by_code("counter1").await.unwrap();
    assert_eq!(stored.access_count, 2);
    assert!(stored.last_access.is_some());
}

#[sqlx::test]
async fn test_concurrent_record_access(pool: PgPool) {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    let link = repo.create(new_link("parallel")).await.unwrap();

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.record_access(link.id, Utc::now()).await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let stored = repo.find_by_code("parallel").await.unwrap();
    assert_eq!(stored.access_count, 20);
}

#[sqlx::test]
async fn test_soft_delete(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    let link = repo.create(new_link("delete01")).await.unwrap();

    repo.soft_delete("delete01").await.unwrap();

    assert!(matches!(
        repo.find_active_by_code("delete01").await,
        Err(RepositoryError::LinkDeleted)
    ));
    assert!(repo.find_by_code("delete01").await.unwrap().is_deleted());
    assert!(matches!(
        repo.soft_delete("delete01").await,
        Err(RepositoryError::LinkDeleted)
    ));
    assert!(matches!(
        repo.soft_delete("missing1").await,
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(
        repo.record_access(link.id, Utc::now()).await,
        Err(RepositoryError::NotFound)
    ));
}

#[sqlx::test]
async fn test_ping(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
}
