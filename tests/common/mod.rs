#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use link_shortener::domain::entities::{Link, NewLink};
use link_shortener::domain::errors::RepositoryError;
use link_shortener::domain::repositories::LinkRepository;
use link_shortener::infrastructure::persistence::InMemoryLinkRepository;
use link_shortener::state::AppState;
use std::sync::Arc;
use uuid::Uuid;

pub const BASE_URL: &str = "https://sho.rt";

pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let state = AppState::from_repository(repo.clone(), BASE_URL);

    (state, repo)
}

pub fn create_state_with(repo: Arc<dyn LinkRepository>) -> AppState {
    AppState::from_repository(repo, BASE_URL)
}

pub async fn create_test_link(repo: &InMemoryLinkRepository, code: &str, url: &str) -> Link {
    repo.create(NewLink {
        id: Uuid::new_v4(),
        target_url: url.to_string(),
        short_code: code.to_string(),
        expire_at: Utc::now() + Duration::days(30),
    })
    .await
    .unwrap()
}

pub async fn create_deleted_link(repo: &InMemoryLinkRepository, code: &str, url: &str) -> Link {
    let link = create_test_link(repo, code, url).await;
    repo.soft_delete(code).await.unwrap();
    link
}

/// Repository whose backend is unreachable.
pub struct FailingRepository;

#[async_trait]
impl LinkRepository for FailingRepository {
    async fn create(&self, _new_link: NewLink) -> Result<Link, RepositoryError> {
        Err(down())
    }

    async fn list(&self) -> Result<Vec<Link>, RepositoryError> {
        Err(down())
    }

    async fn find_active_by_code(&self, _code: &str) -> Result<Link, RepositoryError> {
        Err(down())
    }

    async fn find_by_code(&self, _code: &str) -> Result<Link, RepositoryError> {
        Err(down())
    }

    async fn record_access(
        &self,
        _id: Uuid,
        _accessed_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        Err(down())
    }

    async fn soft_delete(&self, _code: &str) -> Result<(), RepositoryError> {
        Err(down())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Err(down())
    }
}

fn down() -> RepositoryError {
    RepositoryError::Backend("connection refused".to_string())
}
