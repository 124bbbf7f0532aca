mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use link_shortener::api::handlers::redirect_handler;
use link_shortener::domain::repositories::LinkRepository;

fn app(state: link_shortener::state::AppState) -> TestServer {
    let app = Router::new()
        .route("/{link}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let (state, repo) = common::create_test_state();
    let server = app(state);

    common::create_test_link(&repo, "redirect", "https://example.com/target").await;

    let response = server.get("/redirect").await;

    assert_eq!(response.status_code(), 302);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_counts_every_access() {
    let (state, repo) = common::create_test_state();
    let server = app(state);

    common::create_test_link(&repo, "counted1", "https://example.com").await;

    for _ in 0..3 {
        assert_eq!(server.get("/counted1").await.status_code(), 302);
    }

    let link = repo.find_by_code("counted1").await.unwrap();
    assert_eq!(link.access_count, 3);
    assert!(link.last_access.is_some());
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, _repo) = common::create_test_state();
    let server = app(state);

    let response = server.get("/nonexist").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_deleted_link() {
    let (state, repo) = common::create_test_state();
    let server = app(state);

    common::create_deleted_link(&repo, "deleted1", "https://example.com").await;

    let response = server.get("/deleted1").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "link is deleted");

    let link = repo.find_by_code("deleted1").await.unwrap();
    assert_eq!(link.access_count, 0);
}

#[tokio::test]
async fn test_redirect_bad_short_link() {
    let (state, _repo) = common::create_test_state();
    let server = app(state);

    for path in ["/short", "/waytoolongcode", "/has%20space"] {
        let response = server.get(path).await;

        response.assert_status_bad_request();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["message"], "bad short link");
    }
}
