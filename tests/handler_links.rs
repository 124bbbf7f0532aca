mod common;

use axum::{
    Router,
    routing::{delete, get},
};
use axum_test::TestServer;
use link_shortener::api::handlers::{
    delete_empty_link_handler, delete_link_handler, links_handler,
};
use link_shortener::domain::repositories::LinkRepository;

fn app(state: link_shortener::state::AppState) -> TestServer {
    let app = Router::new()
        .route("/shortener", get(links_handler))
        .route("/", delete(delete_empty_link_handler))
        .route("/{link}", delete(delete_link_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_list_links_empty() {
    let (state, _repo) = common::create_test_state();
    let server = app(state);

    let response = server.get("/shortener").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), serde_json::json!([]));
}

#[tokio::test]
async fn test_list_links_includes_deleted_newest_first() {
    let (state, repo) = common::create_test_state();
    let server = app(state);

    common::create_test_link(&repo, "older001", "https://example.com/1").await;
    common::create_deleted_link(&repo, "newer002", "https://example.com/2").await;

    let response = server.get("/shortener").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["short_link"], "https://sho.rt/newer002");
    assert!(items[0]["deleted_at"].is_string());
    assert_eq!(items[1]["short_link"], "https://sho.rt/older001");
}

#[tokio::test]
async fn test_delete_link_success() {
    let (state, repo) = common::create_test_state();
    let server = app(state);

    common::create_test_link(&repo, "todelete", "https://example.com").await;

    let response = server.delete("/todelete").await;

    response.assert_status_ok();
    response.assert_json(&serde_json::json!({ "code": 200, "message": "success" }));

    let link = repo.find_by_code("todelete").await.unwrap();
    assert!(link.is_deleted());
}

#[tokio::test]
async fn test_delete_link_twice() {
    let (state, repo) = common::create_test_state();
    let server = app(state);

    common::create_test_link(&repo, "twice001", "https://example.com").await;

    server.delete("/twice001").await.assert_status_ok();

    let response = server.delete("/twice001").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "link is deleted");
}

#[tokio::test]
async fn test_delete_link_not_found() {
    let (state, _repo) = common::create_test_state();
    let server = app(state);

    // Only emptiness is checked on delete; other codes go to storage.
    let response = server.delete("/abc").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_empty_link() {
    let (state, _repo) = common::create_test_state();
    let server = app(state);

    let response = server.delete("/").await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["reason"], "short link cannot be empty");
}
