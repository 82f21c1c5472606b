mod common;

use serde_json::{Value, json};
use slug_redirect::config::Environment;

#[tokio::test]
async fn test_redirect_success() {
    let (server, repository) = common::create_test_server(Environment::Production);
    common::create_test_link(&repository, "target", "https://example.com/target").await;

    let response = server.get("/target").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_is_case_insensitive() {
    let (server, repository) = common::create_test_server(Environment::Production);
    common::create_test_link(&repository, "docs", "https://docs.rs").await;

    let response = server.get("/DOCS").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://docs.rs");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _repository) = common::create_test_server(Environment::Production);

    let response = server.get("/missing").await;

    response.assert_status_not_found();
    assert!(response.headers().get("location").is_none());
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Link not found" })
    );
}

#[tokio::test]
async fn test_round_trip() {
    let (server, _repository) = common::create_test_server(Environment::Production);
    let url = "https://example.com/some/path?query=1&other=Two#Frag";

    let created = server.post("/url").json(&json!({ "url": url })).await;
    assert_eq!(created.status_code(), 201);
    let slug = created.json::<Value>()["slug"].as_str().unwrap().to_string();

    let response = server.get(&format!("/{slug}")).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), url);
}

#[tokio::test]
async fn test_unknown_route_returns_json_not_found() {
    let (server, _repository) = common::create_test_server(Environment::Production);

    let response = server.get("/a/b").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["message"], "Not found");
}

#[tokio::test]
async fn test_wrong_method_returns_json_error() {
    let (server, _repository) = common::create_test_server(Environment::Production);

    let response = server.put("/url").await;

    assert_eq!(response.status_code(), 405);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Method Not Allowed" })
    );
    assert!(response.header("allow").to_str().unwrap().contains("POST"));
}

#[tokio::test]
async fn test_undecodable_slug_returns_json_error() {
    let (server, _repository) = common::create_test_server(Environment::Production);

    let response = server.get("/%FF").await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert!(json["message"].as_str().unwrap().contains("slug"));
    assert!(json.get("stack").is_none());
}

#[tokio::test]
async fn test_redirect_with_trailing_slash() {
    let (server, repository) = common::create_app_test_server(Environment::Production);
    common::create_test_link(&repository, "docs", "https://docs.rs").await;

    let response = server.get("/docs/").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://docs.rs");
}
