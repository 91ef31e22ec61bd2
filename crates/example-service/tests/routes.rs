// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Router behaviour through `tower::ServiceExt::oneshot`

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use example_service::{AppState, ServiceConfig, create_routes};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    create_routes(AppState::new("catalog", 45))
}

async fn call(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_reports_service_name() {
    let (status, body) = call("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"code": 200, "data": {"status": "ok", "service": "catalog"}})
    );
}

#[tokio::test]
async fn list_defaults_to_first_page_of_twenty() {
    let (status, body) = call("/items").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 200);

    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 20);
    assert_eq!(items[0], json!({"id": 1, "name": "item-1"}));
    assert_eq!(
        body["data"]["pagination"],
        json!({"page": 1, "page_size": 20, "total_data": 45, "total_page": 3})
    );
}

#[tokio::test]
async fn last_page_is_partial() {
    let (_, body) = call("/items?page=3&page_size=20").await;
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[0]["id"], 41);
    assert_eq!(items[4]["id"], 45);
}

#[tokio::test]
async fn page_past_the_end_is_empty() {
    let (status, body) = call("/items?page=9&page_size=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"], json!([]));
    assert_eq!(body["data"]["pagination"]["total_page"], 5);
}

#[tokio::test]
async fn invalid_paging_is_a_bad_request() {
    for uri in ["/items?page=-1", "/items?page_size=-5", "/items?page_size=101"] {
        let (status, body) = call(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["code"], 400);
        assert!(body.get("data").is_none());
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn malformed_parameters_get_an_error_envelope() {
    for uri in ["/items?page=abc", "/items?page_size=1.5", "/items/abc"] {
        let (status, body) = call(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["code"], 400, "{uri}");
        assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()), "{uri}");
    }
}

#[tokio::test]
async fn single_item_and_missing_item() {
    let (status, body) = call("/items/7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"code": 200, "data": {"id": 7, "name": "item-7"}}));

    let (status, body) = call("/items/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"code": 404, "error": "item 999 not found"}));
}

#[test]
fn bundled_config_file_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/service.yaml");
    let config = config_loader::load::<ServiceConfig>(path).unwrap();
    assert_eq!(config.listen_addr, ":8080");
    assert_eq!(config.item_count, 45);
    assert_eq!(config.logger.environment.as_deref(), Some("development"));
}
