// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for `HttpClient`
//!
//! A wiremock server stands in for the remote service.

use std::time::Duration;

use http_client::{HttpClient, HttpClientError, HttpClientOptions};
use serde::{Deserialize, Serialize};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string, header, method, path},
};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Widget {
    name: String,
    value: i32,
}

fn client_for(server: &MockServer) -> HttpClient {
    HttpClient::new(server.uri(), HttpClientOptions::default()).unwrap()
}

#[tokio::test]
async fn put_encodes_struct_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/test"))
        .and(header("content-type", "application/json"))
        .and(body_string(r#"{"name":"test","value":42}"#))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    let widget = Widget {
        name: "test".to_string(),
        value: 42,
    };
    let response = client_for(&server).put_json("/test", &widget).await.unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn raw_bodies_use_the_given_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/test"))
        .and(header("content-type", "text/plain"))
        .and(body_string("raw body content"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(header("content-type", "application/xml"))
        .and(body_string("<a/>"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .put_raw("/test", "raw body content", "text/plain")
        .await
        .unwrap();
    let created = client
        .post_raw("/upload", "<a/>", "application/xml")
        .await
        .unwrap();
    assert_eq!(created.status().as_u16(), 201);
}

#[tokio::test]
async fn text_bodies_on_verb_methods_are_labelled_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/echo"))
        .and(header("content-type", "application/json"))
        .and(body_string(r#"{"already":"encoded"}"#))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .post("/echo", r#"{"already":"encoded"}"#)
        .await
        .unwrap();
}

#[tokio::test]
async fn post_json_encodes_maps() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tags"))
        .and(header("content-type", "application/json"))
        .and(body_string(r#"{"a":1,"b":2}"#))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let tags = std::collections::BTreeMap::from([("a", 1), ("b", 2)]);
    let response = client_for(&server).post_json("/tags", &tags).await.unwrap();
    assert_eq!(response.status().as_u16(), 201);
}

#[tokio::test]
async fn raw_body_without_content_type_sends_no_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/blob"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    client_for(&server)
        .post_raw("/blob", "payload", "")
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].body, b"payload");
    assert!(!received[0].headers.contains_key("content-type"));
}

#[tokio::test]
async fn empty_body_sends_no_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/resource/123"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .delete("/resource/123", ())
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 204);

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].body.is_empty());
    assert!(!received[0].headers.contains_key("content-type"));
}

#[tokio::test]
async fn error_status_carries_the_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Bad Request"))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let err = client
        .put("/test", json!({"key": "value"}))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.to_string(), "Bad Request");

    let err = client.delete("/resource/999", ()).await.unwrap_err();
    assert!(matches!(
        err,
        HttpClientError::Status { status: 404, ref body } if body == "Not Found"
    ));
}

#[tokio::test]
async fn redirects_and_informational_codes_below_400_succeed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(304))
        .mount(&server)
        .await;

    let response = client_for(&server).get("/cached", ()).await.unwrap();
    assert_eq!(response.status().as_u16(), 304);
}

#[tokio::test]
async fn default_headers_go_on_every_request() {
    let server = MockServer::start().await;
    Mock::given(header("Authorization", "Bearer token123"))
        .and(header("X-Custom-Header", "custom-value"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    let options = HttpClientOptions::default().with_headers([
        ("Authorization", "Bearer token123"),
        ("X-Custom-Header", "custom-value"),
    ]);
    let client = HttpClient::new(server.uri(), options).unwrap();

    client
        .put("/test", json!({"key": "value"}))
        .await
        .unwrap();
    client.delete("/resource/123", ()).await.unwrap();
}

#[tokio::test]
async fn get_json_decodes_successful_responses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/widgets/7"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"name": "gear", "value": 7})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/widgets/8"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let widget: Widget = client.get_json("/widgets/7").await.unwrap();
    assert_eq!(
        widget,
        Widget {
            name: "gear".to_string(),
            value: 7
        }
    );

    let err = client.get_json::<Widget>("/widgets/8").await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "boom");
}

#[tokio::test]
async fn slow_responses_time_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let options = HttpClientOptions::default().with_timeout(Duration::from_millis(100));
    let client = HttpClient::new(server.uri(), options).unwrap();

    let err = client.get("/slow", ()).await.unwrap_err();
    assert!(matches!(err, HttpClientError::Timeout(d) if d == Duration::from_millis(100)));
}
