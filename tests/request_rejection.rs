//! Requests that must be rejected before any database work.
//!
//! The router runs over a lazily connected pool pointing at nothing, so a
//! test that accidentally reaches the database fails instead of passing.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{body_json, body_text, build_offline_app, delete, get, post_json, put_json, send, send_json};
use serde_json::json;

#[tokio::test]
async fn health_is_ok_without_database() {
    let response = get(build_offline_app(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}

#[tokio::test]
async fn version_reports_package() {
    let response = get(build_offline_app(), "/version").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "people-api");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn non_numeric_person_id_is_400() {
    let response = get(build_offline_app(), "/person/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "bad_request");
    assert!(json["error"]["message"].as_str().unwrap().contains("abc"));
}

#[tokio::test]
async fn non_numeric_delete_id_is_400() {
    let response = delete(build_offline_app(), "/delete/person/x1").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = delete(build_offline_app(), "/delete/book/1.0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_create_body_is_400_with_error_body() {
    let response = send_json(
        build_offline_app(),
        Method::POST,
        "/person",
        "{\"name\": \"Jack\", ".to_string(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "bad_request");
}

#[tokio::test]
async fn create_without_content_type_is_400() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/person")
        .body(Body::from(json!({"name": "Jack", "email": "jack@d.com"}).to_string()))
        .unwrap();
    let response = send(build_offline_app(), request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_missing_email_is_400() {
    let response = post_json(build_offline_app(), "/person", json!({"name": "Jack"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_invalid_email_is_validation_error() {
    let response = post_json(
        build_offline_app(),
        "/person",
        json!({"name": "Jack", "email": "not-an-email"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn malformed_update_body_is_400_not_500() {
    let response = send_json(
        build_offline_app(),
        Method::PUT,
        "/update/person",
        "not json".to_string(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_without_id_is_400() {
    let response = put_json(build_offline_app(), "/update/person", json!({"name": "Jill"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn book_with_negative_call_number_is_rejected() {
    let response = post_json(
        build_offline_app(),
        "/book",
        json!({"title": "T", "author": "A", "callNumber": -3}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["code"], "validation_error");
}

#[tokio::test]
async fn error_bodies_are_indented() {
    let response = get(build_offline_app(), "/book/nope").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.starts_with("{\n  \"error\": {"));
}

#[tokio::test]
async fn oversized_body_is_413() {
    let raw = "x".repeat(people_api::routes::MAX_BODY_BYTES + 1);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/person")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, raw.len())
        .body(Body::from(raw))
        .unwrap();
    let response = send(build_offline_app(), request).await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "payload_too_large");
}

#[tokio::test]
async fn oversized_streamed_body_is_413() {
    // Chunked with no Content-Length, so the limit trips while buffering.
    let chunks: Vec<Result<Vec<u8>, std::io::Error>> = (0..17)
        .map(|_| Ok(vec![b' '; 64 * 1024]))
        .collect();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/book")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from_stream(futures::stream::iter(chunks)))
        .unwrap();
    assert!(request.headers().get(header::CONTENT_LENGTH).is_none());
    let response = send(build_offline_app(), request).await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "payload_too_large");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let response = get(build_offline_app(), "/persons").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
