use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use httpmock::prelude::*;
use serde_json::{json, Value};
use std::{path::PathBuf, time::Duration};
use tower::ServiceExt;
use url::Url;
use wfh_attendance_proxy::{app, config::Config, state::AppState};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn config_for(upstream: &str, timeout: Duration) -> Config {
    let url = Url::parse(upstream).unwrap();
    Config {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        auth_upstream: url.clone(),
        attendance_upstream: url.clone(),
        admin_upstream: url,
        static_dir: fixtures_dir(),
        upstream_timeout: timeout,
    }
}

fn app_for(upstream: &str) -> Router {
    app(AppState::new(config_for(upstream, Duration::from_secs(5))).unwrap())
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn attendance_calls_are_rewritten_to_employee_prefix() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/employee/attendance/status")
            .header("authorization", "Bearer tok");
        then.status(200)
            .json_body(json!({"status": "not_recorded", "clock_in_time": null}));
    });

    let response = app_for(&server.base_url())
        .oneshot(
            Request::builder()
                .uri("/api/attendance/status")
                .header("Authorization", "Bearer tok")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    mock.assert();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(body_json(response).await["status"], "not_recorded");
}

#[tokio::test]
async fn auth_body_and_query_are_forwarded() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/login")
            .query_param("next", "main")
            .json_body(json!({"email": "ana@example.com", "password": "secret"}));
        then.status(200).json_body(json!({"token": "abc"}));
    });

    let response = app_for(&server.base_url())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login?next=main")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    json!({"email": "ana@example.com", "password": "secret"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    mock.assert();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["token"], "abc");
}

#[tokio::test]
async fn upstream_errors_pass_through_unchanged() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/attendance/9");
        then.status(404).json_body(json!({"error": "No attendance found"}));
    });

    let response = app_for(&server.base_url())
        .oneshot(
            Request::builder()
                .uri("/api/admin/attendance/9")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "No attendance found");
}

#[tokio::test]
async fn incoming_request_id_is_forwarded_and_echoed() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/admin/employee/7")
            .header("x-request-id", "req-123");
        then.status(200).json_body(json!({"message": "ok"}));
    });

    let response = app_for(&server.base_url())
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/admin/employee/7")
                .header("x-request-id", "req-123")
                .header("Content-Type", "application/json")
                .body(Body::from(json!({"position": "Lead"}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    mock.assert();
    assert_eq!(response.headers()["x-request-id"], "req-123");
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    let response = app_for("http://127.0.0.1:9")
        .oneshot(
            Request::builder()
                .uri("/api/auth/profile")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await["code"], "UPSTREAM_UNAVAILABLE");
}

#[tokio::test]
async fn slow_upstream_is_gateway_timeout() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/employee/attendance/status");
        then.status(200)
            .delay(Duration::from_secs(3))
            .json_body(json!({"status": "clocked_in"}));
    });

    let state = AppState::new(config_for(&server.base_url(), Duration::from_millis(200))).unwrap();
    let response = app(state)
        .oneshot(
            Request::builder()
                .uri("/api/attendance/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body_json(response).await["code"], "UPSTREAM_TIMEOUT");
}

#[tokio::test]
async fn client_routes_fall_back_to_index_html() {
    let response = app_for("http://127.0.0.1:9")
        .oneshot(
            Request::builder()
                .uri("/main/monitor/details?id=7")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("wfh-attendance"));
}
