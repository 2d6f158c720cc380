#![cfg(not(coverage))]

use super::*;
use crate::{
    state::{role::Role, session::Session},
    test_support::helpers::{api_client_for, employee_json, record_json},
};
use httpmock::prelude::*;
use serde_json::json;
use std::{cell::Cell, rc::Rc};

#[tokio::test]
async fn auth_endpoints_use_auth_base_and_parse_bodies() {
    let server = MockServer::start_async().await;
    let session = Session::in_memory(Some("tok-1"));
    let api = api_client_for(&server, session);

    let login = server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/login")
            .json_body(json!({"email": "a@b.c", "password": "pw"}));
        then.status(200).json_body(json!({"token": "fresh"}));
    });
    let register = server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/register")
            .json_body(json!({"name": "A", "email": "a@b.c", "password": "pw", "role": "admin"}));
        then.status(201).json_body(json!({"message": "ok"}));
    });
    let profile = server.mock(|when, then| {
        when.method(GET)
            .path("/api/auth/profile")
            .header("authorization", "Bearer tok-1");
        then.status(200).json_body(json!({
            "name": "Ana", "email": "ana@example.com", "photo": null, "role": "admin"
        }));
    });

    let token = api
        .login(&LoginRequest {
            email: "a@b.c".into(),
            password: "pw".into(),
        })
        .await
        .unwrap();
    assert_eq!(token.token, "fresh");

    api.register(&RegisterRequest {
        name: "A".into(),
        email: "a@b.c".into(),
        password: "pw".into(),
        role: Role::Admin,
    })
    .await
    .unwrap();

    let me = api.get_profile().await.unwrap();
    assert_eq!(me.name, "Ana");
    assert_eq!(me.role, Role::Admin);

    login.assert();
    register.assert();
    profile.assert();
}

#[tokio::test]
async fn login_failure_surfaces_server_message_without_touching_session() {
    let server = MockServer::start_async().await;
    let session = Session::in_memory(Some("kept"));
    let api = api_client_for(&server, session.clone());

    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(401).json_body(json!({"error": "Wrong password"}));
    });

    let err = api
        .login(&LoginRequest {
            email: "a@b.c".into(),
            password: "bad".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.error, "Wrong password");
    assert!(err.is_unauthorized());
    assert_eq!(session.token().as_deref(), Some("kept"));
}

#[tokio::test]
async fn protected_calls_without_token_issue_no_request() {
    let server = MockServer::start_async().await;
    let api = api_client_for(&server, Session::in_memory(None));

    let status = server.mock(|when, then| {
        when.method(GET).path("/api/attendance/status");
        then.status(200).json_body(json!({"status": "not_recorded"}));
    });
    let employees = server.mock(|when, then| {
        when.method(GET).path("/api/admin/employee");
        then.status(200).json_body(json!({"employees": []}));
    });

    assert!(api.get_attendance_status().await.unwrap_err().is_missing_token());
    assert!(api.list_employees().await.unwrap_err().is_missing_token());
    status.assert_hits(0);
    employees.assert_hits(0);
}

#[tokio::test]
async fn unauthorized_protected_call_invalidates_session() {
    let server = MockServer::start_async().await;
    let session = Session::in_memory(Some("expired"));
    let fired = Rc::new(Cell::new(false));
    let fired_hook = fired.clone();
    session.on_invalidate(move |_| fired_hook.set(true));
    let api = api_client_for(&server, session.clone());

    server.mock(|when, then| {
        when.method(GET).path("/api/auth/profile");
        then.status(401).json_body(json!({"error": "Token expired"}));
    });

    let err = api.get_profile().await.unwrap_err();
    assert_eq!(err.error, "Token expired");
    assert!(fired.get());
    assert!(session.token().is_none());
}

#[tokio::test]
async fn attendance_endpoints_round_trip() {
    let server = MockServer::start_async().await;
    let api = api_client_for(&server, Session::in_memory(Some("tok")));

    server.mock(|when, then| {
        when.method(GET)
            .path("/api/attendance/status")
            .header("authorization", "Bearer tok");
        then.status(200).json_body(json!({
            "status": "clocked_in",
            "clock_in_time": "2024-01-01T09:00:00Z",
            "clock_out_time": null
        }));
    });
    let clock_in = server.mock(|when, then| {
        when.method(POST)
            .path("/api/attendance/clock-in")
            .header_exists("content-type")
            .body_contains("name=\"photo\"")
            .body_contains("attendance_photo.jpg");
        then.status(201)
            .json_body(json!({"attendance": {"clock_in": "2024-01-01T09:00:00Z"}}));
    });
    let clock_out = server.mock(|when, then| {
        when.method(POST)
            .path("/api/attendance/clock-out")
            .json_body(json!({}));
        then.status(200)
            .json_body(json!({"attendance": {"clock_out": "2024-01-01T17:30:00Z"}}));
    });

    let status = api.get_attendance_status().await.unwrap();
    assert_eq!(status.status, AttendanceStatus::ClockedIn);

    let response = api
        .clock_in(PhotoUpload {
            bytes: vec![0xFF, 0xD8, 0xFF],
            file_name: "attendance_photo.jpg".into(),
            mime_type: "image/jpeg".into(),
        })
        .await
        .unwrap();
    assert!(response.attendance.clock_in.is_some());

    let response = api.clock_out().await.unwrap();
    assert!(response.attendance.clock_out.is_some());

    clock_in.assert();
    clock_out.assert();
}

#[tokio::test]
async fn admin_endpoints_unwrap_envelopes() {
    let server = MockServer::start_async().await;
    let api = api_client_for(&server, Session::in_memory(Some("tok")));

    server.mock(|when, then| {
        when.method(GET).path("/api/admin/employee");
        then.status(200)
            .json_body(json!({"employees": [employee_json("e1", "Ana"), employee_json("e2", "Budi")]}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/employee/e1");
        then.status(200)
            .json_body(json!({"employee": employee_json("e1", "Ana")}));
    });
    let update = server.mock(|when, then| {
        when.method(PUT).path("/api/admin/employee/e1").json_body(json!({
            "name": "Ana",
            "position": "Lead",
            "department": "Engineering",
            "joined_at": "2023-01-15",
            "status": "active",
            "address": "Jl. Merdeka 1",
            "phone": "0812"
        }));
        then.status(200).json_body(json!({"message": "updated"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/admin/attendance/e1");
        then.status(200)
            .json_body(json!({"attendance": [record_json(1, "2024-02-01T08:00:00Z", None)]}));
    });

    let list = api.list_employees().await.unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[1].name, "Budi");

    let mut detail = api.get_employee("e1").await.unwrap();
    detail.position = "Lead".into();
    detail.joined_at = "2023-01-15".into();
    api.update_employee("e1", &UpdateEmployeeRequest::from(&detail))
        .await
        .unwrap();
    update.assert();

    let records = api.get_employee_attendance("e1").await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "1");
}

#[tokio::test]
async fn admin_not_found_is_reported_as_not_found() {
    let server = MockServer::start_async().await;
    let session = Session::in_memory(Some("tok"));
    let api = api_client_for(&server, session.clone());

    server.mock(|when, then| {
        when.method(GET).path("/api/admin/attendance/missing");
        then.status(404).json_body(json!({"error": "No attendance found"}));
    });

    let err = api.get_employee_attendance("missing").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(session.has_token());
}

#[tokio::test]
async fn unreachable_backend_is_request_failed() {
    let api = ApiClient::new_with_endpoints(
        crate::config::ApiEndpoints::under("http://127.0.0.1:9"),
        Session::in_memory(Some("tok")),
    );
    let err = api.get_attendance_status().await.unwrap_err();
    assert_eq!(err.code, "REQUEST_FAILED");
}
