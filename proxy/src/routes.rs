use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{header, HeaderMap, HeaderName},
    response::Response,
};
use std::time::Instant;
use url::Url;

use crate::{error::ProxyError, state::AppState};

/// Largest request body forwarded upstream; clock-in photos fit comfortably.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

const HOP_BY_HOP: [HeaderName; 9] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
    header::HOST,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    Auth,
    Attendance,
    Admin,
}

impl Upstream {
    pub fn name(self) -> &'static str {
        match self {
            Upstream::Auth => "auth",
            Upstream::Attendance => "attendance",
            Upstream::Admin => "admin",
        }
    }

    /// Prefix the browser calls.
    pub fn public_prefix(self) -> &'static str {
        match self {
            Upstream::Auth => "/api/auth",
            Upstream::Attendance => "/api/attendance",
            Upstream::Admin => "/api/admin",
        }
    }

    /// Prefix the collaborator serves.
    pub fn upstream_prefix(self) -> &'static str {
        match self {
            Upstream::Auth => "/api/auth",
            Upstream::Attendance => "/api/employee/attendance",
            Upstream::Admin => "/api/admin",
        }
    }
}

/// Maps a public request path onto the collaborator, keeping the raw (still encoded)
/// remainder and query string.
pub fn rewrite_target(base: &Url, upstream: Upstream, path: &str, query: Option<&str>) -> Url {
    let rest = path
        .strip_prefix(upstream.public_prefix())
        .unwrap_or_default()
        .trim_start_matches('/');
    let mut target = base.clone();
    target.set_path(&format!(
        "{}{}/{}",
        base.path().trim_end_matches('/'),
        upstream.upstream_prefix(),
        rest
    ));
    target.set_query(query);
    target
}

fn forwardable(headers: &HeaderMap) -> HeaderMap {
    let mut out = headers.clone();
    for name in HOP_BY_HOP.iter() {
        out.remove(name);
    }
    out.remove(header::CONTENT_LENGTH);
    out
}

async fn forward(state: &AppState, upstream: Upstream, req: Request) -> Result<Response, ProxyError> {
    let started = Instant::now();
    let (parts, body) = req.into_parts();
    let target = rewrite_target(
        state.config.upstream_base(upstream),
        upstream,
        parts.uri.path(),
        parts.uri.query(),
    );
    let body = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|_| ProxyError::PayloadTooLarge(MAX_BODY_BYTES))?;

    let response = state
        .client
        .request(parts.method.clone(), target.clone())
        .headers(forwardable(&parts.headers))
        .body(body)
        .send()
        .await
        .map_err(|err| ProxyError::from_reqwest(upstream.name(), err))?;

    let status = response.status();
    let headers = forwardable(response.headers());
    let bytes = response
        .bytes()
        .await
        .map_err(|err| ProxyError::from_reqwest(upstream.name(), err))?;

    tracing::info!(
        upstream = upstream.name(),
        method = %parts.method,
        target = %target,
        status = status.as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Forwarded request"
    );

    let mut builder = Response::builder().status(status);
    if let Some(out) = builder.headers_mut() {
        out.extend(headers);
    }
    builder
        .body(Body::from(bytes))
        .map_err(|err| ProxyError::BadGateway(err.to_string()))
}

pub async fn forward_auth(
    State(state): State<AppState>,
    req: Request,
) -> Result<Response, ProxyError> {
    forward(&state, Upstream::Auth, req).await
}

pub async fn forward_attendance(
    State(state): State<AppState>,
    req: Request,
) -> Result<Response, ProxyError> {
    forward(&state, Upstream::Attendance, req).await
}

pub async fn forward_admin(
    State(state): State<AppState>,
    req: Request,
) -> Result<Response, ProxyError> {
    forward(&state, Upstream::Admin, req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(raw: &str) -> Url {
        Url::parse(raw).unwrap()
    }

    #[test]
    fn attendance_prefix_is_rewritten() {
        let target = rewrite_target(
            &base("http://10.0.0.2:4002"),
            Upstream::Attendance,
            "/api/attendance/clock-in",
            None,
        );
        assert_eq!(
            target.as_str(),
            "http://10.0.0.2:4002/api/employee/attendance/clock-in"
        );
    }

    #[test]
    fn auth_and_admin_keep_their_prefix_and_query() {
        let auth = rewrite_target(&base("http://auth:4000/"), Upstream::Auth, "/api/auth/login", None);
        assert_eq!(auth.as_str(), "http://auth:4000/api/auth/login");

        let admin = rewrite_target(
            &base("http://admin:4001"),
            Upstream::Admin,
            "/api/admin/employee/a%20b",
            Some("page=2"),
        );
        assert_eq!(admin.as_str(), "http://admin:4001/api/admin/employee/a%20b?page=2");
    }

    #[test]
    fn base_path_is_preserved() {
        let target = rewrite_target(
            &base("https://gateway.example/wfh/"),
            Upstream::Admin,
            "/api/admin/attendance/7",
            None,
        );
        assert_eq!(
            target.as_str(),
            "https://gateway.example/wfh/api/admin/attendance/7"
        );
    }

    #[test]
    fn hop_by_hop_headers_are_stripped() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, "proxy.local".parse().unwrap());
        headers.insert(header::CONNECTION, "keep-alive".parse().unwrap());
        headers.insert(header::AUTHORIZATION, "Bearer t".parse().unwrap());
        headers.insert(header::CONTENT_LENGTH, "12".parse().unwrap());
        let out = forwardable(&headers);
        assert!(out.get(header::HOST).is_none());
        assert!(out.get(header::CONNECTION).is_none());
        assert!(out.get(header::CONTENT_LENGTH).is_none());
        assert_eq!(out.get(header::AUTHORIZATION).unwrap(), "Bearer t");
    }
}
