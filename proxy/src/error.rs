use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Request body exceeds {0} bytes")]
    PayloadTooLarge(usize),
    #[error("Upstream {0} timed out")]
    Timeout(&'static str),
    #[error("Upstream {service} unavailable: {source}")]
    Upstream {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("Invalid upstream response: {0}")]
    BadGateway(String),
}

impl ProxyError {
    pub fn from_reqwest(service: &'static str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProxyError::Timeout(service)
        } else {
            ProxyError::Upstream {
                service,
                source: err,
            }
        }
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ProxyError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE"),
            ProxyError::Timeout(_) => (StatusCode::GATEWAY_TIMEOUT, "UPSTREAM_TIMEOUT"),
            ProxyError::Upstream { .. } => (StatusCode::BAD_GATEWAY, "UPSTREAM_UNAVAILABLE"),
            ProxyError::BadGateway(_) => (StatusCode::BAD_GATEWAY, "BAD_GATEWAY"),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        tracing::warn!(status = status.as_u16(), code, error = %self, "Proxy request failed");
        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        });
        (status, body).into_response()
    }
}
