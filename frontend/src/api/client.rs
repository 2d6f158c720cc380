use reqwest::{header::AUTHORIZATION, Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    api::types::ApiError,
    config::{self, ApiEndpoints},
    state::session::{InvalidationReason, Session},
};

/// Which backend collaborator a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Auth,
    Attendance,
    Admin,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    endpoints: Option<ApiEndpoints>,
    session: Session,
}

impl ApiClient {
    pub fn new(session: Session) -> Self {
        Self {
            client: Client::new(),
            endpoints: None,
            session,
        }
    }

    pub fn new_with_endpoints(endpoints: ApiEndpoints, session: Session) -> Self {
        Self {
            client: Client::new(),
            endpoints: Some(endpoints),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    async fn resolved_endpoints(&self) -> ApiEndpoints {
        match &self.endpoints {
            Some(endpoints) => endpoints.clone(),
            None => config::await_endpoints().await,
        }
    }

    pub(super) async fn url(&self, service: Service, path: &str) -> String {
        let endpoints = self.resolved_endpoints().await;
        let base = match service {
            Service::Auth => endpoints.auth,
            Service::Attendance => endpoints.attendance,
            Service::Admin => endpoints.admin,
        };
        format!("{}{}", base, path)
    }

    /// Attaches the bearer token, or fails before any request is issued.
    pub(super) fn authorize(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let token = self.session.require_token()?;
        Ok(builder.header(AUTHORIZATION, format!("Bearer {}", token)))
    }

    pub(super) async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        builder.send().await.map_err(|e| {
            log::error!("Request failed: {}", e);
            ApiError::request_failed(format!("Request failed: {}", e))
        })
    }

    fn handle_unauthorized_status(&self, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("Session rejected by server");
            self.session.invalidate(InvalidationReason::Unauthorized);
        }
    }

    async fn error_from(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.bytes().await.unwrap_or_default();
        let error = ApiError::from_response(status, &body);
        log::warn!("Request returned {}: {}", status, error.error);
        error
    }

    pub(super) async fn map_json_response<T: DeserializeOwned>(
        response: Response,
    ) -> Result<T, ApiError> {
        if response.status().is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from(response).await)
        }
    }

    pub(super) async fn map_empty_response(response: Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(response).await)
        }
    }

    /// Sends an authenticated request; a 401 invalidates the session.
    pub(super) async fn send_protected(
        &self,
        builder: RequestBuilder,
    ) -> Result<Response, ApiError> {
        let response = Self::send(self.authorize(builder)?).await?;
        self.handle_unauthorized_status(response.status());
        Ok(response)
    }
}
