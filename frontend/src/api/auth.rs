use super::{
    client::{ApiClient, Service},
    types::{ApiError, LoginRequest, LoginResponse, RegisterRequest, UserProfile},
};

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.url(Service::Auth, "/login").await;
        let response = Self::send(self.http_client().post(url).json(request)).await?;
        Self::map_json_response(response).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let url = self.url(Service::Auth, "/register").await;
        let response = Self::send(self.http_client().post(url).json(request)).await?;
        Self::map_empty_response(response).await
    }

    pub async fn get_profile(&self) -> Result<UserProfile, ApiError> {
        let url = self.url(Service::Auth, "/profile").await;
        let response = self.send_protected(self.http_client().get(url)).await?;
        Self::map_json_response(response).await
    }
}
