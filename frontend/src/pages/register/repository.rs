use crate::api::{ApiClient, ApiError, RegisterRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct RegisterRepository {
    api: Rc<ApiClient>,
}

impl RegisterRepository {
    pub fn new_with_client(api: Rc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.api.register(request).await
    }
}
