use crate::api::{ApiClient, ApiError, EmployeeDetail, UpdateEmployeeRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeeDetailRepository {
    api: Rc<ApiClient>,
}

impl EmployeeDetailRepository {
    pub fn new_with_client(api: Rc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn fetch(&self, id: &str) -> Result<EmployeeDetail, ApiError> {
        self.api.get_employee(id).await
    }

    pub async fn update(&self, id: &str, request: &UpdateEmployeeRequest) -> Result<(), ApiError> {
        self.api.update_employee(id, request).await
    }
}
