use crate::api::{ApiClient, ApiError, EmployeeSummary};
use std::rc::Rc;

#[derive(Clone)]
pub struct MonitorRepository {
    api: Rc<ApiClient>,
}

impl MonitorRepository {
    pub fn new_with_client(api: Rc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<EmployeeSummary>, ApiError> {
        self.api.list_employees().await
    }
}
