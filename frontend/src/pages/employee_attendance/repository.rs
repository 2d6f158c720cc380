use crate::api::{ApiClient, ApiError, AttendanceRecord};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeeAttendanceRepository {
    api: Rc<ApiClient>,
}

impl EmployeeAttendanceRepository {
    pub fn new_with_client(api: Rc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn fetch(&self, employee_id: &str) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.api.get_employee_attendance(employee_id).await
    }
}
