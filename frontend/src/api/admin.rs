use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{
    client::{ApiClient, Service},
    types::{
        ApiError, AttendanceRecord, EmployeeAttendanceResponse, EmployeeDetail,
        EmployeeDetailResponse, EmployeeListResponse, EmployeeSummary, UpdateEmployeeRequest,
    },
};

fn segment(id: &str) -> String {
    utf8_percent_encode(id, NON_ALPHANUMERIC).to_string()
}

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<EmployeeSummary>, ApiError> {
        let url = self.url(Service::Admin, "/employee").await;
        let response = self.send_protected(self.http_client().get(url)).await?;
        Self::map_json_response::<EmployeeListResponse>(response)
            .await
            .map(|body| body.employees)
    }

    pub async fn get_employee(&self, id: &str) -> Result<EmployeeDetail, ApiError> {
        let url = self
            .url(Service::Admin, &format!("/employee/{}", segment(id)))
            .await;
        let response = self.send_protected(self.http_client().get(url)).await?;
        Self::map_json_response::<EmployeeDetailResponse>(response)
            .await
            .map(|body| body.employee)
    }

    pub async fn update_employee(
        &self,
        id: &str,
        request: &UpdateEmployeeRequest,
    ) -> Result<(), ApiError> {
        let url = self
            .url(Service::Admin, &format!("/employee/{}", segment(id)))
            .await;
        let response = self
            .send_protected(self.http_client().put(url).json(request))
            .await?;
        Self::map_empty_response(response).await
    }

    pub async fn get_employee_attendance(
        &self,
        id: &str,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let url = self
            .url(Service::Admin, &format!("/attendance/{}", segment(id)))
            .await;
        let response = self.send_protected(self.http_client().get(url)).await?;
        Self::map_json_response::<EmployeeAttendanceResponse>(response)
            .await
            .map(|body| body.attendance)
    }
}
