use reqwest::multipart::{Form, Part};

use super::{
    client::{ApiClient, Service},
    types::{ApiError, AttendanceStatusResponse, ClockInResponse, ClockOutResponse},
};

/// Image sent as the `photo` field of a clock-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime_type: String,
}

impl PhotoUpload {
    fn into_form(self) -> Result<Form, ApiError> {
        let part = Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.mime_type)
            .map_err(|e| ApiError::validation(format!("Invalid photo type: {}", e)))?;
        Ok(Form::new().part("photo", part))
    }
}

impl ApiClient {
    pub async fn get_attendance_status(&self) -> Result<AttendanceStatusResponse, ApiError> {
        let url = self.url(Service::Attendance, "/status").await;
        let response = self.send_protected(self.http_client().get(url)).await?;
        Self::map_json_response(response).await
    }

    pub async fn clock_in(&self, photo: PhotoUpload) -> Result<ClockInResponse, ApiError> {
        let url = self.url(Service::Attendance, "/clock-in").await;
        let form = photo.into_form()?;
        let response = self
            .send_protected(self.http_client().post(url).multipart(form))
            .await?;
        Self::map_json_response(response).await
    }

    pub async fn clock_out(&self) -> Result<ClockOutResponse, ApiError> {
        let url = self.url(Service::Attendance, "/clock-out").await;
        let response = self
            .send_protected(
                self.http_client()
                    .post(url)
                    .json(&serde_json::json!({})),
            )
            .await?;
        Self::map_json_response(response).await
    }
}
