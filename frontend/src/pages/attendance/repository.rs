use crate::{
    api::{
        ApiClient, ApiError, AttendanceStatusResponse, ClockInResponse, ClockOutResponse,
        PhotoUpload,
    },
    state::session::Session,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct AttendanceRepository {
    api: Rc<ApiClient>,
}

impl AttendanceRepository {
    pub fn new_with_client(api: Rc<ApiClient>) -> Self {
        Self { api }
    }

    pub fn session(&self) -> &Session {
        self.api.session()
    }

    pub async fn fetch_status(&self) -> Result<AttendanceStatusResponse, ApiError> {
        self.api.get_attendance_status().await
    }

    pub async fn clock_in(&self, photo: PhotoUpload) -> Result<ClockInResponse, ApiError> {
        self.api.clock_in(photo).await
    }

    pub async fn clock_out(&self) -> Result<ClockOutResponse, ApiError> {
        self.api.clock_out().await
    }
}
