pub mod attendance;
pub mod dashboard;
pub mod employee_attendance;
pub mod employee_detail;
pub mod landing;
pub mod login;
pub mod monitor;
pub mod register;
