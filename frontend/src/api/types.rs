use chrono::{DateTime, NaiveDateTime, Utc};
use leptos::*;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::state::role::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "string_or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub email: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default, deserialize_with = "role_or_default")]
    pub role: Role,
}

impl UserProfile {
    /// Photo URL, or a generated initials avatar when the profile has none.
    pub fn avatar_url(&self) -> String {
        match self.photo.as_deref().map(str::trim) {
            Some(photo) if !photo.is_empty() => photo.to_string(),
            _ => format!(
                "https://ui-avatars.com/api/?name={}&background=random",
                percent_encoding::utf8_percent_encode(
                    &self.name,
                    percent_encoding::NON_ALPHANUMERIC
                )
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    ClockedIn,
    ClockedOut,
    NotRecorded,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::ClockedIn => "clocked_in",
            AttendanceStatus::ClockedOut => "clocked_out",
            AttendanceStatus::NotRecorded => "not_recorded",
        }
    }

    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceStatusResponse {
    pub status: AttendanceStatus,
    #[serde(default, deserialize_with = "flexible_timestamp")]
    pub clock_in_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "flexible_timestamp")]
    pub clock_out_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockInRecord {
    #[serde(default, deserialize_with = "flexible_timestamp")]
    pub clock_in: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockInResponse {
    pub attendance: ClockInRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockOutRecord {
    #[serde(default, deserialize_with = "flexible_timestamp")]
    pub clock_out: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockOutResponse {
    pub attendance: ClockOutRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub position: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub department: String,
    #[serde(default)]
    pub profile_photo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeListResponse {
    #[serde(default)]
    pub employees: Vec<EmployeeSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDetail {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub position: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub department: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub joined_at: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub status: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub address: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub phone: String,
    #[serde(default)]
    pub profile_photo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeDetailResponse {
    pub employee: EmployeeDetail,
}

/// Body of `PUT /employee/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEmployeeRequest {
    pub name: String,
    pub position: String,
    pub department: String,
    pub joined_at: String,
    pub status: String,
    pub address: String,
    pub phone: String,
}

impl From<&EmployeeDetail> for UpdateEmployeeRequest {
    fn from(employee: &EmployeeDetail) -> Self {
        Self {
            name: employee.name.clone(),
            position: employee.position.clone(),
            department: employee.department.clone(),
            joined_at: employee.joined_at.clone(),
            status: employee.status.clone(),
            address: employee.address.clone(),
            phone: employee.phone.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceUser {
    #[serde(default, deserialize_with = "string_or_default")]
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(deserialize_with = "required_timestamp")]
    pub clock_in: DateTime<Utc>,
    #[serde(default, deserialize_with = "flexible_timestamp")]
    pub clock_out: Option<DateTime<Utc>>,
    #[serde(default)]
    pub user: AttendanceUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeAttendanceResponse {
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(skip)]
    pub status: Option<u16>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
            status: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn missing_token() -> Self {
        Self::with_code("No authentication token found.", "MISSING_TOKEN")
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self {
            status: Some(401),
            ..Self::with_code(msg, "UNAUTHORIZED")
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: Some(404),
            ..Self::with_code(msg, "NOT_FOUND")
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(404) || self.code == "NOT_FOUND"
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401) || self.code == "UNAUTHORIZED"
    }

    pub fn is_missing_token(&self) -> bool {
        self.code == "MISSING_TOKEN"
    }

    /// Message sent by the server in an `{error}` body, if the request got that far.
    pub fn server_message(&self) -> Option<&str> {
        self.status
            .map(|_| self.error.as_str())
            .filter(|msg| !msg.trim().is_empty() && !msg.starts_with("Request failed with status"))
    }

    /// `"❌ "` followed by the server message, or `fallback` when there is none.
    pub fn toast_message(&self, fallback: &str) -> String {
        format!("❌ {}", self.server_message().unwrap_or(fallback))
    }

    /// Builds an error from a non-2xx response body, tolerating bodies that are not `{error}`.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let parsed = serde_json::from_slice::<ApiError>(body).ok();
        let mut error = match parsed {
            Some(parsed) if !parsed.error.trim().is_empty() => parsed,
            _ => Self::with_code(
                format!("Request failed with status {}", status),
                "REQUEST_FAILED",
            ),
        };
        if error.code.is_empty() || error.code == "REQUEST_FAILED" {
            error.code = code_for_status(status).to_string();
        }
        error.status = Some(status);
        error
    }
}

fn code_for_status(status: u16) -> &'static str {
    match status {
        400 => "BAD_REQUEST",
        401 => "UNAUTHORIZED",
        403 => "FORBIDDEN",
        404 => "NOT_FOUND",
        409 => "CONFLICT",
        422 => "VALIDATION_ERROR",
        500..=599 => "SERVER_ERROR",
        _ => "REQUEST_FAILED",
    }
}

fn string_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn role_or_default<'de, D>(deserializer: D) -> Result<Role, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map(Role::parse).unwrap_or_default())
}

fn id_from_value<E: serde::de::Error>(value: Value) -> Result<Option<String>, E> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(E::custom(format!("unexpected id value: {}", other))),
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    id_from_value(Value::deserialize(deserializer)?)?
        .ok_or_else(|| serde::de::Error::custom("id must not be null"))
}

fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    id_from_value(Value::deserialize(deserializer)?)
}

/// RFC 3339 timestamps, or naive `YYYY-MM-DD HH:MM:SS` values read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn flexible_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw))),
    }
}

fn required_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    flexible_timestamp(deserializer)?
        .ok_or_else(|| serde::de::Error::custom("timestamp must not be empty"))
}
