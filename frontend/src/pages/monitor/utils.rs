use crate::api::EmployeeSummary;

pub const DEFAULT_PROFILE_PHOTO: &str = "https://i.ibb.co.com/8DN9FtF/default-profile-photo.jpg";
pub const NO_POSITION: &str = "No Position";
pub const NO_DEPARTMENT: &str = "No Department";
pub const LIST_FETCH_FALLBACK: &str = "Something went wrong";

/// Case-insensitive substring match over name, position and department.
/// An empty query keeps every employee.
pub fn filter_employees(employees: &[EmployeeSummary], query: &str) -> Vec<EmployeeSummary> {
    let needle = query.to_lowercase();
    employees
        .iter()
        .filter(|employee| {
            [&employee.name, &employee.position, &employee.department]
                .iter()
                .any(|field| !field.is_empty() && field.to_lowercase().contains(&needle))
                || needle.is_empty()
        })
        .cloned()
        .collect()
}

pub fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

/// `position • department`, with placeholders for blanks.
pub fn role_line(position: Option<&str>, department: Option<&str>) -> String {
    format!(
        "{} • {}",
        or_placeholder(position.unwrap_or_default(), NO_POSITION),
        or_placeholder(department.unwrap_or_default(), NO_DEPARTMENT)
    )
}

pub fn photo_or_default(url: Option<&str>) -> String {
    url.filter(|u| !u.trim().is_empty())
        .unwrap_or(DEFAULT_PROFILE_PHOTO)
        .to_string()
}
