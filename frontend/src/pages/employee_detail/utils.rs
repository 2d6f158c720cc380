use crate::{
    api::{EmployeeDetail, UpdateEmployeeRequest},
    components::forms::SelectOption,
};

pub const MISSING_ID: &str = "No employee ID provided.";
pub const LOAD_FAILED: &str = "Failed to fetch employee details.";
pub const SAVE_SUCCESS: &str = "Employee updated successfully!";
pub const SAVE_FAILED: &str = "❌ Failed to update employee.";
pub const DEFAULT_DETAIL_PHOTO: &str = "/default-profile.jpg";
pub const ATTENDANCE_PATH: &str = "/main/monitor/details/attendance";

/// Editable inputs on the detail form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    Position,
    Department,
    JoinedAt,
    Status,
    Address,
    Phone,
}

impl EmployeeField {
    pub fn name(self) -> &'static str {
        match self {
            EmployeeField::Position => "position",
            EmployeeField::Department => "department",
            EmployeeField::JoinedAt => "joined_at",
            EmployeeField::Status => "status",
            EmployeeField::Address => "address",
            EmployeeField::Phone => "phone",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EmployeeField::Position => "Position",
            EmployeeField::Department => "Department",
            EmployeeField::JoinedAt => "Joined At",
            EmployeeField::Status => "Status",
            EmployeeField::Address => "Address",
            EmployeeField::Phone => "Phone",
        }
    }

    pub fn read(self, employee: &EmployeeDetail) -> &str {
        match self {
            EmployeeField::Position => &employee.position,
            EmployeeField::Department => &employee.department,
            EmployeeField::JoinedAt => &employee.joined_at,
            EmployeeField::Status => &employee.status,
            EmployeeField::Address => &employee.address,
            EmployeeField::Phone => &employee.phone,
        }
    }

    pub fn apply(self, employee: &mut EmployeeDetail, value: String) {
        let slot = match self {
            EmployeeField::Position => &mut employee.position,
            EmployeeField::Department => &mut employee.department,
            EmployeeField::JoinedAt => &mut employee.joined_at,
            EmployeeField::Status => &mut employee.status,
            EmployeeField::Address => &mut employee.address,
            EmployeeField::Phone => &mut employee.phone,
        };
        *slot = value;
    }
}

pub fn status_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("active", "Active"),
        SelectOption::new("inactive", "Inactive"),
    ]
}

/// Last fetched or saved record next to the one being edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailState {
    pub pristine: Option<EmployeeDetail>,
    pub edited: Option<EmployeeDetail>,
}

impl DetailState {
    pub fn load(&mut self, employee: EmployeeDetail) {
        self.pristine = Some(employee.clone());
        self.edited = Some(employee);
    }

    pub fn edit(&mut self, field: EmployeeField, value: String) {
        if let Some(edited) = self.edited.as_mut() {
            field.apply(edited, value);
        }
    }

    pub fn has_changes(&self) -> bool {
        self.pristine != self.edited
    }

    pub fn save_request(&self) -> Option<(String, UpdateEmployeeRequest)> {
        self.edited
            .as_ref()
            .map(|employee| (employee.id.clone(), UpdateEmployeeRequest::from(employee)))
    }

    pub fn mark_saved(&mut self, saved: EmployeeDetail) {
        self.pristine = Some(saved);
    }

    pub fn field(&self, field: EmployeeField) -> String {
        self.edited
            .as_ref()
            .map(|employee| field.read(employee).to_string())
            .unwrap_or_default()
    }
}
