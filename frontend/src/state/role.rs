use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Employee,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    RecordAttendance,
    MonitorEmployees,
}

/// Navigation entry unlocked by a capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityLink {
    pub capability: Capability,
    pub nav_label: &'static str,
    pub action_label: &'static str,
    pub path: &'static str,
}

const CAPABILITY_LINKS: &[CapabilityLink] = &[
    CapabilityLink {
        capability: Capability::RecordAttendance,
        nav_label: "Attendance",
        action_label: "Record Attendance",
        path: "/main/attendance",
    },
    CapabilityLink {
        capability: Capability::MonitorEmployees,
        nav_label: "Employees",
        action_label: "Monitor Employees",
        path: "/main/monitor",
    },
];

impl Role {
    pub const ALL: [Role; 2] = [Role::Employee, Role::Admin];

    /// Unknown role strings fall back to the least privileged role.
    pub fn parse(raw: &str) -> Role {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Role::Admin,
            "employee" => Role::Employee,
            other => {
                log::warn!("Unknown role '{}', treating as employee", other);
                Role::Employee
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Employee => "Employee",
            Role::Admin => "Admin",
        }
    }

    pub fn capabilities(&self) -> &'static [Capability] {
        match self {
            Role::Employee => &[Capability::RecordAttendance],
            Role::Admin => &[Capability::RecordAttendance, Capability::MonitorEmployees],
        }
    }

    pub fn can(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    pub fn links(&self) -> Vec<CapabilityLink> {
        CAPABILITY_LINKS
            .iter()
            .filter(|link| self.can(link.capability))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive_and_defaults_to_employee() {
        assert_eq!(Role::parse("Admin"), Role::Admin);
        assert_eq!(Role::parse(" employee "), Role::Employee);
        assert_eq!(Role::parse("superuser"), Role::Employee);
        assert_eq!(Role::parse(""), Role::Employee);
    }

    #[test]
    fn only_admin_can_monitor_employees() {
        assert!(Role::Admin.can(Capability::MonitorEmployees));
        assert!(!Role::Employee.can(Capability::MonitorEmployees));
        for role in Role::ALL {
            assert!(role.can(Capability::RecordAttendance));
        }
    }

    #[test]
    fn links_follow_capability_table_order() {
        let admin: Vec<_> = Role::Admin.links().iter().map(|l| l.path).collect();
        assert_eq!(admin, vec!["/main/attendance", "/main/monitor"]);
        let employee: Vec<_> = Role::Employee.links().iter().map(|l| l.action_label).collect();
        assert_eq!(employee, vec!["Record Attendance"]);
    }

    #[test]
    fn role_round_trips_through_lowercase_strings() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), role);
        }
    }
}
