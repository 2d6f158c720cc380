use crate::{
    api::ApiError,
    state::{
        profile::{use_profile, ProfileState},
        role::{CapabilityLink, Role},
    },
    utils::{lifetime::Lifetime, navigation},
};
use leptos::*;

/// Landing actions offered to a role, in capability table order.
pub fn landing_actions(role: Role) -> Vec<CapabilityLink> {
    role.links()
}

pub fn on_profile_error(err: &ApiError) {
    log::error!("Error fetching role: {}", err);
    navigation::navigate("/login");
}

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub profile: Signal<ProfileState>,
    pub actions: Signal<Vec<CapabilityLink>>,
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let lifetime = Lifetime::bound_to_owner();
    let profile = use_profile(&lifetime, on_profile_error);
    let actions = Signal::derive(move || {
        profile
            .get()
            .role()
            .map(landing_actions)
            .unwrap_or_default()
    });
    DashboardViewModel { profile, actions }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_gets_monitor_action() {
        let labels: Vec<_> = landing_actions(Role::Admin)
            .iter()
            .map(|a| a.action_label)
            .collect();
        assert_eq!(labels, vec!["Record Attendance", "Monitor Employees"]);
    }

    #[test]
    fn employee_only_records_attendance() {
        let paths: Vec<_> = landing_actions(Role::Employee)
            .iter()
            .map(|a| a.path)
            .collect();
        assert_eq!(paths, vec!["/main/attendance"]);
    }
}
