use leptos::*;

use crate::utils::navigation::use_query_id;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::{EmployeeDetailPanel, EmployeeForm};

#[component]
pub fn EmployeeDetailPage() -> impl IntoView {
    view! { <EmployeeDetailPanel id=use_query_id() /> }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::provide_offline_session, ssr::render_to_string};

    #[test]
    fn detail_panel_starts_loading() {
        let html = render_to_string(move || {
            provide_offline_session(Some("tok"));
            view! { <EmployeeDetailPanel id=Some("7".to_string())/> }
        });
        assert!(html.contains("Loading employee details..."));
    }
}
