use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::MonitorPanel;

#[component]
pub fn MonitorPage() -> impl IntoView {
    view! { <MonitorPanel /> }
}
