use super::{
    components::card::EmployeeGrid,
    utils::LIST_FETCH_FALLBACK,
    view_model::use_monitor_view_model,
};
use crate::components::{empty_state::EmptyState, layout::Layout};
use leptos::*;

#[component]
pub fn MonitorPanel() -> impl IntoView {
    let vm = use_monitor_view_model();
    let loading = vm.loading();
    let error = vm.error();
    let visible = vm.visible();
    let query = vm.query;

    let body = move || {
        if loading.get() {
            return view! {
                <div class="flex items-center justify-center h-screen bg-gradient-to-r from-purple-500 to-indigo-600">
                    <p class="text-lg text-white animate-pulse">"Loading employees..."</p>
                </div>
            }
            .into_view();
        }
        if let Some(err) = error.get() {
            let message = if err.error.trim().is_empty() {
                LIST_FETCH_FALLBACK.to_string()
            } else {
                err.error
            };
            return view! {
                <div class="flex items-center justify-center h-screen bg-gradient-to-r from-purple-500 to-indigo-600">
                    <p class="text-red-200 text-lg">{message}</p>
                </div>
            }
            .into_view();
        }
        view! {
            <Layout>
                <div class="w-full p-6">
                    <h1 class="text-3xl font-bold mb-6 text-center">"Employee Monitoring"</h1>
                    <div class="flex justify-center mb-6">
                        <input
                            type="text"
                            class="w-full max-w-md p-3 text-gray-800 rounded-lg shadow-md"
                            placeholder="Search by name, position, or department..."
                            prop:value=move || query.get()
                            on:input=move |ev| query.set(event_target_value(&ev))
                        />
                    </div>
                    <Show
                        when=move || !visible.with(Vec::is_empty)
                        fallback=|| view! { <EmptyState title="No employees match your search."/> }
                    >
                        <EmployeeGrid employees=visible/>
                    </Show>
                </div>
            </Layout>
        }
        .into_view()
    };

    view! { <div>{body}</div> }
}
