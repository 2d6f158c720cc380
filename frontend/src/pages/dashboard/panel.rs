use crate::{
    components::layout::{Layout, LoadingSpinner},
    pages::dashboard::view_model::use_dashboard_view_model,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let loading = move || vm.profile.get().loading;

    view! {
        <Layout>
            <div class="flex flex-col items-center justify-center mt-16">
                <h2 class="text-2xl font-semibold mb-6">"Welcome"</h2>
                <Show when=move || !loading() fallback=|| view! { <LoadingSpinner/> }>
                    <div class="flex flex-col gap-4">
                        {move || {
                            vm.actions
                                .get()
                                .into_iter()
                                .map(|action| {
                                    view! {
                                        <a
                                            href=action.path
                                            class="bg-white text-indigo-600 px-6 py-3 rounded-lg font-semibold text-center shadow-md hover:bg-gray-200 transition"
                                        >
                                            {action.action_label}
                                        </a>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </div>
        </Layout>
    }
}
