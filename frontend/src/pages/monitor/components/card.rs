use leptos::*;

use crate::{
    api::EmployeeSummary,
    pages::monitor::utils::{photo_or_default, role_line},
    utils::navigation::with_id,
};

pub const DETAILS_PATH: &str = "/main/monitor/details";

#[component]
pub fn EmployeeCard(employee: EmployeeSummary) -> impl IntoView {
    let href = with_id(DETAILS_PATH, &employee.id);
    let photo = photo_or_default(employee.profile_photo_url.as_deref());
    let alt = format!("{}'s photo", employee.name);
    let subtitle = role_line(Some(&employee.position), Some(&employee.department));

    view! {
        <a
            href=href
            class="block p-6 bg-white bg-opacity-20 rounded-xl shadow-lg backdrop-blur-md transform transition-all hover:scale-105 hover:bg-opacity-30 hover:shadow-2xl"
        >
            <div class="flex flex-col items-center">
                <img
                    src=photo
                    alt=alt
                    class="w-24 h-24 object-cover rounded-full border-4 border-white transition-transform hover:scale-110"
                />
                <h2 class="text-xl font-semibold mt-4">{employee.name}</h2>
                <p class="text-indigo-200">{subtitle}</p>
            </div>
        </a>
    }
}

#[component]
pub fn EmployeeGrid(#[prop(into)] employees: Signal<Vec<EmployeeSummary>>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
            <For
                each=move || employees.get()
                key=|employee| employee.id.clone()
                children=|employee| view! { <EmployeeCard employee=employee/> }
            />
        </div>
    }
}
