use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="text-center py-10">
            <p class="text-xl">{title}</p>
            {description.map(|desc| view! { <p class="mt-1 text-sm opacity-80">{desc}</p> })}
        </div>
    }
}
