use leptos::*;

/// Failure text shown in place of a page body.
#[component]
pub fn InlineErrorMessage(#[prop(into)] message: MaybeSignal<String>) -> impl IntoView {
    view! {
        <p class="text-center text-red-400 text-xl mt-10">{move || message.get()}</p>
    }
}
