use leptos::*;

use crate::state::notifications::{use_toasts, ToastKind};

fn toast_classes(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "bg-green-600 text-white",
        ToastKind::Error => "bg-red-600 text-white",
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    let entries = toasts.entries();
    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2" role="status" aria-live="polite">
            <For
                each=move || entries.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!(
                            "flex items-start gap-3 rounded-lg px-4 py-3 shadow-lg {}",
                            toast_classes(toast.kind),
                        )>
                            <span class="flex-1">{toast.message}</span>
                            <button
                                class="opacity-75 hover:opacity-100"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
