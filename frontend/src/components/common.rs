use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Success,
    Danger,
    Neutral,
    Outline,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-blue-600 hover:bg-blue-700 text-white shadow-md",
            ButtonVariant::Success => "bg-green-500 hover:bg-green-600 text-white shadow-md",
            ButtonVariant::Danger => "bg-red-500 hover:bg-red-600 text-white shadow-md",
            ButtonVariant::Neutral => "bg-gray-500 hover:bg-gray-600 text-white shadow-md",
            ButtonVariant::Outline => {
                "border border-white text-white hover:bg-white hover:text-indigo-600"
            }
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                format!(
                    "inline-flex items-center justify-center rounded px-6 py-3 font-semibold transition disabled:opacity-50 disabled:cursor-not-allowed {} {}",
                    variant.classes(),
                    class
                )
            }
            disabled=move || disabled.get() || loading.get()
            {..attributes}
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_distinct_colours() {
        assert!(ButtonVariant::Primary.classes().contains("bg-blue-600"));
        assert!(ButtonVariant::Success.classes().contains("bg-green-500"));
        assert!(ButtonVariant::Danger.classes().contains("bg-red-500"));
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }
}
