use leptos::*;

/// Centered white card used by the login and register pages.
#[component]
pub fn FormContainer(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-md text-black">
            <h2 class="text-2xl font-bold text-center mb-6">{title}</h2>
            {children()}
        </div>
    }
}

#[component]
pub fn InputField(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    view! {
        <div class="mb-4">
            <label for=name.clone() class="block font-medium mb-1">{label}</label>
            <input
                id=name.clone()
                name=name
                type=input_type
                placeholder=placeholder
                class="border p-2 w-full rounded"
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </div>
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    options: Vec<SelectOption>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="mb-4">
            <label for=name.clone() class="block font-medium mb-1">{label}</label>
            <select
                id=name.clone()
                name=name
                class="border p-2 w-full rounded"
                prop:value=move || value.get()
                on:change=move |ev| on_change.call(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|opt| {
                        let selected_value = opt.value.clone();
                        view! {
                            <option
                                value=opt.value
                                selected=move || value.get() == selected_value
                            >
                                {opt.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
