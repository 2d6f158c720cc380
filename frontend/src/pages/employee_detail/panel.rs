use super::{
    utils::{
        status_options, DetailState, EmployeeField, ATTENDANCE_PATH, DEFAULT_DETAIL_PHOTO,
        LOAD_FAILED,
    },
    view_model::use_employee_detail_view_model,
};
use crate::{
    components::{
        common::Button,
        error::InlineErrorMessage,
        forms::{InputField, SelectField},
        layout::Layout,
    },
    utils::{navigation::with_id, time::date_input_value},
};
use leptos::*;

const TEXT_FIELDS: [EmployeeField; 2] = [EmployeeField::Position, EmployeeField::Department];
const CONTACT_FIELDS: [EmployeeField; 2] = [EmployeeField::Address, EmployeeField::Phone];

fn text_input(
    state: Signal<DetailState>,
    field: EmployeeField,
    on_edit: Callback<(EmployeeField, String)>,
) -> impl IntoView {
    view! {
        <InputField
            label=field.label()
            name=field.name()
            value=Signal::derive(move || state.with(|s| s.field(field)))
            on_input=Callback::new(move |value| on_edit.call((field, value)))
        />
    }
}

/// Editable fields plus the Save and View Attendance actions.
#[component]
pub fn EmployeeForm(
    #[prop(into)] state: Signal<DetailState>,
    on_edit: Callback<(EmployeeField, String)>,
    on_save: Callback<()>,
    #[prop(optional, into)] saving: MaybeSignal<bool>,
) -> impl IntoView {
    let has_changes = move || state.with(DetailState::has_changes);
    let attendance_href = move || {
        state.with(|s| {
            s.edited
                .as_ref()
                .map(|employee| with_id(ATTENDANCE_PATH, &employee.id))
                .unwrap_or_else(|| ATTENDANCE_PATH.to_string())
        })
    };
    let joined_at = Signal::derive(move || {
        state.with(|s| date_input_value(&s.field(EmployeeField::JoinedAt)))
    });
    let status = Signal::derive(move || state.with(|s| s.field(EmployeeField::Status)));

    view! {
        <div class="grid grid-cols-2 gap-4 mt-6">
            {TEXT_FIELDS.into_iter().map(|field| text_input(state, field, on_edit)).collect_view()}
            <InputField
                label=EmployeeField::JoinedAt.label()
                name=EmployeeField::JoinedAt.name()
                input_type="date"
                value=joined_at
                on_input=Callback::new(move |value| on_edit.call((EmployeeField::JoinedAt, value)))
            />
            <SelectField
                label=EmployeeField::Status.label()
                name=EmployeeField::Status.name()
                options=status_options()
                value=status
                on_change=Callback::new(move |value| on_edit.call((EmployeeField::Status, value)))
            />
            {CONTACT_FIELDS.into_iter().map(|field| text_input(state, field, on_edit)).collect_view()}
        </div>
        <div class="mt-6 flex gap-4">
            <Show when=has_changes>
                <Button loading=saving on:click=move |_| on_save.call(())>
                    "Save Changes"
                </Button>
            </Show>
            <a
                href=attendance_href
                class="px-4 py-2 bg-green-600 text-white rounded-lg hover:bg-green-700"
            >
                "View Attendance"
            </a>
        </div>
    }
}

#[component]
pub fn EmployeeDetailPanel(id: Option<String>) -> impl IntoView {
    let vm = use_employee_detail_view_model(id);
    let state = vm.state;
    let load = vm.load_resource;

    let header = move || {
        state.with(|s| {
            s.pristine.as_ref().map(|employee| {
                let photo = employee
                    .profile_photo_url
                    .clone()
                    .filter(|url| !url.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_DETAIL_PHOTO.to_string());
                view! {
                    <div class="flex items-center gap-4">
                        <img src=photo alt=employee.name.clone() class="w-24 h-24 rounded-full"/>
                        <div>
                            <h1 class="text-2xl font-bold">{employee.name.clone()}</h1>
                            <p class="text-gray-600">{employee.email.clone()}</p>
                        </div>
                    </div>
                }
            })
        })
    };

    let body = move || match load.get() {
        None => view! { <p>"Loading employee details..."</p> }.into_view(),
        Some(Some(Err(err))) => {
            let message = if err.code == "VALIDATION_ERROR" {
                err.error
            } else {
                LOAD_FAILED.to_string()
            };
            view! { <InlineErrorMessage message=message/> }.into_view()
        }
        Some(_) => view! {
            <Layout>
                <div class="w-full max-w-3xl mx-auto bg-white text-black rounded-lg shadow-lg p-6 mt-8">
                    {header}
                    <EmployeeForm
                        state=state
                        on_edit=Callback::new(move |(field, value)| vm.edit(field, value))
                        on_save=Callback::new(move |_| vm.save())
                        saving=vm.save_action.pending()
                    />
                </div>
            </Layout>
        }
        .into_view(),
    };

    view! { <div>{body}</div> }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::detail, ssr::render_to_string};

    fn render(edit: Option<(EmployeeField, &'static str)>) -> String {
        render_to_string(move || {
            let mut state = DetailState::default();
            state.load(detail("7"));
            if let Some((field, value)) = edit {
                state.edit(field, value.to_string());
            }
            view! {
                <EmployeeForm
                    state=Signal::derive(move || state.clone())
                    on_edit=Callback::new(|_| {})
                    on_save=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn save_hidden_while_pristine() {
        let html = render(None);
        assert!(!html.contains("Save Changes"));
        assert!(html.contains("View Attendance"));
        assert!(html.contains("/main/monitor/details/attendance?id=7"));
        assert!(html.contains("name=\"joined_at\""));
        assert!(html.contains("value=\"inactive\""));
    }

    #[test]
    fn save_visible_once_dirty() {
        let html = render(Some((EmployeeField::Phone, "0899")));
        assert!(html.contains("Save Changes"));
    }
}
