use super::{
    utils::{status_filter_options, NO_MATCHING_RECORDS},
    view_model::use_employee_attendance_view_model,
};
use crate::{
    api::AttendanceRecord,
    components::{
        error::InlineErrorMessage,
        forms::{InputField, SelectField},
        layout::Layout,
    },
    config::{use_display_zone, DisplayZone},
    pages::monitor::utils::role_line,
    utils::time::{format_date_in, format_time_in},
};
use leptos::*;

/// Name and `position • department` of the employee, taken from the first record.
#[component]
pub fn HistoryHeader(#[prop(into)] records: Signal<Vec<AttendanceRecord>>) -> impl IntoView {
    move || {
        records.with(|list| {
            list.first().map(|first| {
                let subtitle = role_line(
                    first.user.position.as_deref(),
                    first.user.department.as_deref(),
                );
                view! {
                    <div class="text-center mb-6">
                        <h2 class="text-2xl font-semibold">{first.user.name.clone()}</h2>
                        <p class="text-lg">{subtitle}</p>
                    </div>
                }
            })
        })
    }
}

#[component]
pub fn HistoryTable(
    #[prop(into)] records: Signal<Vec<AttendanceRecord>>,
    #[prop(optional)] zone: Option<DisplayZone>,
) -> impl IntoView {
    let zone = match zone {
        Some(fixed) => Signal::derive(move || fixed),
        None => use_display_zone(),
    };

    view! {
        <Show
            when=move || !records.with(Vec::is_empty)
            fallback=|| view! { <p class="text-center text-xl">{NO_MATCHING_RECORDS}</p> }
        >
            <div class="overflow-x-auto bg-white rounded-lg shadow-lg p-4">
                <table class="w-full border-collapse">
                    <thead>
                        <tr class="bg-indigo-500 text-white">
                            <th class="p-3">"Photo"</th>
                            <th class="p-3">"Clock In"</th>
                            <th class="p-3">"Clock Out"</th>
                            <th class="p-3">"Date"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || records.get()
                            key=|record| record.id.clone()
                            children=move |record| {
                                let alt = format!("Photo of {}", record.user.name);
                                let clock_in = record.clock_in;
                                let clock_out = record.clock_out;
                                let clock_out = move || {
                                    clock_out
                                        .map(|ts| format_time_in(Some(ts), zone.get()))
                                        .unwrap_or_else(|| "—".to_string())
                                };
                                view! {
                                    <tr class="text-black bg-gray-100 border-b hover:bg-gray-200 transition">
                                        <td class="p-3 text-center">
                                            <div class="flex justify-center">
                                                <img
                                                    src=record.photo_url.clone().unwrap_or_default()
                                                    alt=alt
                                                    class="w-40 h-40 object-cover border-2 border-indigo-400"
                                                />
                                            </div>
                                        </td>
                                        <td class="p-3 text-center">{move || format_time_in(Some(clock_in), zone.get())}</td>
                                        <td class="p-3 text-center">{clock_out}</td>
                                        <td class="p-3 text-center">{move || format_date_in(clock_in, zone.get())}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

#[component]
pub fn EmployeeAttendancePanel(id: Option<String>) -> impl IntoView {
    let vm = use_employee_attendance_view_model(id);
    let loading = vm.loading();
    let error = vm.error();
    let records = vm.records();
    let visible = vm.visible();
    let (start, end, status) = (vm.start, vm.end, vm.status);

    let body = move || {
        if loading.get() {
            return view! {
                <p class="text-center text-white text-xl mt-10">"Loading attendance records..."</p>
            }
            .into_view();
        }
        if let Some(message) = error.get() {
            return view! { <InlineErrorMessage message=message/> }.into_view();
        }
        view! {
            <Layout>
                <div class="w-full max-w-4xl p-6">
                    <h1 class="text-3xl font-bold mb-6 text-center">"Attendance Records"</h1>
                    <HistoryHeader records=records/>
                    <div class="flex flex-wrap gap-4 mb-6 justify-center text-black">
                        <InputField
                            label="Start Date"
                            name="date_start"
                            input_type="date"
                            value=start
                            on_input=Callback::new(move |v| start.set(v))
                        />
                        <InputField
                            label="End Date"
                            name="date_end"
                            input_type="date"
                            value=end
                            on_input=Callback::new(move |v| end.set(v))
                        />
                        <SelectField
                            label="Attendance Status"
                            name="status_filter"
                            options=status_filter_options()
                            value=status
                            on_change=Callback::new(move |v| status.set(v))
                        />
                    </div>
                    <HistoryTable records=visible/>
                </div>
            </Layout>
        }
        .into_view()
    };

    view! { <div>{body}</div> }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::record, ssr::render_to_string};

    #[test]
    fn table_renders_dash_for_open_records() {
        let html = render_to_string(|| {
            let rows = vec![
                record("1", "2024-03-01T08:00:00Z", Some("2024-03-01T17:00:00Z")),
                record("2", "2024-03-02T09:30:00Z", None),
            ];
            view! {
                <HistoryTable
                    records=Signal::derive(move || rows.clone())
                    zone=DisplayZone::Named(chrono_tz::UTC)
                />
            }
        });
        assert!(html.contains("08:00:00"));
        assert!(html.contains("17:00:00"));
        assert!(html.contains("02&#x2F;03&#x2F;2024"));
        assert!(html.contains("—"));
        assert!(html.contains("Photo of Ana Putri"));
    }

    #[test]
    fn table_follows_display_zone_from_context() {
        let html = render_to_string(|| {
            provide_context(create_rw_signal(DisplayZone::Named(chrono_tz::Asia::Jakarta)));
            let rows = vec![record("1", "2024-03-01T08:00:00Z", None)];
            view! { <HistoryTable records=Signal::derive(move || rows.clone())/> }
        });
        assert!(html.contains("15:00:00"));
    }

    #[test]
    fn empty_table_shows_no_records_message() {
        let html = render_to_string(|| {
            view! { <HistoryTable records=Signal::derive(Vec::new)/> }
        });
        assert!(html.contains(NO_MATCHING_RECORDS));
    }

    #[test]
    fn header_uses_first_record_with_placeholders() {
        let html = render_to_string(|| {
            let rows = vec![record("1", "2024-03-01T08:00:00Z", None)];
            view! { <HistoryHeader records=Signal::derive(move || rows.clone())/> }
        });
        assert!(html.contains("Ana Putri"));
        assert!(html.contains("No Position • Engineering"));
    }
}
