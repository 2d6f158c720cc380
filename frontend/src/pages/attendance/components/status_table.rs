use chrono::{DateTime, Utc};
use leptos::*;

use crate::{
    config::{use_display_zone, DisplayZone},
    pages::attendance::utils::TrackerState,
    utils::time::{format_date_in, format_time_in},
};

#[component]
pub fn StatusTable(
    #[prop(into)] state: Signal<TrackerState>,
    #[prop(into)] today: Signal<DateTime<Utc>>,
    #[prop(optional)] zone: Option<DisplayZone>,
) -> impl IntoView {
    let zone = match zone {
        Some(fixed) => Signal::derive(move || fixed),
        None => use_display_zone(),
    };

    view! {
        <div class="w-full max-w-2xl mt-8 overflow-x-auto">
            <table class="w-full text-left bg-white text-gray-800 rounded-lg shadow-md">
                <thead class="bg-gray-100">
                    <tr>
                        <th class="px-4 py-2">"Date"</th>
                        <th class="px-4 py-2">"Clock In Time"</th>
                        <th class="px-4 py-2">"Clock Out Time"</th>
                        <th class="px-4 py-2">"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <tr class="border-t">
                        <td class="px-4 py-2">{move || format_date_in(today.get(), zone.get())}</td>
                        <td class="px-4 py-2">{move || format_time_in(state.get().clock_in, zone.get())}</td>
                        <td class="px-4 py-2">{move || format_time_in(state.get().clock_out, zone.get())}</td>
                        <td class="px-4 py-2 capitalize">{move || state.get().status_label()}</td>
                    </tr>
                </tbody>
            </table>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::{api::AttendanceStatus, test_support::ssr::render_to_string};
    use chrono::TimeZone;

    #[test]
    fn renders_times_in_configured_zone() {
        let html = render_to_string(|| {
            let at = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
            let state = TrackerState {
                status: Some(AttendanceStatus::ClockedIn),
                clock_in: Some(at),
                ..TrackerState::default()
            };
            view! {
                <StatusTable
                    state=Signal::derive(move || state.clone())
                    today=Signal::derive(move || at)
                    zone=DisplayZone::Named(chrono_tz::UTC)
                />
            }
        });
        assert!(html.contains("01&#x2F;01&#x2F;2024"));
        assert!(html.contains("09:00:00"));
        assert!(html.contains("clocked in"));
        assert!(html.contains("Clock Out Time"));
    }

    #[test]
    fn follows_display_zone_from_context() {
        let html = render_to_string(|| {
            provide_context(create_rw_signal(DisplayZone::Named(chrono_tz::Asia::Jakarta)));
            let at = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
            let state = TrackerState {
                status: Some(AttendanceStatus::ClockedIn),
                clock_in: Some(at),
                ..TrackerState::default()
            };
            view! {
                <StatusTable
                    state=Signal::derive(move || state.clone())
                    today=Signal::derive(move || at)
                />
            }
        });
        assert!(html.contains("16:00:00"));
    }
}
