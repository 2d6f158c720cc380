use leptos::{html::Video, *};

use super::camera::CameraPanel;
use crate::{
    components::{
        common::{Button, ButtonVariant},
        layout::LoadingSpinner,
    },
    pages::attendance::utils::{TrackerAction, TrackerState, ALREADY_RECORDED},
    utils::camera::{CameraState, CapturedPhoto},
};

/// The single next step offered for today's attendance.
#[component]
pub fn TrackerActions(
    #[prop(into)] state: Signal<TrackerState>,
    #[prop(into)] camera: Signal<CameraState>,
    #[prop(into)] photo: Signal<Option<CapturedPhoto>>,
    video_ref: NodeRef<Video>,
    on_open_camera: Callback<()>,
    on_capture: Callback<()>,
    on_clock_in: Callback<()>,
    on_clock_out: Callback<()>,
) -> impl IntoView {
    let next = Signal::derive(move || state.with(TrackerState::next_action));

    view! {
        <div class="flex flex-col items-center gap-4 mt-4">
            {move || match next.get() {
                TrackerAction::Busy => view! { <LoadingSpinner/> }.into_view(),
                TrackerAction::ClockIn => {
                    view! {
                        <CameraPanel
                            camera=camera
                            photo=photo
                            video_ref=video_ref
                            on_open=on_open_camera
                            on_capture=on_capture
                        />
                        <Button variant=ButtonVariant::Success on:click=move |_| on_clock_in.call(())>
                            "Clock In"
                        </Button>
                    }
                        .into_view()
                }
                TrackerAction::ClockOut => {
                    view! {
                        <Button variant=ButtonVariant::Danger on:click=move |_| on_clock_out.call(())>
                            "Clock Out"
                        </Button>
                    }
                        .into_view()
                }
                TrackerAction::AlreadyRecorded => {
                    view! { <p class="text-lg font-semibold">{ALREADY_RECORDED}</p> }.into_view()
                }
            }}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::{api::AttendanceStatus, test_support::ssr::render_to_string};

    fn render(status: Option<AttendanceStatus>, loading: bool) -> String {
        render_to_string(move || {
            let state = TrackerState {
                status,
                loading,
                ..TrackerState::default()
            };
            let video_ref = create_node_ref::<Video>();
            view! {
                <TrackerActions
                    state=Signal::derive(move || state.clone())
                    camera=Signal::derive(|| CameraState::Idle)
                    photo=Signal::derive(|| None::<CapturedPhoto>)
                    video_ref=video_ref
                    on_open_camera=Callback::new(|_| {})
                    on_capture=Callback::new(|_| {})
                    on_clock_in=Callback::new(|_| {})
                    on_clock_out=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn clocked_in_offers_only_clock_out() {
        let html = render(Some(AttendanceStatus::ClockedIn), false);
        assert!(html.contains("Clock Out"));
        assert!(!html.contains("Clock In"));
        assert!(!html.contains("Open Camera"));
    }

    #[test]
    fn not_recorded_offers_camera_and_clock_in() {
        let html = render(Some(AttendanceStatus::NotRecorded), false);
        assert!(html.contains("Open Camera"));
        assert!(html.contains("Clock In"));
        assert!(!html.contains("Clock Out"));
    }

    #[test]
    fn clock_in_stays_clickable_without_photo() {
        let html = render(Some(AttendanceStatus::NotRecorded), false);
        let label = html.find("Clock In").expect("clock in label");
        let open = html[..label].rfind("<button").expect("clock in button");
        let tag_end = open + html[open..].find('>').expect("tag end");
        let tag = &html[open..=tag_end];
        assert!(tag.contains("bg-green-500"));
        assert!(!tag.contains("disabled=\"\""));
    }

    #[test]
    fn clocked_out_shows_notice() {
        let html = render(Some(AttendanceStatus::ClockedOut), false);
        assert!(html.contains("already recorded attendance today"));
    }

    #[test]
    fn loading_hides_buttons() {
        let html = render(Some(AttendanceStatus::NotRecorded), true);
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("Clock In"));
    }
}
