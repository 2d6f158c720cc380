use super::{
    components::{
        actions::TrackerActions,
        clock::{use_ticking_now, LiveClock},
        status_table::StatusTable,
    },
    view_model::use_tracker_view_model,
};
use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn AttendancePanel() -> impl IntoView {
    let vm = use_tracker_view_model();
    let now = use_ticking_now();
    let state = vm.state;

    view! {
        <Layout>
            <div class="flex flex-col items-center w-full">
                <h2 class="text-3xl font-bold mb-4">"Attendance Tracker"</h2>
                <LiveClock now=now/>
                <TrackerActions
                    state=state
                    camera=vm.camera
                    photo=vm.photo
                    video_ref=vm.video_ref
                    on_open_camera=Callback::new(move |_| vm.open_camera())
                    on_capture=Callback::new(move |_| vm.capture())
                    on_clock_in=Callback::new(move |_| vm.clock_in())
                    on_clock_out=Callback::new(move |_| vm.clock_out())
                />
                <StatusTable state=state today=now/>
            </div>
        </Layout>
    }
}
