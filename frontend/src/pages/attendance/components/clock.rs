use chrono::{DateTime, Utc};
use leptos::*;

use crate::{
    config::use_display_zone,
    utils::time::{format_date_in, format_time_in},
};

/// Current instant, refreshed every second while the owner is mounted.
pub fn use_ticking_now() -> ReadSignal<DateTime<Utc>> {
    let (now, set_now) = create_signal(Utc::now());
    start_ticker(set_now);
    now
}

#[cfg(target_arch = "wasm32")]
fn start_ticker(set_now: WriteSignal<DateTime<Utc>>) {
    // Dropped with the owner, which cancels the interval.
    let _interval = store_value(gloo_timers::callback::Interval::new(1_000, move || {
        set_now.set(Utc::now())
    }));
}

#[cfg(not(target_arch = "wasm32"))]
fn start_ticker(_set_now: WriteSignal<DateTime<Utc>>) {}

#[component]
pub fn LiveClock(#[prop(into)] now: Signal<DateTime<Utc>>) -> impl IntoView {
    let zone = use_display_zone();

    view! {
        <div class="text-center mb-6">
            <p class="text-5xl font-bold tracking-wider">{move || format_time_in(Some(now.get()), zone.get())}</p>
            <p class="text-lg mt-2">{move || format_date_in(now.get(), zone.get())}</p>
        </div>
    }
}
