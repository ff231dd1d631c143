use chrono::DateTime;
use chrono_tz::Tz;
use leptos::*;

use crate::pages::dashboard::utils::{format_clock, format_long_date};

/// Wall clock; the dashboard ticks `now` every second.
#[component]
pub fn Clock(now: Signal<DateTime<Tz>>) -> impl IntoView {
    let date_str = move || format_long_date(now.get().date_naive());
    let time_str = move || format_clock(&now.get());

    view! {
        <div class="bg-gradient-to-br from-action-primary-bg to-action-primary-bg-hover text-text-inverse border-none shadow-lg rounded-lg overflow-hidden">
            <div class="flex flex-col items-center justify-center py-4 space-y-2">
                <div class="text-lg font-medium opacity-90 capitalize">{date_str}</div>
                <div class="text-4xl font-bold tracking-wider font-mono">{time_str}</div>
            </div>
        </div>
    }
}
