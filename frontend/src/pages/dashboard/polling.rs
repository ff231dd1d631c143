//! Page timers. They only exist in the browser; on the host these are no-ops
//! so server-side rendering never reaches into JS.

pub const REFRESH_INTERVAL_MS: u32 = 5_000;
pub const CLOCK_INTERVAL_MS: u32 = 1_000;
pub const DAY_CHECK_INTERVAL_MS: u32 = 60_000;
pub const STATUS_DISMISS_MS: u32 = 5_000;

/// Calls `tick` every `millis` until the owning page is unmounted.
#[cfg(target_arch = "wasm32")]
pub fn every(millis: u32, tick: impl FnMut() + 'static) {
    let interval = gloo_timers::callback::Interval::new(millis, tick);
    leptos::on_cleanup(move || drop(interval));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn every(_millis: u32, _tick: impl FnMut() + 'static) {}

/// Calls `f` once after `millis`.
#[cfg(target_arch = "wasm32")]
pub fn after(millis: u32, f: impl FnOnce() + 'static) {
    gloo_timers::callback::Timeout::new(millis, f).forget();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn after(_millis: u32, _f: impl FnOnce() + 'static) {}
