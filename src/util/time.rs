//! Clock access and timestamp display formatting.
//!
//! Browser builds read the clock and the local timezone from `Date`;
//! native/SSR builds fall back to the system clock and UTC so rendering
//! stays deterministic without a browser.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Current time in milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0.0, |d| d.as_millis() as f64)
    }
}

/// Render a message timestamp as 24-hour `HH:MM` for display.
#[must_use]
pub fn format_timestamp(ms: f64) -> String {
    let (hour, minute) = local_hour_minute(ms);
    format_hour_minute(hour, minute)
}

/// Hour and minute of the given epoch-milliseconds instant, in the
/// browser's local timezone (UTC on native builds).
#[must_use]
pub fn local_hour_minute(ms: f64) -> (u32, u32) {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ms));
        (date.get_hours(), date.get_minutes())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        utc_hour_minute(ms)
    }
}

#[cfg(any(test, not(feature = "hydrate")))]
fn utc_hour_minute(ms: f64) -> (u32, u32) {
    let day_seconds = (ms.max(0.0) as u64 / 1000) % 86_400;
    let hour = u32::try_from(day_seconds / 3600).unwrap_or(0);
    let minute = u32::try_from(day_seconds % 3600 / 60).unwrap_or(0);
    (hour, minute)
}

/// Zero-padded 24-hour `HH:MM`.
#[must_use]
pub fn format_hour_minute(hour: u32, minute: u32) -> String {
    format!("{hour:02}:{minute:02}")
}
