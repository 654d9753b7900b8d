//! Per-view session identifier.
//!
//! The token is generated once when the chat panel mounts, shown in the
//! header, and sent with every request so the backend can correlate the
//! conversation. It is never validated or renewed locally.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::time::now_ms;

/// Length of the random suffix appended to the session identifier.
const SUFFIX_LEN: usize = 9;

/// Generate a fresh session identifier from the current time and a random
/// suffix, e.g. `session-1755900000000-3f9c2a17b`.
#[must_use]
pub fn generate() -> String {
    let suffix: String = uuid::Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(SUFFIX_LEN)
        .collect();
    format_session_id(now_ms(), &suffix)
}

/// Pure formatting step, split out for testability.
fn format_session_id(created_ms: f64, suffix: &str) -> String {
    format!("session-{}-{suffix}", created_ms as u64)
}
