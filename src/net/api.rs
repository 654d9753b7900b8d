//! HTTP client for the chat backend.
//!
//! Client-side (hydrate): a real `POST /api/chat` via `gloo-net`.
//! Server-side (SSR): a stub returning an error, since the call is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport errors, non-success statuses, and malformed bodies all
//! collapse into one generic `Err(String)`; the view is the sole handler
//! and does not distinguish between them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ChatRequest;
use super::types::ChatResponse;

/// Backend base URL used when `CHAT_API_URL` is not set at build time.
const DEFAULT_BASE_URL: &str = "http://localhost:8082";

/// Backend base URL, read once from the build environment.
#[must_use]
pub fn api_base_url() -> &'static str {
    option_env!("CHAT_API_URL").unwrap_or(DEFAULT_BASE_URL)
}

#[cfg(any(test, feature = "hydrate"))]
fn chat_endpoint(base_url: &str) -> String {
    format!("{base_url}/api/chat")
}

#[cfg(any(test, feature = "hydrate"))]
fn chat_request_failed_message(status: u16) -> String {
    format!("chat request failed: {status}")
}

/// Send one user message to `POST {base}/api/chat` and return the parsed
/// reply. No retries, no caching, no local timeout.
///
/// # Errors
///
/// Returns an error string on any transport failure, non-success status,
/// or unparseable body — and always on the server, where no network call
/// is made.
pub async fn send_message(request: &ChatRequest) -> Result<ChatResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&chat_endpoint(api_base_url()))
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(chat_request_failed_message(resp.status()));
        }
        resp.json::<ChatResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}
