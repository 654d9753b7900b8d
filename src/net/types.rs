//! Wire DTOs for the chat backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON schema (camelCase field names) so
//! serde round-trips stay lossless. Function-call payloads are kept as raw
//! `serde_json::Value` — the client displays them but never interprets them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// The user's message text, sent exactly as typed.
    pub message: String,
    /// Per-conversation correlation token, stable for the view lifetime.
    pub session_id: String,
}

/// Successful reply body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    /// Assistant reply text.
    pub response: String,
    /// Echo of the session identifier.
    pub session_id: String,
    /// Backend function calls made while producing the reply; absent on
    /// the wire means none.
    #[serde(default)]
    pub functions_called: Vec<FunctionCall>,
}

/// One backend-reported auxiliary action, opaque to the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionCall {
    pub function_name: String,
    /// Arguments the backend passed to the function.
    pub request: serde_json::Value,
    /// Whatever the function returned.
    pub response: serde_json::Value,
}
