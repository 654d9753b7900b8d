//! Conversation view state — message history, in-flight flag, error
//! banner, and the set of expanded function-call panels.
//!
//! DESIGN
//! ======
//! All state mutations happen through event-named methods (`begin_submit`,
//! `apply_reply`, `apply_failure`, `toggle_function`) so the submit cycle
//! can be exercised directly in unit tests. The message list is
//! append-only; entries are never edited or removed within a session.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::collections::HashSet;

use crate::net::types::{ChatResponse, FunctionCall};

/// Banner text shown when a send fails, regardless of the failure kind.
pub const SEND_FAILED_NOTICE: &str = "Message could not be delivered. Please try again.";

/// Fixed assistant reply appended when a send fails, so the conversation
/// always gets an answer.
pub const APOLOGY_REPLY: &str = "Sorry, something went wrong. Please try again.";

/// Author of a conversation message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// A single conversation entry, immutable once appended.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp: f64,
    /// Backend function calls reported with an assistant reply. Always
    /// empty for user messages.
    pub functions_called: Vec<FunctionCall>,
}

/// State for the chat view.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// Conversation history in display order (append-only).
    pub messages: Vec<Message>,
    /// True while a request is in flight; gates new submissions.
    pub loading: bool,
    /// Delivery-failure notice for the banner, cleared on the next submit.
    pub error: Option<String>,
    /// `(message_index, function_index)` keys of open detail panels.
    pub expanded_functions: HashSet<(usize, usize)>,
}

impl ChatState {
    /// Whether a submission with this input would be accepted. False while
    /// a request is in flight or when the trimmed input is empty; callers
    /// silently drop the submission in that case rather than queueing it.
    #[must_use]
    pub fn can_submit(&self, input: &str) -> bool {
        !self.loading && !input.trim().is_empty()
    }

    /// Start a request cycle: append the user message with the raw input,
    /// mark a request in flight, and clear any previous error.
    pub fn begin_submit(&mut self, content: String, timestamp: f64) {
        self.messages.push(Message {
            role: Role::User,
            content,
            timestamp,
            functions_called: Vec::new(),
        });
        self.loading = true;
        self.error = None;
    }

    /// Apply a successful backend reply: append one assistant message
    /// carrying the reply text and its function-call records.
    pub fn apply_reply(&mut self, reply: ChatResponse, timestamp: f64) {
        self.messages.push(Message {
            role: Role::Assistant,
            content: reply.response,
            timestamp,
            functions_called: reply.functions_called,
        });
        self.loading = false;
    }

    /// Apply a failed send: raise the error banner and append the fixed
    /// apology reply so the user message still gets an answer.
    pub fn apply_failure(&mut self, timestamp: f64) {
        self.error = Some(SEND_FAILED_NOTICE.to_owned());
        self.messages.push(Message {
            role: Role::Assistant,
            content: APOLOGY_REPLY.to_owned(),
            timestamp,
            functions_called: Vec::new(),
        });
        self.loading = false;
    }

    /// Flip the open/closed state of one function-call detail panel.
    pub fn toggle_function(&mut self, message_index: usize, function_index: usize) {
        let key = (message_index, function_index);
        if !self.expanded_functions.remove(&key) {
            self.expanded_functions.insert(key);
        }
    }

    /// Whether one function-call detail panel is currently open.
    #[must_use]
    pub fn is_function_expanded(&self, message_index: usize, function_index: usize) -> bool {
        self.expanded_functions
            .contains(&(message_index, function_index))
    }
}
