//! UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat surface while reading/writing shared state
//! from Leptos context providers. `chat_panel` owns the submit cycle;
//! `message_item` and `function_call_list` are pure display pieces.

pub mod chat_panel;
pub mod function_call_list;
pub mod message_item;
