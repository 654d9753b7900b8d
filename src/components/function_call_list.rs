//! Expandable list of backend function calls attached to a reply.
//!
//! Each entry shows the function name; clicking the header toggles a
//! detail panel with the pretty-printed request and response payloads.
//! Expansion state is keyed by `(message_index, function_index)` in the
//! shared chat state, so panels survive re-renders of the list.

#[cfg(test)]
#[path = "function_call_list_test.rs"]
mod function_call_list_test;

use leptos::prelude::*;

use crate::net::types::FunctionCall;
use crate::state::chat::ChatState;

/// Glyph for an expandable header in its open/closed state.
fn expand_icon(expanded: bool) -> &'static str {
    if expanded { "\u{25bc}" } else { "\u{25b6}" }
}

/// Pretty-print an opaque payload for the detail panel.
fn format_payload(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Expandable function-call panels for one assistant message.
#[component]
pub fn FunctionCallList(message_index: usize, functions: Vec<FunctionCall>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    view! {
        <div class="function-calls">
            <strong class="function-calls__title">"Functions called:"</strong>
            {functions
                .into_iter()
                .enumerate()
                .map(|(function_index, call)| {
                    let request = format_payload(&call.request);
                    let response = format_payload(&call.response);
                    let expanded = move || chat.get().is_function_expanded(message_index, function_index);
                    let on_toggle = move |_| {
                        chat.update(|c| c.toggle_function(message_index, function_index));
                    };

                    view! {
                        <div class="function-calls__item">
                            <div class="function-calls__header" on:click=on_toggle>
                                <span class="function-calls__icon">
                                    {move || expand_icon(expanded())}
                                </span>
                                <span class="function-calls__name">{call.function_name}</span>
                            </div>
                            {move || {
                                expanded()
                                    .then(|| {
                                        view! {
                                            <div class="function-calls__details">
                                                <div class="function-calls__section">
                                                    <div class="function-calls__label">"Request:"</div>
                                                    <pre class="function-calls__payload">{request.clone()}</pre>
                                                </div>
                                                <div class="function-calls__section">
                                                    <div class="function-calls__label">"Response:"</div>
                                                    <pre class="function-calls__payload">{response.clone()}</pre>
                                                </div>
                                            </div>
                                        }
                                    })
                            }}
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
