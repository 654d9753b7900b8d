//! A single conversation message: avatar, content, time, function calls.

#[cfg(test)]
#[path = "message_item_test.rs"]
mod message_item_test;

use leptos::prelude::*;

use crate::components::function_call_list::FunctionCallList;
use crate::state::chat::{Message, Role};
use crate::util::time::format_timestamp;

/// Avatar badge text for a message author.
fn avatar_label(role: Role) -> &'static str {
    match role {
        Role::User => "YOU",
        Role::Assistant => "AI",
    }
}

/// One message row. `index` is the message's position in the conversation,
/// used to key its function-call expansion state.
#[component]
pub fn MessageItem(index: usize, message: Message) -> impl IntoView {
    let is_assistant = message.role == Role::Assistant;
    let is_user = !is_assistant;
    let label = avatar_label(message.role);
    let time = format_timestamp(message.timestamp);
    let functions = message.functions_called;

    view! {
        <div
            class="message"
            class:message--assistant=is_assistant
            class:message--user=is_user
        >
            {is_assistant.then(|| view! { <div class="message__avatar">{label}</div> })}

            <div class="message__content">
                <div class="message__text">{message.content}</div>
                <div class="message__time">{time}</div>
                {(!functions.is_empty())
                    .then(|| view! { <FunctionCallList message_index=index functions=functions/> })}
            </div>

            {is_user.then(|| view! { <div class="message__avatar">{label}</div> })}
        </div>
    }
}
