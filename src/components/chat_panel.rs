//! Customer-support chat panel: conversation history and message input.
//!
//! Owns the single request/response cycle per submission. A submission
//! while a request is in flight, or with only whitespace, is silently
//! dropped — the loading flag plus the disabled input are the only
//! in-flight guard.

use leptos::prelude::*;

use crate::components::message_item::MessageItem;
#[cfg(feature = "hydrate")]
use crate::net::types::ChatRequest;
use crate::state::chat::ChatState;
use crate::state::session;
use crate::util::time::now_ms;

/// Placeholder line shown before the first message.
const GREETING: &str = "Hello! How can I help you today?";

/// Chat panel showing the conversation and an input for new messages.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    // One session token per view lifetime, shown in the header and sent
    // with every request.
    let session_id = StoredValue::new(session::generate());

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message visible whenever the list grows.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        if !chat.get_untracked().can_submit(&text) {
            return;
        }

        chat.update(|c| c.begin_submit(text.clone(), now_ms()));
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let request = ChatRequest {
                message: text,
                session_id: session_id.get_value(),
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::send_message(&request).await {
                    Ok(reply) => chat.update(|c| c.apply_reply(reply, now_ms())),
                    Err(e) => {
                        log::error!("chat send failed: {e}");
                        chat.update(|c| c.apply_failure(now_ms()));
                    }
                }
            });
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    let send_disabled = move || {
        let state = chat.get();
        state.loading || input.get().trim().is_empty()
    };

    view! {
        <div class="chat">
            <header class="chat__header">
                <h1>"Customer Support"</h1>
                <div class="chat__session">"Session: " {session_id.get_value()}</div>
            </header>

            {move || {
                chat.get()
                    .error
                    .map(|notice| view! { <div class="chat__error">{notice}</div> })
            }}

            <div class="chat__messages" node_ref=messages_ref>
                {move || {
                    let messages = chat.get().messages;
                    if messages.is_empty() {
                        return view! {
                            <div class="chat__greeting">{GREETING}</div>
                        }
                            .into_any();
                    }

                    messages
                        .into_iter()
                        .enumerate()
                        .map(|(index, message)| {
                            view! { <MessageItem index=index message=message/> }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
                {move || {
                    chat.get().loading.then(|| {
                        view! {
                            <div class="message message--assistant">
                                <div class="message__avatar">"AI"</div>
                                <div class="chat__typing">
                                    <span class="chat__typing-dot"></span>
                                    <span class="chat__typing-dot"></span>
                                    <span class="chat__typing-dot"></span>
                                    <span>"Typing..."</span>
                                </div>
                            </div>
                        }
                    })
                }}
            </div>

            <form class="chat__input-row" on:submit=on_submit>
                <input
                    class="chat__input"
                    type="text"
                    placeholder="Type your message..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    disabled=move || chat.get().loading
                />
                <button type="submit" class="btn btn--primary chat__send" disabled=send_disabled>
                    "Send"
                </button>
            </form>
        </div>
    }
}
