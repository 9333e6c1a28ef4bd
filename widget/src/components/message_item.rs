//! A single rendered chat message.

use leptos::prelude::*;
use saanvi::{MessageView, Sender};

use crate::components::feedback_actions::FeedbackActions;

pub const BOT_AVATAR_SVG: &str = r#"<svg viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg" fill="currentColor"><path d="M12 12c2.21 0 4-1.79 4-4s-1.79-4-4-4-4 1.79-4 4 1.79 4 4 4zm0 2c-2.67 0-8 1.34-8 4v2h16v-2c0-2.66-5.33-4-8-4z"/></svg>"#;

/// Avatar, bubble, and timestamp; bot messages also get feedback controls.
///
/// Message text is rendered as a text node, never as HTML.
#[component]
pub fn MessageItem(entry: MessageView) -> impl IntoView {
    let MessageView { id, message, feedback } = entry;
    let sender = message.sender;

    let avatar = match sender {
        Sender::User => view! { <div class="message-avatar">"U"</div> }.into_any(),
        Sender::Bot => view! { <div class="message-avatar" inner_html=BOT_AVATAR_SVG></div> }.into_any(),
    };

    view! {
        <div class=format!("message {}", sender.as_str())>
            {avatar}
            <div class="message-content">
                <div class="message-bubble">{message.text}</div>
                <div class="message-time">{message.time}</div>
                {feedback.map(|_| view! { <FeedbackActions entry_id=id/> })}
            </div>
        </div>
    }
}
