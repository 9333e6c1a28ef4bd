//! Chat window: header controls, welcome banner, quick questions, message
//! list, typing indicator, and the input row.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every user action is forwarded to the shared controller. Actions that
//! start a reply hand the returned ticket to [`schedule_reply`], and a
//! reset-close cancels whatever is still pending.

#[cfg(test)]
#[path = "chat_window_test.rs"]
mod chat_window_test;

use leptos::prelude::*;
use saanvi::{ReplyTicket, WidgetController};

use crate::components::message_item::{BOT_AVATAR_SVG, MessageItem};
use crate::util::audio;
use crate::util::reply_timer::{ReplyTimers, schedule_reply};

/// Enter submits; Shift+Enter falls through to the default newline.
pub(crate) fn is_submit_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

/// Input focus follows only the open flag.
pub(crate) fn is_open_state(ctl: &WidgetController) -> bool {
    ctl.state().is_open
}

/// The viewport re-scrolls only when messages are added or the typing
/// indicator toggles.
pub(crate) fn scroll_state(ctl: &WidgetController) -> (usize, bool) {
    (ctl.state().message_count, ctl.is_typing())
}

fn display_if(visible: bool, shown: &'static str) -> &'static str {
    if visible { shown } else { "none" }
}

#[component]
pub fn ChatWindow() -> impl IntoView {
    let ctl = expect_context::<RwSignal<WidgetController>>();
    let timers = expect_context::<ReplyTimers>();

    let body_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Textarea>::new();

    let persona = ctl.with_untracked(|c| c.config().persona.clone());
    let quick_questions = ctl.with_untracked(|c| c.config().quick_questions.clone());

    let is_open = Memo::new(move |_| ctl.with(is_open_state));
    let scroll_trigger = Memo::new(move |_| ctl.with(scroll_state));

    // Memos only notify on change, so keystrokes and feedback clicks neither
    // steal focus nor re-scroll.
    Effect::new(move || {
        let is_open = is_open.get();

        #[cfg(feature = "csr")]
        {
            if is_open {
                if let Some(el) = input_ref.get_untracked() {
                    let _ = el.focus();
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (is_open, input_ref);
        }
    });

    Effect::new(move || {
        let _ = scroll_trigger.get();

        // Scroll on the next tick so the new message has been laid out.
        #[cfg(feature = "csr")]
        {
            gloo_timers::callback::Timeout::new(0, move || {
                if let Some(el) = body_ref.get_untracked() {
                    el.set_scroll_top(el.scroll_height());
                }
            })
            .forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = body_ref;
        }
    });

    let sound = ctl.with_untracked(|c| c.config().sound);

    // Only called from click/keydown handlers, so the audio context is
    // unlocked inside a user gesture before the reply tone needs it.
    let dispatch = move |ticket: Option<ReplyTicket>| {
        if let Some(ticket) = ticket {
            if sound {
                audio::prime();
            }
            schedule_reply(ctl, timers, ticket);
        }
    };

    let submit = move || dispatch(ctl.try_update(WidgetController::send_message).flatten());

    let on_close = move |_| {
        if ctl.try_update(WidgetController::close_chat).unwrap_or(false) {
            timers.cancel_all();
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            submit();
        }
    };

    let shows_welcome = move || ctl.with(WidgetController::shows_welcome);
    let can_send = move || ctl.with(|c| !c.input().trim().is_empty());

    let quick_buttons = quick_questions
        .into_iter()
        .enumerate()
        .map(|(index, question)| {
            let label = question.clone();
            view! {
                <button
                    type="button"
                    class="quick-question-btn"
                    data-question=question
                    on:click=move |_| dispatch(ctl.try_update(|c| c.send_quick_question(index)).flatten())
                >
                    {label}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div
            class="chat-window"
            class:active=move || ctl.with(|c| c.state().is_open)
            class:minimized=move || ctl.with(|c| c.state().is_minimized)
        >
            <div class="chat-header">
                <div class="chat-header__avatar" inner_html=BOT_AVATAR_SVG></div>
                <div class="chat-header__info">
                    <div class="chat-header__name">{persona.name.clone()}</div>
                    <div class="chat-header__title">{persona.title.clone()}</div>
                </div>
                <button
                    type="button"
                    class="chat-header__btn"
                    aria-label="Minimize chat"
                    on:click=move |_| ctl.update(WidgetController::toggle_minimize)
                >
                    "−"
                </button>
                <button type="button" class="chat-header__btn" aria-label="Close chat" on:click=on_close>
                    "×"
                </button>
            </div>

            <div class="chat-body" node_ref=body_ref>
                <div class="welcome-message" style:display=move || display_if(shows_welcome(), "block")>
                    <h3>{format!("Hi, I'm {}!", persona.name)}</h3>
                    <p>{format!("Your {}. Ask me anything about staying safe online.", persona.title)}</p>
                </div>

                <div class="quick-questions" style:display=move || display_if(shows_welcome(), "flex")>
                    {quick_buttons}
                </div>

                <div class="messages-container">
                    <For
                        each=move || ctl.with(|c| c.log().entries().to_vec())
                        key=|entry| entry.id.clone()
                        children=move |entry| view! { <MessageItem entry=entry/> }
                    />
                </div>

                <div class="typing-indicator" class:active=move || ctl.with(WidgetController::is_typing)>
                    <span></span>
                    <span></span>
                    <span></span>
                </div>
            </div>

            <div class="chat-input-row">
                <textarea
                    class="chat-input"
                    rows="1"
                    placeholder="Type your message..."
                    node_ref=input_ref
                    prop:value=move || ctl.with(|c| c.input().to_owned())
                    on:input=move |ev| ctl.update(|c| c.set_input(event_target_value(&ev)))
                    on:keydown=on_keydown
                ></textarea>
                <button
                    type="button"
                    class="send-btn"
                    aria-label="Send message"
                    on:click=move |_| submit()
                    disabled=move || !can_send()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
