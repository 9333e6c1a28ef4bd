//! Floating launcher button with the unread badge.

use leptos::prelude::*;
use saanvi::WidgetController;

use crate::util::audio;

const CHAT_ICON_SVG: &str = r#"<svg viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg" fill="currentColor"><path d="M20 2H4c-1.1 0-2 .9-2 2v18l4-4h14c1.1 0 2-.9 2-2V4c0-1.1-.9-2-2-2z"/></svg>"#;

#[component]
pub fn Launcher() -> impl IntoView {
    let ctl = expect_context::<RwSignal<WidgetController>>();

    let sound = ctl.with_untracked(|c| c.config().sound);
    let on_open = move |_| {
        if sound {
            audio::prime();
        }
        ctl.update(WidgetController::open_chat);
    };

    let unread = move || ctl.with(|c| c.state().unread_count);
    let badge_display = move || if ctl.with(WidgetController::badge_visible) { "flex" } else { "none" };

    view! {
        <button
            class="chat-button"
            type="button"
            aria-label="Open chat"
            class:hidden=move || !ctl.with(WidgetController::launcher_visible)
            on:click=on_open
        >
            <span class="chat-button__icon" inner_html=CHAT_ICON_SVG></span>
            <span class="notification-badge" style:display=badge_display>
                {unread}
            </span>
        </button>
    }
}
