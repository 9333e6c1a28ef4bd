//! Like/dislike pair attached to a bot message.

use leptos::prelude::*;
use saanvi::{Feedback, WidgetController};

#[component]
pub fn FeedbackActions(entry_id: String) -> impl IntoView {
    let ctl = expect_context::<RwSignal<WidgetController>>();

    let toggle = {
        let id = entry_id.clone();
        Signal::derive(move || {
            ctl.with(|c| c.log().entries().iter().find(|e| e.id == id).and_then(|e| e.feedback).unwrap_or_default())
        })
    };

    let choose = move |feedback: Feedback| {
        let id = entry_id.clone();
        move |_: leptos::ev::MouseEvent| {
            ctl.update(|c| {
                c.set_feedback(&id, feedback);
            });
        }
    };

    let display = |visible: bool| if visible { "inline-block" } else { "none" };

    view! {
        <div class="feedback-actions">
            <button
                type="button"
                class="feedback-btn"
                aria-label="Helpful"
                style:display=move || display(toggle.get().like_visible())
                on:click=choose(Feedback::Like)
            >
                "👍"
            </button>
            <button
                type="button"
                class="feedback-btn dislike"
                aria-label="Not helpful"
                style:display=move || display(toggle.get().dislike_visible())
                on:click=choose(Feedback::Dislike)
            >
                "👎"
            </button>
        </div>
    }
}
