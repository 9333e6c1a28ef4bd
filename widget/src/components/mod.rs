//! Widget UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and mutate the shared `RwSignal<WidgetController>` from
//! Leptos context; none of them hold conversation state of their own.

pub mod chat_window;
pub mod feedback_actions;
pub mod launcher;
pub mod message_item;
