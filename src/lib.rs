//! # saanvi
//!
//! Core of the Saanvi cyber-safety chat widget: keyword reply matching, the
//! conversation log, the widget state machine, and the capability traits the
//! rendering layer plugs browser storage and audio into.
//!
//! This crate is UI-framework agnostic. The Leptos front end lives in
//! `widget/` and drives a [`controller::WidgetController`] held in a signal.

pub mod audio;
pub mod config;
pub mod controller;
pub mod conversation;
pub mod feedback;
pub mod matcher;
pub mod message;
pub mod persistence;

pub use config::{ClosePolicy, WidgetConfig};
pub use controller::{Delivery, ReplyTicket, WidgetController, WidgetState};
pub use conversation::{ConversationLog, MessageView};
pub use feedback::{Feedback, FeedbackToggle};
pub use matcher::{ResponseMatcher, ResponseRule};
pub use message::{Message, Sender};
