//! Append-only conversation log.
//!
//! DESIGN
//! ======
//! The log owns message data and the per-message feedback state; it knows
//! nothing about rendering. The widget renders `entries()` keyed by
//! [`MessageView::id`] and derives welcome-banner visibility from
//! [`ConversationLog::shows_welcome`].

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use crate::feedback::{Feedback, FeedbackToggle};
use crate::message::{Message, Sender, current_time};

/// A rendered log entry: the message plus its feedback controls (bot only).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageView {
    pub id: String,
    pub message: Message,
    pub feedback: Option<FeedbackToggle>,
}

/// Ordered sequence of messages for one widget session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversationLog {
    entries: Vec<MessageView>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message stamped now.
    pub fn append(&mut self, text: impl Into<String>, sender: Sender) -> &MessageView {
        self.append_message(Message::new(sender, text))
    }

    /// Append an already-built message. Bot messages get a fresh feedback toggle.
    pub fn append_message(&mut self, message: Message) -> &MessageView {
        let feedback = message.is_bot().then(FeedbackToggle::default);
        self.entries.push(MessageView { id: uuid::Uuid::new_v4().to_string(), message, feedback });
        let index = self.entries.len() - 1;
        &self.entries[index]
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[MessageView] {
        &self.entries
    }

    pub fn message_count(&self) -> usize {
        self.entries.len()
    }

    /// Welcome banner and quick questions are shown only before the first message.
    pub fn shows_welcome(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the messages in order, without render state.
    pub fn serialize(&self) -> Vec<Message> {
        self.entries.iter().map(|e| e.message.clone()).collect()
    }

    /// Replay `messages` through the append path.
    ///
    /// Stored timestamps are kept; an empty one is re-derived from the clock.
    pub fn restore(&mut self, messages: Vec<Message>) {
        for mut message in messages {
            if message.time.is_empty() {
                message.time = current_time();
            }
            self.append_message(message);
        }
    }

    /// Record a like/dislike on the entry with `id`.
    ///
    /// Returns `false` when the id is unknown or belongs to a user message.
    pub fn set_feedback(&mut self, id: &str, feedback: Feedback) -> bool {
        let Some(toggle) = self.entries.iter_mut().find(|e| e.id == id).and_then(|e| e.feedback.as_mut()) else {
            return false;
        };
        toggle.apply(feedback);
        true
    }
}
