//! Chat message value type.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// CSS modifier used by the renderer (`message user` / `message bot`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

/// A single chat message. Immutable once created.
///
/// The serialized shape `{sender, text, time}` is the persisted snapshot
/// record, so field names are part of the storage format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    #[serde(default)]
    pub time: String,
}

impl Message {
    /// Create a message stamped with the current local time.
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self::at(sender, text, current_time())
    }

    /// Create a message with an explicit timestamp label.
    pub fn at(sender: Sender, text: impl Into<String>, time: impl Into<String>) -> Self {
        Self { sender, text: text.into(), time: time.into() }
    }

    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }
}

/// Local wall-clock time as zero-padded `HH:MM`.
pub fn current_time() -> String {
    chrono::Local::now().format("%H:%M").to_string()
}
