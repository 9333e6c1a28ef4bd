//! Per-bot-message like/dislike toggle.
//!
//! Purely local presentation state: nothing here is persisted or sent
//! anywhere, and re-rendering a restored message starts it fresh.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

/// The control the user last activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Like,
    Dislike,
}

/// Visibility of the like/dislike pair on one bot message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeedbackToggle {
    choice: Option<Feedback>,
}

impl FeedbackToggle {
    pub fn apply(&mut self, feedback: Feedback) {
        self.choice = Some(feedback);
    }

    pub fn like_visible(&self) -> bool {
        self.choice != Some(Feedback::Dislike)
    }

    pub fn dislike_visible(&self) -> bool {
        self.choice != Some(Feedback::Like)
    }
}
