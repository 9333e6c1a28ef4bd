//! Widget state machine: visibility, send pipeline, unread badge.
//!
//! DESIGN
//! ======
//! A single [`WidgetController`] owns all widget state (no globals). The
//! simulated typing delay is split in two halves so the controller stays
//! free of timers: [`WidgetController::send_user_message`] records the user
//! message and returns a [`ReplyTicket`], and the host calls
//! [`WidgetController::deliver_reply`] once the delay has elapsed.
//!
//! Tickets carry the session they were issued in. A reset-close bumps the
//! session, so a reply whose timer could not be cancelled still never lands
//! in the cleared log.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::sync::Arc;

use crate::audio::{AudioCue, SilentCue, Tone, play_best_effort};
use crate::config::{ClosePolicy, WidgetConfig};
use crate::conversation::ConversationLog;
use crate::feedback::Feedback;
use crate::matcher::ResponseMatcher;
use crate::message::Sender;
use crate::persistence::{HistoryStore, NoopStore, clear_history, load_history, save_history};

/// Visibility and counters for the single widget instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WidgetState {
    pub is_open: bool,
    pub is_minimized: bool,
    pub unread_count: u32,
    pub message_count: usize,
}

/// Handle for one pending simulated reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplyTicket {
    pub id: u64,
    pub session: u64,
    pub prompt: String,
}

/// Result of delivering a reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delivery {
    pub entry_id: String,
    pub reply: String,
    /// The widget was closed, so the unread badge was bumped.
    pub notified: bool,
}

#[derive(Clone)]
pub struct WidgetController {
    state: WidgetState,
    log: ConversationLog,
    matcher: ResponseMatcher,
    config: WidgetConfig,
    store: Arc<dyn HistoryStore>,
    audio: Arc<dyn AudioCue>,
    tone: Tone,
    input: String,
    session: u64,
    next_ticket: u64,
    pending: Vec<u64>,
}

impl Default for WidgetController {
    fn default() -> Self {
        Self::new(WidgetConfig::default())
    }
}

impl WidgetController {
    /// Build a closed widget with an empty log, no storage, and no sound device.
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            state: WidgetState::default(),
            log: ConversationLog::new(),
            matcher: config.matcher(),
            config,
            store: Arc::new(NoopStore),
            audio: Arc::new(SilentCue),
            tone: Tone::default(),
            input: String::new(),
            session: 0,
            next_ticket: 0,
            pending: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn HistoryStore>) -> Self {
        self.store = store;
        self
    }

    #[must_use]
    pub fn with_audio(mut self, audio: Arc<dyn AudioCue>) -> Self {
        self.audio = audio;
        self
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn matcher(&self) -> &ResponseMatcher {
        &self.matcher
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn is_typing(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn badge_visible(&self) -> bool {
        self.state.unread_count > 0
    }

    pub fn launcher_visible(&self) -> bool {
        !self.state.is_open
    }

    pub fn shows_welcome(&self) -> bool {
        self.log.shows_welcome()
    }

    /// Replay the persisted snapshot into the log. Runs once at startup.
    pub fn restore_history(&mut self) {
        if !self.config.persist_history {
            return;
        }
        let messages = load_history(self.store.as_ref());
        if !messages.is_empty() {
            log::debug!("restoring {} chat messages", messages.len());
        }
        self.log.restore(messages);
        self.sync_count();
    }

    pub fn open_chat(&mut self) {
        self.state.is_open = true;
        self.state.unread_count = 0;
    }

    /// Close the window. Returns `true` when the close also reset the session,
    /// in which case the host should cancel its pending reply timers.
    pub fn close_chat(&mut self) -> bool {
        self.state.is_open = false;
        if self.config.close_policy != ClosePolicy::ResetSession {
            return false;
        }

        self.input.clear();
        self.log.clear();
        if self.config.persist_history {
            clear_history(self.store.as_ref());
        }
        self.pending.clear();
        self.session += 1;
        self.sync_count();
        log::debug!("chat session reset on close (session {})", self.session);
        true
    }

    pub fn toggle_minimize(&mut self) {
        self.state.is_minimized = !self.state.is_minimized;
    }

    /// Submit the input field. Blank input is ignored and left untouched.
    pub fn send_message(&mut self) -> Option<ReplyTicket> {
        let text = self.input.trim().to_owned();
        if text.is_empty() {
            return None;
        }
        let ticket = self.send_user_message(text);
        self.input.clear();
        Some(ticket)
    }

    /// Send the quick question at `index` as if the user typed it.
    pub fn send_quick_question(&mut self, index: usize) -> Option<ReplyTicket> {
        let question = self.config.quick_questions.get(index)?.clone();
        Some(self.send_user_message(question))
    }

    /// Record a user message and start the typing indicator.
    ///
    /// The returned ticket must be passed to [`Self::deliver_reply`] after
    /// [`WidgetConfig::reply_delay`].
    pub fn send_user_message(&mut self, text: impl Into<String>) -> ReplyTicket {
        let prompt = text.into();
        self.log.append(prompt.clone(), Sender::User);
        self.persist();
        self.sync_count();

        self.next_ticket += 1;
        let ticket = ReplyTicket { id: self.next_ticket, session: self.session, prompt };
        self.pending.push(ticket.id);
        ticket
    }

    /// Append the bot reply for `ticket`.
    ///
    /// Returns `None` for tickets that were already delivered or belong to a
    /// session that has since been reset.
    pub fn deliver_reply(&mut self, ticket: &ReplyTicket) -> Option<Delivery> {
        if ticket.session != self.session {
            log::debug!("dropping reply {} from stale session {}", ticket.id, ticket.session);
            return None;
        }
        let position = self.pending.iter().position(|id| *id == ticket.id)?;
        self.pending.remove(position);

        let reply = self.matcher.respond(&ticket.prompt).to_owned();
        let entry_id = self.log.append(reply.clone(), Sender::Bot).id.clone();
        self.persist();
        self.sync_count();

        let notified = !self.state.is_open;
        if notified {
            self.state.unread_count += 1;
        }
        if self.config.sound {
            play_best_effort(self.audio.as_ref(), &self.tone);
        }

        Some(Delivery { entry_id, reply, notified })
    }

    pub fn set_feedback(&mut self, entry_id: &str, feedback: Feedback) -> bool {
        self.log.set_feedback(entry_id, feedback)
    }

    fn persist(&self) {
        if self.config.persist_history {
            save_history(self.store.as_ref(), &self.log.serialize());
        }
    }

    fn sync_count(&mut self) {
        self.state.message_count = self.log.message_count();
    }
}
