//! Widget configuration.
//!
//! Hosts embed the widget with an optional JSON object; every field has a
//! default, so `{}` (or no config at all) yields the stock cyber-safety
//! assistant.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::matcher::{DEFAULT_FALLBACK_REPLY, DEFAULT_THANKS_REPLY, ResponseMatcher, ResponseRule, default_rules};

pub const DEFAULT_REPLY_DELAY_MS: u32 = 1200;
pub const MAX_REPLY_DELAY_MS: u32 = 60_000;
pub const DEFAULT_STORAGE_KEY: &str = "chatMessages";

/// Error returned by [`WidgetConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid widget config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// What closing the chat window does to the conversation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosePolicy {
    /// Hide the window; history survives close and reopen.
    #[default]
    PreserveHistory,
    /// Hide the window and start a fresh session: clear input, log, snapshot,
    /// and any pending reply.
    ResetSession,
}

/// Assistant identity shown in the header and greeting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Persona {
    pub name: String,
    pub title: String,
}

impl Default for Persona {
    fn default() -> Self {
        Self { name: "Saanvi".to_owned(), title: "Cyber Safety Assistant".to_owned() }
    }
}

impl Persona {
    pub fn greeting(&self) -> String {
        format!("Hello 👋 I'm {}, your {}.", self.name, self.title)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub reply_delay_ms: u32,
    pub storage_key: String,
    pub persist_history: bool,
    pub sound: bool,
    pub close_policy: ClosePolicy,
    pub quick_questions: Vec<String>,
    pub persona: Persona,
    /// Replaces the built-in rule table when present.
    pub rules: Option<Vec<ResponseRule>>,
    pub thanks_reply: Option<String>,
    pub fallback_reply: Option<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            persist_history: true,
            sound: false,
            close_policy: ClosePolicy::default(),
            quick_questions: default_quick_questions(),
            persona: Persona::default(),
            rules: None,
            thanks_reply: None,
            fallback_reply: None,
        }
    }
}

impl WidgetConfig {
    /// Parse and validate a host-supplied JSON config.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reply_delay_ms > MAX_REPLY_DELAY_MS {
            return Err(ConfigError::Invalid {
                field: "reply_delay_ms",
                reason: format!("{} exceeds {MAX_REPLY_DELAY_MS}", self.reply_delay_ms),
            });
        }
        if self.persist_history && self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "storage_key",
                reason: "must not be empty when persist_history is enabled".to_owned(),
            });
        }
        if self.quick_questions.iter().any(|q| q.trim().is_empty()) {
            return Err(ConfigError::Invalid { field: "quick_questions", reason: "entries must not be blank".to_owned() });
        }
        if let Some(rules) = &self.rules {
            if rules.iter().any(|r| r.keyword.is_empty()) {
                return Err(ConfigError::Invalid { field: "rules", reason: "keywords must not be empty".to_owned() });
            }
        }
        Ok(())
    }

    /// Build the reply matcher described by this config.
    pub fn matcher(&self) -> ResponseMatcher {
        ResponseMatcher::new(
            self.rules.clone().unwrap_or_else(default_rules),
            self.persona.greeting(),
            self.thanks_reply.as_deref().unwrap_or(DEFAULT_THANKS_REPLY),
            self.fallback_reply.as_deref().unwrap_or(DEFAULT_FALLBACK_REPLY),
        )
    }

    pub fn reply_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(u64::from(self.reply_delay_ms))
    }
}

pub fn default_quick_questions() -> Vec<String> {
    ["What is phishing?", "Is this website safe?", "How to create strong passwords?", "What to do about cyberbullying?"]
        .into_iter()
        .map(str::to_owned)
        .collect()
}
