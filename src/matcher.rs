//! Keyword reply matching.
//!
//! DESIGN
//! ======
//! Rules are tested in definition order against the lowercased input, so a
//! table is a `Vec` rather than a map. The greeting and thanks checks run
//! after the table and before the fallback, which means a table keyword
//! always wins over "hi" appearing inside a longer word.

#[cfg(test)]
#[path = "matcher_test.rs"]
mod matcher_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_GREETING_REPLY: &str = "Hello 👋 I'm Saanvi, your Cyber Safety Assistant.";
pub const DEFAULT_THANKS_REPLY: &str = "You're welcome! Stay safe online 🛡️";
pub const DEFAULT_FALLBACK_REPLY: &str = "Ask me about phishing, password safety, cyberbullying, or website security.";

const GREETING_KEYWORDS: [&str; 2] = ["hi", "hello"];
const THANKS_KEYWORD: &str = "thank";

/// A single `(substring, canned reply)` pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRule {
    pub keyword: String,
    pub reply: String,
}

impl ResponseRule {
    pub fn new(keyword: impl Into<String>, reply: impl Into<String>) -> Self {
        Self { keyword: keyword.into().to_lowercase(), reply: reply.into() }
    }
}

/// Maps free-text input to a canned reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponseMatcher {
    rules: Vec<ResponseRule>,
    greeting_reply: String,
    thanks_reply: String,
    fallback_reply: String,
}

impl Default for ResponseMatcher {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            greeting_reply: DEFAULT_GREETING_REPLY.to_owned(),
            thanks_reply: DEFAULT_THANKS_REPLY.to_owned(),
            fallback_reply: DEFAULT_FALLBACK_REPLY.to_owned(),
        }
    }
}

impl ResponseMatcher {
    /// Build a matcher from an explicit rule table and the three fixed replies.
    ///
    /// Keywords are lowercased here so matching only has to normalize input.
    pub fn new(
        rules: Vec<ResponseRule>,
        greeting_reply: impl Into<String>,
        thanks_reply: impl Into<String>,
        fallback_reply: impl Into<String>,
    ) -> Self {
        let rules = rules.into_iter().map(|r| ResponseRule::new(r.keyword, r.reply)).collect();
        Self {
            rules,
            greeting_reply: greeting_reply.into(),
            thanks_reply: thanks_reply.into(),
            fallback_reply: fallback_reply.into(),
        }
    }

    /// Return the canned reply for `input`. Never fails.
    pub fn respond(&self, input: &str) -> &str {
        let text = input.to_lowercase();

        if let Some(rule) = self.rules.iter().find(|r| text.contains(r.keyword.as_str())) {
            return &rule.reply;
        }
        if GREETING_KEYWORDS.iter().any(|k| text.contains(k)) {
            return &self.greeting_reply;
        }
        if text.contains(THANKS_KEYWORD) {
            return &self.thanks_reply;
        }
        &self.fallback_reply
    }
}

/// The built-in cyber-safety rule table, in match order.
pub fn default_rules() -> Vec<ResponseRule> {
    vec![
        ResponseRule::new(
            "what is phishing?",
            "Phishing is a cybercrime where attackers pretend to be trustworthy sources to steal sensitive \
             information like passwords, credit card numbers, or personal data.",
        ),
        ResponseRule::new(
            "is this website safe?",
            "Check for HTTPS, spelling errors, SSL certificate, professional design, and valid contact info.",
        ),
        ResponseRule::new(
            "how to create strong passwords?",
            "Use 12+ characters, mix symbols, avoid personal info, use unique passwords and enable 2FA.",
        ),
        ResponseRule::new(
            "cyberbullying",
            "Do not respond, block the bully, save evidence, report it, and call cyber crime helpline 1930.",
        ),
    ]
}
