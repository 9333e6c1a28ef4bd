use super::*;
use crate::matcher::{DEFAULT_FALLBACK_REPLY, DEFAULT_GREETING_REPLY};

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_config_values() {
    let cfg = WidgetConfig::default();
    assert_eq!(cfg.reply_delay_ms, 1200);
    assert_eq!(cfg.storage_key, "chatMessages");
    assert!(cfg.persist_history);
    assert!(!cfg.sound);
    assert_eq!(cfg.close_policy, ClosePolicy::PreserveHistory);
    assert_eq!(cfg.quick_questions.len(), 4);
    assert_eq!(cfg.reply_delay(), std::time::Duration::from_millis(1200));
}

#[test]
fn default_persona_greeting_matches_builtin_reply() {
    assert_eq!(Persona::default().greeting(), DEFAULT_GREETING_REPLY);
}

#[test]
fn default_quick_questions_hit_rule_table() {
    let cfg = WidgetConfig::default();
    let matcher = cfg.matcher();
    for question in &cfg.quick_questions {
        assert_ne!(matcher.respond(question), DEFAULT_FALLBACK_REPLY, "{question}");
    }
}

// =============================================================
// from_json
// =============================================================

#[test]
fn from_json_empty_object_is_default() {
    let cfg = WidgetConfig::from_json("{}").unwrap();
    assert_eq!(cfg, WidgetConfig::default());
}

#[test]
fn from_json_reads_overrides() {
    let cfg = WidgetConfig::from_json(
        r#"{
            "reply_delay_ms": 300,
            "sound": true,
            "close_policy": "reset_session",
            "persona": { "name": "Aria" },
            "rules": [{ "keyword": "VPN", "reply": "Use a trusted VPN." }]
        }"#,
    )
    .unwrap();

    assert_eq!(cfg.reply_delay_ms, 300);
    assert!(cfg.sound);
    assert_eq!(cfg.close_policy, ClosePolicy::ResetSession);
    assert_eq!(cfg.persona.name, "Aria");
    assert_eq!(cfg.persona.title, "Cyber Safety Assistant");

    let matcher = cfg.matcher();
    assert_eq!(matcher.respond("is a vpn ok"), "Use a trusted VPN.");
    assert_eq!(matcher.respond("hello"), "Hello 👋 I'm Aria, your Cyber Safety Assistant.");
}

#[test]
fn from_json_rejects_malformed_json() {
    assert!(matches!(WidgetConfig::from_json("{"), Err(ConfigError::Parse(_))));
}

#[test]
fn from_json_rejects_unknown_close_policy() {
    assert!(matches!(WidgetConfig::from_json(r#"{"close_policy":"explode"}"#), Err(ConfigError::Parse(_))));
}

#[test]
fn from_json_rejects_excessive_delay() {
    let err = WidgetConfig::from_json(r#"{"reply_delay_ms": 120000}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "reply_delay_ms", .. }));
}

#[test]
fn from_json_rejects_empty_storage_key_when_persisting() {
    let err = WidgetConfig::from_json(r#"{"storage_key": " "}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "storage_key", .. }));

    let ok = WidgetConfig::from_json(r#"{"storage_key": "", "persist_history": false}"#);
    assert!(ok.is_ok());
}

#[test]
fn from_json_rejects_blank_quick_question() {
    let err = WidgetConfig::from_json(r#"{"quick_questions": ["ok", "  "]}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "quick_questions", .. }));
}
