use super::*;

const PHISHING_REPLY: &str = "Phishing is a cybercrime where attackers pretend to be trustworthy sources to steal \
                              sensitive information like passwords, credit card numbers, or personal data.";

// =============================================================
// Rule table
// =============================================================

#[test]
fn respond_matches_phishing_question_case_insensitively() {
    let matcher = ResponseMatcher::default();
    assert_eq!(matcher.respond("What is Phishing?"), PHISHING_REPLY);
}

#[test]
fn respond_matches_keyword_embedded_in_longer_input() {
    let matcher = ResponseMatcher::default();
    let reply = matcher.respond("my kid is facing CYBERBULLYING at school");
    assert_eq!(reply, default_rules()[3].reply);
}

#[test]
fn respond_returns_exact_reply_for_every_default_keyword() {
    let matcher = ResponseMatcher::default();
    for rule in default_rules() {
        let input = format!("please tell me: {}", rule.keyword.to_uppercase());
        assert_eq!(matcher.respond(&input), rule.reply);
    }
}

#[test]
fn respond_prefers_first_rule_in_definition_order() {
    let matcher = ResponseMatcher::new(
        vec![ResponseRule::new("alpha", "first"), ResponseRule::new("beta", "second")],
        "greet",
        "thanks",
        "fallback",
    );
    assert_eq!(matcher.respond("beta then alpha"), "first");
}

#[test]
fn respond_table_wins_over_greeting_substring() {
    // "phishing" contains "hi".
    let matcher = ResponseMatcher::default();
    assert_eq!(matcher.respond("what is phishing?"), PHISHING_REPLY);
}

#[test]
fn new_lowercases_rule_keywords() {
    let matcher = ResponseMatcher::new(vec![ResponseRule { keyword: "VPN".into(), reply: "vpn".into() }], "g", "t", "f");
    assert_eq!(matcher.respond("should I use a vpn"), "vpn");
}

// =============================================================
// Greeting / thanks / fallback
// =============================================================

#[test]
fn respond_greets_on_hello() {
    let matcher = ResponseMatcher::default();
    assert_eq!(matcher.respond("Hello there"), DEFAULT_GREETING_REPLY);
}

#[test]
fn respond_greets_on_hi_substring() {
    let matcher = ResponseMatcher::default();
    assert_eq!(matcher.respond("something"), DEFAULT_GREETING_REPLY);
}

#[test]
fn respond_thanks() {
    let matcher = ResponseMatcher::default();
    assert_eq!(matcher.respond("thanks a lot"), DEFAULT_THANKS_REPLY);
}

#[test]
fn respond_greeting_checked_before_thanks() {
    let matcher = ResponseMatcher::default();
    assert_eq!(matcher.respond("hello, thank you"), DEFAULT_GREETING_REPLY);
}

#[test]
fn respond_falls_back_for_unknown_input() {
    let matcher = ResponseMatcher::default();
    assert_eq!(matcher.respond("xyz"), DEFAULT_FALLBACK_REPLY);
}

#[test]
fn respond_falls_back_for_empty_input() {
    let matcher = ResponseMatcher::default();
    assert_eq!(matcher.respond(""), DEFAULT_FALLBACK_REPLY);
}

#[test]
fn default_rules_has_four_entries_in_order() {
    let keywords: Vec<_> = default_rules().into_iter().map(|r| r.keyword).collect();
    assert_eq!(
        keywords,
        vec!["what is phishing?", "is this website safe?", "how to create strong passwords?", "cyberbullying"]
    );
}
