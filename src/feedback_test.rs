use super::*;

// =============================================================
// FeedbackToggle
// =============================================================

#[test]
fn toggle_starts_with_both_visible() {
    let toggle = FeedbackToggle::default();
    assert!(toggle.like_visible());
    assert!(toggle.dislike_visible());
}

#[test]
fn like_hides_dislike() {
    let mut toggle = FeedbackToggle::default();
    toggle.apply(Feedback::Like);
    assert!(toggle.like_visible());
    assert!(!toggle.dislike_visible());
}

#[test]
fn dislike_hides_like() {
    let mut toggle = FeedbackToggle::default();
    toggle.apply(Feedback::Dislike);
    assert!(!toggle.like_visible());
    assert!(toggle.dislike_visible());
}

#[test]
fn like_then_dislike_then_like() {
    let mut toggle = FeedbackToggle::default();
    toggle.apply(Feedback::Like);
    toggle.apply(Feedback::Dislike);
    assert!(toggle.dislike_visible());
    assert!(!toggle.like_visible());

    toggle.apply(Feedback::Like);
    assert!(toggle.like_visible());
    assert!(!toggle.dislike_visible());
}
