use super::*;
use saanvi::{Feedback, WidgetConfig};

// =============================================================
// Keys and display
// =============================================================

#[test]
fn enter_without_shift_submits() {
    assert!(is_submit_key("Enter", false));
}

#[test]
fn shift_enter_does_not_submit() {
    assert!(!is_submit_key("Enter", true));
}

#[test]
fn other_keys_do_not_submit() {
    assert!(!is_submit_key("a", false));
    assert!(!is_submit_key("Tab", false));
}

#[test]
fn display_if_hides_with_none() {
    assert_eq!(display_if(true, "flex"), "flex");
    assert_eq!(display_if(false, "flex"), "none");
}

// =============================================================
// Focus and scroll triggers
// =============================================================

#[test]
fn typing_does_not_change_focus_or_scroll_triggers() {
    let mut ctl = WidgetController::new(WidgetConfig::default());
    ctl.open_chat();
    let (open, scroll) = (is_open_state(&ctl), scroll_state(&ctl));

    ctl.set_input("how do I spot phishing");
    assert_eq!(is_open_state(&ctl), open);
    assert_eq!(scroll_state(&ctl), scroll);
}

#[test]
fn feedback_does_not_change_scroll_trigger() {
    let mut ctl = WidgetController::new(WidgetConfig::default());
    ctl.open_chat();
    let ticket = ctl.send_user_message("hello");
    let delivery = ctl.deliver_reply(&ticket).unwrap();
    let before = scroll_state(&ctl);

    assert!(ctl.set_feedback(&delivery.entry_id, Feedback::Like));
    assert_eq!(scroll_state(&ctl), before);
    assert!(is_open_state(&ctl));
}

#[test]
fn sending_and_replying_change_scroll_trigger() {
    let mut ctl = WidgetController::new(WidgetConfig::default());
    ctl.open_chat();
    assert_eq!(scroll_state(&ctl), (0, false));

    let ticket = ctl.send_user_message("hello");
    assert_eq!(scroll_state(&ctl), (1, true));

    ctl.deliver_reply(&ticket).unwrap();
    assert_eq!(scroll_state(&ctl), (2, false));
}

#[test]
fn open_and_close_flip_focus_trigger() {
    let mut ctl = WidgetController::new(WidgetConfig::default());
    assert!(!is_open_state(&ctl));
    ctl.open_chat();
    assert!(is_open_state(&ctl));
    ctl.close_chat();
    assert!(!is_open_state(&ctl));
}
