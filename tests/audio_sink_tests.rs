//! Audio selector reconciliation: rebuild-on-change and selection forcing

use pretty_assertions::assert_eq;
use serde_json::json;

use rigpanel::ui::AudioSelectSink;
use rigpanel::{normalize_audio_options, AudioOption};

fn options(doc: serde_json::Value) -> Vec<AudioOption> {
    normalize_audio_options(&doc)
}

#[test]
fn test_unchanged_poll_does_not_rebuild() {
    let mut sink = AudioSelectSink::new();
    let opts = options(json!([
        {"id": "hdmi", "label": "HDMI"},
        {"id": "headphone", "label": "Headphones"}
    ]));

    let first = sink.sync(&opts, Some("hdmi"));
    assert!(first.rebuilt);
    assert!(first.selection_changed);

    // Identical list and selection: nothing signalled the second time
    let second = sink.sync(&opts, Some("hdmi"));
    assert!(!second.rebuilt);
    assert!(!second.selection_changed);
    assert_eq!(sink.options(), &opts[..]);
    assert_eq!(sink.value(), Some("hdmi"));
}

#[test]
fn test_list_change_triggers_rebuild() {
    let mut sink = AudioSelectSink::new();
    let before = options(json!([{"id": "hdmi", "label": "HDMI"}]));
    sink.sync(&before, Some("hdmi"));

    let after = options(json!([
        {"id": "hdmi", "label": "HDMI"},
        {"id": "usb", "label": "USB DAC"}
    ]));
    let outcome = sink.sync(&after, Some("hdmi"));
    assert!(outcome.rebuilt);
    assert!(!outcome.selection_changed);
    assert_eq!(sink.options().len(), 2);
}

#[test]
fn test_remote_selection_forces_displayed_value() {
    let mut sink = AudioSelectSink::new();
    let opts = options(json!([
        {"id": "hdmi", "label": "HDMI"},
        {"id": "usb", "label": "USB DAC"}
    ]));
    sink.sync(&opts, Some("hdmi"));

    // User flips the control locally; next poll still reports hdmi and wins
    sink.set_value("usb");
    let outcome = sink.sync(&opts, Some("hdmi"));
    assert!(outcome.selection_changed);
    assert_eq!(sink.value(), Some("hdmi"));
}

#[test]
fn test_matching_selection_leaves_user_interaction_alone() {
    let mut sink = AudioSelectSink::new();
    let opts = options(json!([{"id": "usb", "label": "USB DAC"}]));
    sink.sync(&opts, Some("usb"));

    sink.set_value("usb");
    let outcome = sink.sync(&opts, Some("usb"));
    assert!(!outcome.selection_changed);
}

#[test]
fn test_empty_list_disables_control() {
    let mut sink = AudioSelectSink::new();
    assert!(sink.is_disabled());

    let opts = options(json!([{"id": "hdmi", "label": "HDMI"}]));
    sink.sync(&opts, Some("hdmi"));
    assert!(!sink.is_disabled());

    sink.sync(&[], None);
    assert!(sink.is_disabled());
    assert_eq!(sink.value(), None);
}

#[test]
fn test_absent_remote_selection_clears_value() {
    let mut sink = AudioSelectSink::new();
    let opts = options(json!([{"id": "hdmi", "label": "HDMI"}]));
    sink.sync(&opts, Some("hdmi"));

    let outcome = sink.sync(&opts, None);
    assert!(outcome.selection_changed);
    assert_eq!(sink.value(), None);
}
