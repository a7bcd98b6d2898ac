use pushkit_notification::{NotificationKind, NotificationMessage, RawPayload, RemoteNotification};
use serde_json::{Value, json};

fn payload(value: Value) -> RawPayload {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture must be an object, got {other}"),
    }
}

fn parse(value: Value) -> RemoteNotification {
    RemoteNotification::from_payload(payload(value))
}

#[test]
fn regular_notification_reads_aps() {
    let notification = parse(json!({
        "aps": {
            "alert": "Hi",
            "sound": "chime.caf",
            "badge": 3,
            "category": "MESSAGE",
            "thread-id": "t1"
        },
        "_completionHandlerId": "abc",
        "foo": "bar"
    }));

    assert_eq!(notification.kind(), NotificationKind::Regular);
    assert_eq!(notification.message().and_then(NotificationMessage::as_text), Some("Hi"));
    assert_eq!(notification.sound(), Some("chime.caf"));
    assert_eq!(notification.badge_count(), Some(3));
    assert_eq!(notification.category(), Some("MESSAGE"));
    assert_eq!(notification.thread(), Some("t1"));
    assert_eq!(
        notification.data(),
        &payload(json!({ "_completionHandlerId": "abc", "foo": "bar" }))
    );
    assert!(!notification.is_finished());
}

#[test]
fn regular_wins_over_content_available_when_alert_present() {
    let notification = parse(json!({
        "aps": { "content-available": 1, "alert": "Visible" },
        "managedAps": { "alert": "Hidden" }
    }));

    assert_eq!(notification.kind(), NotificationKind::Regular);
    assert_eq!(notification.message(), Some(&NotificationMessage::Text("Visible".into())));
}

#[test]
fn structured_alert_is_kept() {
    let notification = parse(json!({
        "aps": { "alert": { "title": "Title", "body": "Body" } }
    }));

    let expected = payload(json!({ "title": "Title", "body": "Body" }));
    assert_eq!(notification.message(), Some(&NotificationMessage::Structured(expected)));
    assert_eq!(notification.message().and_then(NotificationMessage::as_text), None);
}

#[test]
fn managed_notification_reads_managed_aps() {
    let notification = parse(json!({
        "aps": { "content-available": 1, "badge": 7, "thread-id": "room-9" },
        "managedAps": { "alert": "Managed hi", "sound": "ping", "category": "CALL" }
    }));

    assert_eq!(notification.kind(), NotificationKind::Managed);
    assert_eq!(notification.message().and_then(NotificationMessage::as_text), Some("Managed hi"));
    assert_eq!(notification.sound(), Some("ping"));
    assert_eq!(notification.category(), Some("CALL"));
    assert_eq!(notification.badge_count(), Some(7));
    assert_eq!(notification.thread(), Some("room-9"));
    assert!(notification.data().contains_key("managedAps"));
}

#[test]
fn managed_requires_silent_aps() {
    let notification = parse(json!({
        "aps": { "content-available": 1, "sound": "ping" },
        "managedAps": { "alert": "Managed hi" }
    }));

    assert_eq!(notification.kind(), NotificationKind::Unclassified);
    assert_eq!(notification.message(), None);
    assert_eq!(notification.sound(), None);
}

#[test]
fn silent_without_managed_aps_is_unclassified() {
    let notification = parse(json!({
        "aps": { "content-available": 1, "badge": 2, "thread-id": "t" },
        "custom": 1
    }));

    assert_eq!(notification.kind(), NotificationKind::Unclassified);
    assert_eq!(notification.badge_count(), None);
    assert_eq!(notification.thread(), None);
    assert_eq!(notification.category(), None);
    assert_eq!(notification.data(), &payload(json!({ "custom": 1 })));
}

#[test]
fn empty_alert_is_absent() {
    let notification = parse(json!({ "aps": { "alert": "", "badge": 1 } }));

    assert_eq!(notification.kind(), NotificationKind::Unclassified);
    assert_eq!(notification.badge_count(), None);
}

#[test]
fn missing_aps_is_unclassified() {
    let notification = parse(json!({}));

    assert_eq!(notification.kind(), NotificationKind::Unclassified);
    assert!(notification.data().is_empty());
    assert_eq!(notification.push_type(), None);
}

#[test]
fn ill_shaped_fields_come_out_absent() {
    let notification = parse(json!({
        "aps": { "alert": 42, "sound": true, "badge": "3", "category": ["x"], "thread-id": 5 }
    }));

    assert_eq!(notification.kind(), NotificationKind::Regular);
    assert_eq!(notification.message(), None);
    assert_eq!(notification.sound(), None);
    assert_eq!(notification.badge_count(), None);
    assert_eq!(notification.category(), None);
    assert_eq!(notification.thread(), None);
}

#[test]
fn nested_custom_values_are_preserved() {
    let nested = json!({ "deep": { "list": [1, { "x": null }], "flag": false } });
    let notification = parse(json!({
        "aps": { "alert": "Hi" },
        "_pushType": "voip",
        "nested": nested.clone()
    }));

    assert_eq!(notification.data().get("nested"), Some(&nested));
    assert_eq!(notification.push_type(), Some("voip"));
    assert!(!notification.data().contains_key("aps"));
}

#[test]
fn parses_bridge_json() {
    let notification = RemoteNotification::from_json(
        r#"{"aps":{"alert":"Hi","thread-id":"t1"},"_completionHandlerId":"abc"}"#,
    )
    .unwrap();

    assert_eq!(notification.kind(), NotificationKind::Regular);
    assert_eq!(notification.thread(), Some("t1"));
    assert_eq!(notification.completion_handler_id(), Some("abc"));
}

#[test]
fn rejects_text_that_is_not_json() {
    let err = RemoteNotification::from_json("{aps:").unwrap_err();
    assert!(matches!(err, pushkit_notification::NotificationError::Json(_)));
}

#[test]
fn non_object_json_is_an_empty_payload() {
    let notification = RemoteNotification::from_json("[1, 2]").unwrap();

    assert_eq!(notification.kind(), NotificationKind::Unclassified);
    assert!(notification.data().is_empty());
}

#[test]
fn kind_serializes_lowercase() {
    assert_eq!(serde_json::to_value(NotificationKind::Managed).unwrap(), json!("managed"));
    assert_eq!(NotificationKind::Regular.as_str(), "regular");
}
