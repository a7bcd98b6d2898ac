//! Parse a background push and acknowledge it.
use pushkit_notification::{RemoteNotification, RemoteNotificationResult};

const PAYLOAD: &str = r#"{
    "aps": { "content-available": 1, "badge": 2, "thread-id": "chat-42" },
    "managedAps": { "alert": "New message", "sound": "default", "category": "REPLY" },
    "_completionHandlerId": "handler-1",
    "conversation": 42
}"#;

fn main() -> Result<(), pushkit_notification::NotificationError> {
    let mut notification = RemoteNotification::from_json(PAYLOAD)?;
    println!("kind: {}", notification.kind().as_str());
    println!("message: {:?}", notification.message());
    println!("custom data: {:?}", notification.data());

    let sink = |id: &str, result: RemoteNotificationResult| {
        println!("acknowledged {id} with {result}");
    };
    notification.finish_with(Some(RemoteNotificationResult::NewData), &sink);
    Ok(())
}
