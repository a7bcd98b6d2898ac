//! Raw notification payloads and typed views over their standard blocks.

use serde_json::{Map, Value};

use crate::NotificationMessage;

/// A received notification's `userInfo`, as handed over by the native layer.
pub type RawPayload = Map<String, Value>;

/// Standard APNs block holding alert, sound, badge, category and thread.
pub const APS_KEY: &str = "aps";
/// App-defined block carrying display metadata for silent notifications.
pub const MANAGED_APS_KEY: &str = "managedAps";
/// Token correlating the payload with a pending native completion handler.
pub const COMPLETION_HANDLER_ID_KEY: &str = "_completionHandlerId";
/// Delivery channel tag set by the native layer (e.g. `"voip"`).
pub const PUSH_TYPE_KEY: &str = "_pushType";

const ALERT: &str = "alert";
const SOUND: &str = "sound";
const BADGE: &str = "badge";
const CATEGORY: &str = "category";
const THREAD_ID: &str = "thread-id";
const CONTENT_AVAILABLE: &str = "content-available";

/// Whether a payload value counts as set.
///
/// `null`, `false`, `0` and `""` count as unset, like a missing key.
pub(crate) fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// Read-only view over a nested payload block such as `aps`.
///
/// A block that is missing or not a mapping behaves as an empty one.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Block<'a> {
    fields: Option<&'a RawPayload>,
}

impl<'a> Block<'a> {
    pub(crate) fn new(value: Option<&'a Value>) -> Self {
        Self {
            fields: value.and_then(Value::as_object),
        }
    }

    fn get(self, key: &str) -> Option<&'a Value> {
        self.fields.and_then(|fields| fields.get(key))
    }

    pub(crate) fn has(self, key: &str) -> bool {
        is_present(self.get(key))
    }

    fn string(self, key: &str) -> Option<String> {
        self.get(key).and_then(Value::as_str).map(str::to_string)
    }

    pub(crate) fn has_alert(self) -> bool {
        self.has(ALERT)
    }

    pub(crate) fn has_sound(self) -> bool {
        self.has(SOUND)
    }

    pub(crate) fn content_available(self) -> bool {
        self.get(CONTENT_AVAILABLE).is_some_and(|value| {
            value.as_u64() == Some(1) || value.as_f64().is_some_and(|n| (n - 1.0).abs() < f64::EPSILON)
        })
    }

    pub(crate) fn message(self) -> Option<NotificationMessage> {
        match self.get(ALERT)? {
            Value::String(text) => Some(NotificationMessage::Text(text.clone())),
            Value::Object(fields) => Some(NotificationMessage::Structured(fields.clone())),
            _ => None,
        }
    }

    pub(crate) fn sound(self) -> Option<String> {
        self.string(SOUND)
    }

    pub(crate) fn badge(self) -> Option<u32> {
        self.get(BADGE)
            .and_then(Value::as_u64)
            .and_then(|badge| u32::try_from(badge).ok())
    }

    pub(crate) fn category(self) -> Option<String> {
        self.string(CATEGORY)
    }

    pub(crate) fn thread(self) -> Option<String> {
        self.string(THREAD_ID)
    }
}
