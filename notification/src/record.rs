use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::payload::{self, Block, RawPayload};
use crate::{CompletionSink, FinishState, NotificationError, RemoteNotificationResult};

/// How a notification was classified on arrival.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Alert shown by the OS from the `aps` block.
    Regular,
    /// Silent delivery whose display metadata lives in `managedAps`.
    Managed,
    /// Neither of the above; no standard fields were extracted.
    #[default]
    Unclassified,
}

impl NotificationKind {
    /// Lowercase name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Managed => "managed",
            Self::Unclassified => "unclassified",
        }
    }
}

/// Alert content of a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationMessage {
    /// Plain alert text.
    Text(String),
    /// Structured alert (`title`, `body`, `loc-key`, ...), kept as received.
    Structured(RawPayload),
}

impl NotificationMessage {
    /// The alert text, if this is a plain text alert.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Structured(_) => None,
        }
    }
}

/// A received push notification.
///
/// Built once from the payload the native layer delivered. Apart from the
/// finish latch it never changes afterwards.
#[derive(Debug)]
pub struct RemoteNotification {
    message: Option<NotificationMessage>,
    sound: Option<String>,
    badge_count: Option<u32>,
    category: Option<String>,
    kind: NotificationKind,
    thread: Option<String>,
    data: RawPayload,
    state: FinishState,
}

impl RemoteNotification {
    /// Classify `payload` and extract its standard fields.
    ///
    /// Never fails: missing or ill-shaped fields come out as `None`.
    #[must_use]
    pub fn from_payload(mut payload: RawPayload) -> Self {
        let aps_value = payload.remove(payload::APS_KEY);
        let aps = Block::new(aps_value.as_ref());
        let managed_value = payload.get(payload::MANAGED_APS_KEY);

        let mut notification = Self {
            message: None,
            sound: None,
            badge_count: None,
            category: None,
            kind: NotificationKind::Unclassified,
            thread: None,
            data: RawPayload::new(),
            state: FinishState::Pending,
        };

        if aps.content_available()
            && !aps.has_alert()
            && !aps.has_sound()
            && payload::is_present(managed_value)
        {
            let managed = Block::new(managed_value);
            notification.message = managed.message();
            notification.sound = managed.sound();
            notification.badge_count = aps.badge();
            notification.category = managed.category();
            notification.kind = NotificationKind::Managed;
            notification.thread = aps.thread();
        } else if aps.has_alert() {
            notification.message = aps.message();
            notification.sound = aps.sound();
            notification.badge_count = aps.badge();
            notification.category = aps.category();
            notification.kind = NotificationKind::Regular;
            notification.thread = aps.thread();
        }

        log::debug!(
            "received {} notification with {} custom field(s)",
            notification.kind.as_str(),
            payload.len()
        );

        notification.data = payload;
        notification
    }

    /// Build from any JSON value. Non-object values give an empty payload.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(payload) => Self::from_payload(payload),
            other => {
                log::debug!("notification payload is not a mapping: {other}");
                Self::from_payload(RawPayload::new())
            }
        }
    }

    /// Parse the JSON text handed over by the native bridge.
    ///
    /// # Errors
    /// Returns [`NotificationError::Json`] if `json` is not valid JSON.
    pub fn from_json(json: &str) -> Result<Self, NotificationError> {
        let value = serde_json::from_str(json)?;
        Ok(Self::from_value(value))
    }

    /// Alert content.
    #[must_use]
    pub const fn message(&self) -> Option<&NotificationMessage> {
        self.message.as_ref()
    }

    /// Sound name.
    #[must_use]
    pub fn sound(&self) -> Option<&str> {
        self.sound.as_deref()
    }

    /// App icon badge count.
    #[must_use]
    pub const fn badge_count(&self) -> Option<u32> {
        self.badge_count
    }

    /// Notification category, used to pick the action set.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Every top-level payload field except `aps`, as received.
    #[must_use]
    pub const fn data(&self) -> &RawPayload {
        &self.data
    }

    /// Classification decided at construction.
    #[must_use]
    pub const fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// Thread identifier used to group notifications.
    #[must_use]
    pub fn thread(&self) -> Option<&str> {
        self.thread.as_deref()
    }

    /// The `_pushType` tag from the custom data.
    #[must_use]
    pub fn push_type(&self) -> Option<&str> {
        self.data_str(payload::PUSH_TYPE_KEY)
    }

    /// The `_completionHandlerId` token from the custom data.
    #[must_use]
    pub fn completion_handler_id(&self) -> Option<&str> {
        self.data_str(payload::COMPLETION_HANDLER_ID_KEY)
    }

    /// Current state of the finish latch.
    #[must_use]
    pub const fn finish_state(&self) -> FinishState {
        self.state
    }

    /// Returns `true` once the completion acknowledgement has been sent.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    fn data_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }

    /// Report the processing result to the platform's native module.
    ///
    /// See [`finish_with`](Self::finish_with).
    pub fn finish(&mut self, result: Option<RemoteNotificationResult>) -> bool {
        self.finish_with(result, &crate::sys::NativeCompletionSink)
    }

    /// Report the processing result to `sink`, at most once per notification.
    ///
    /// `None` reports [`RemoteNotificationResult::NoData`]. Nothing happens if
    /// the notification was already finished or carries no completion handler
    /// id. Returns whether `sink` was called.
    pub fn finish_with<S>(&mut self, result: Option<RemoteNotificationResult>, sink: &S) -> bool
    where
        S: CompletionSink + ?Sized,
    {
        let Some(id) = self.data.get(payload::COMPLETION_HANDLER_ID_KEY) else {
            log::debug!("no completion handler id, skipping finish");
            return false;
        };
        // Any truthy id is forwarded; non-string ids use their JSON text.
        if !payload::is_present(Some(id)) {
            log::debug!("empty completion handler id, skipping finish");
            return false;
        }
        if !self.state.complete() {
            log::debug!("notification already finished");
            return false;
        }

        let id = match id {
            Value::String(id) => id.clone(),
            other => other.to_string(),
        };
        let result = result.unwrap_or_default();
        log::debug!("finishing remote notification {id} with {result}");
        sink.finish_remote_notification(&id, result);
        true
    }

    /// Like [`finish_with`](Self::finish_with), taking the result by name.
    ///
    /// # Errors
    /// Returns [`NotificationError::InvalidArgument`] if `result` is not one of
    /// `NewData`, `NoData` or `Failed`. The latch is left untouched and `sink`
    /// is not called.
    pub fn finish_str<S>(&mut self, result: Option<&str>, sink: &S) -> Result<bool, NotificationError>
    where
        S: CompletionSink + ?Sized,
    {
        let result = result.map(str::parse::<RemoteNotificationResult>).transpose()?;
        Ok(self.finish_with(result, sink))
    }
}

impl From<RawPayload> for RemoteNotification {
    fn from(payload: RawPayload) -> Self {
        Self::from_payload(payload)
    }
}
