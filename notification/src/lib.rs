//! Received push notification handling.
//!
//! Turns the payload the native layer hands over into a [`RemoteNotification`]:
//! classifies it as regular, managed (silent, with display metadata in
//! `managedAps`) or unclassified, extracts the standard `aps` fields and keeps
//! every custom field. A background delivery is acknowledged exactly once via
//! [`RemoteNotification::finish`].
//!
//! ```
//! use pushkit_notification::{NotificationKind, RemoteNotification, RemoteNotificationResult};
//!
//! let mut notification = RemoteNotification::from_json(
//!     r#"{"aps": {"alert": "Hi", "badge": 3}, "_completionHandlerId": "abc"}"#,
//! )?;
//! assert_eq!(notification.kind(), NotificationKind::Regular);
//! assert_eq!(notification.badge_count(), Some(3));
//!
//! let sink = |id: &str, result: RemoteNotificationResult| println!("{id}: {result}");
//! assert!(notification.finish_with(Some(RemoteNotificationResult::NewData), &sink));
//! assert!(!notification.finish_with(None, &sink));
//! # Ok::<(), pushkit_notification::NotificationError>(())
//! ```

#![warn(missing_docs)]

mod completion;
mod error;
pub mod payload;
mod record;
mod result;

/// Platform-specific implementations.
pub mod sys;

pub use completion::{CompletionSink, FinishState};
pub use error::NotificationError;
pub use payload::RawPayload;
pub use record::{NotificationKind, NotificationMessage, RemoteNotification};
pub use result::RemoteNotificationResult;
pub use sys::NativeCompletionSink;
