use thiserror::Error;

/// Errors that can occur when handling a received notification.
#[derive(Error, Debug)]
pub enum NotificationError {
    /// A completion result outside `NewData`, `NoData` and `Failed`.
    #[error("invalid remote notification result: {0:?}")]
    InvalidArgument(String),

    /// The bridge handed over text that is not JSON.
    #[error("invalid payload JSON: {0}")]
    Json(#[from] serde_json::Error),
}
