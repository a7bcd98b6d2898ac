use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::NotificationError;

/// Outcome of background processing, reported back through
/// [`RemoteNotification::finish`](crate::RemoteNotification::finish).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemoteNotificationResult {
    /// New content was downloaded.
    NewData,
    /// Nothing new was available.
    #[default]
    NoData,
    /// Fetching content failed.
    Failed,
}

impl RemoteNotificationResult {
    /// All results, in `UIBackgroundFetchResult` order.
    pub const ALL: [Self; 3] = [Self::NewData, Self::NoData, Self::Failed];

    /// The name passed across the native bridge.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NewData => "NewData",
            Self::NoData => "NoData",
            Self::Failed => "Failed",
        }
    }

    /// Raw value of the matching `UIBackgroundFetchResult` case.
    #[must_use]
    pub const fn background_fetch_result(self) -> u32 {
        match self {
            Self::NewData => 0,
            Self::NoData => 1,
            Self::Failed => 2,
        }
    }
}

impl fmt::Display for RemoteNotificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RemoteNotificationResult {
    type Err = NotificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|result| result.as_str() == s)
            .ok_or_else(|| NotificationError::InvalidArgument(s.to_string()))
    }
}
