//! Stub for platforms where the OS hands out no completion handler.
use crate::{CompletionSink, RemoteNotificationResult};

/// Drops acknowledgements with a warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeCompletionSink;

impl CompletionSink for NativeCompletionSink {
    fn finish_remote_notification(&self, completion_handler_id: &str, result: RemoteNotificationResult) {
        log::warn!(
            "no native completion handler on this platform, dropping {result} for {completion_handler_id}"
        );
    }
}
