//! iOS completion acknowledgement using swift-bridge.

use crate::{CompletionSink, RemoteNotificationResult};

#[swift_bridge::bridge]
mod ffi {
    extern "Swift" {
        fn finish_remote_notification(completion_handler_id: &str, result: &str);
    }
}

/// Forwards acknowledgements to the host's `finish_remote_notification`,
/// which resolves the stored `fetchCompletionHandler`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeCompletionSink;

impl CompletionSink for NativeCompletionSink {
    fn finish_remote_notification(&self, completion_handler_id: &str, result: RemoteNotificationResult) {
        ffi::finish_remote_notification(completion_handler_id, result.as_str());
    }
}
