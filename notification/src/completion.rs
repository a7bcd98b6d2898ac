//! Completion acknowledgement plumbing.

use crate::RemoteNotificationResult;

/// Receiver of completion acknowledgements, usually the native notification module.
///
/// The native side keeps the OS completion handler for each background
/// delivery and resolves it when this is called.
pub trait CompletionSink {
    /// Resolve the completion handler registered under `completion_handler_id`.
    fn finish_remote_notification(&self, completion_handler_id: &str, result: RemoteNotificationResult);
}

impl<F> CompletionSink for F
where
    F: Fn(&str, RemoteNotificationResult),
{
    fn finish_remote_notification(&self, completion_handler_id: &str, result: RemoteNotificationResult) {
        self(completion_handler_id, result);
    }
}

/// One-way latch guarding the completion acknowledgement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FinishState {
    /// No acknowledgement has been sent yet.
    #[default]
    Pending,
    /// The acknowledgement was sent. Terminal.
    Finished,
}

impl FinishState {
    /// Returns `true` once the acknowledgement has been sent.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }

    /// Move to [`FinishState::Finished`].
    ///
    /// Returns `true` only for the call that performed the transition.
    pub(crate) fn complete(&mut self) -> bool {
        std::mem::replace(self, Self::Finished) == Self::Pending
    }
}
