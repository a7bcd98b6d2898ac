//! Platform completion acknowledgement.

#[cfg(target_os = "ios")]
/// iOS backend, resolved by the host app's notification module.
pub mod apple;
#[cfg(target_os = "ios")]
pub use apple::NativeCompletionSink;

#[cfg(not(target_os = "ios"))]
/// Backend for platforms without background fetch completion handlers.
pub mod stub;
#[cfg(not(target_os = "ios"))]
pub use stub::NativeCompletionSink;
