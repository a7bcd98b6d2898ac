//! # Pushkit
//!
//! Push notification handling for apps built with WaterUI.
//!
//! The native layer hands received payloads to Rust; pushkit turns them into
//! typed records and reports background processing results back to the OS.
//!
//! ## Features
//!
//! - `notification`: received notification parsing and completion
//!   acknowledgement (enabled by default).
//!
//! Use the `full` feature to enable everything.
//!
//! ## Example
//!
//! ```toml
//! [dependencies]
//! pushkit = { version = "0.1", features = ["notification"] }
//! ```
//!
//! ```rust
//! # #[cfg(feature = "notification")]
//! # {
//! use pushkit::notification::{RemoteNotification, RemoteNotificationResult};
//!
//! fn on_background_push(json: &str) {
//!     if let Ok(mut notification) = RemoteNotification::from_json(json) {
//!         println!("thread: {:?}", notification.thread());
//!         notification.finish(Some(RemoteNotificationResult::NewData));
//!     }
//! }
//! # }
//! ```

#[cfg(feature = "notification")]
pub use pushkit_notification as notification;
