//! msgbox library - Animated terminal notifications
//!
//! This library exposes the message box component, the persisted theme
//! preference and the host app for the binary and for testing.

pub mod app;
pub mod config;
pub mod error;
pub mod layout;
pub mod notification;
pub mod settings;
pub mod theme;

#[cfg(test)]
pub mod test_utils;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use notification::{MessageBox, NotificationAttributes, NotificationKind};
