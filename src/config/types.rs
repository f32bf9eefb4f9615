// Configuration type definitions

use serde::Deserialize;
use std::time::Duration;

use crate::notification::Timings;
use crate::widgets::popup::Corner;

/// Message box configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub entrance_ms: u64,
    pub display_ms: u64,
    pub exit_ms: u64,
    pub position: Corner,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        let timings = Timings::default();
        NotificationConfig {
            entrance_ms: timings.entrance.as_millis() as u64,
            display_ms: timings.display.as_millis() as u64,
            exit_ms: timings.exit.as_millis() as u64,
            position: Corner::default(),
        }
    }
}

impl NotificationConfig {
    pub fn timings(&self) -> Timings {
        Timings {
            entrance: Duration::from_millis(self.entrance_ms),
            display: Duration::from_millis(self.display_ms),
            exit: Duration::from_millis(self.exit_ms),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub notification: NotificationConfig,
}
