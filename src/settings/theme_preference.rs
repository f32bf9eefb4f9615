//! Light/dark theme preference
//!
//! Read once at startup, written back synchronously on every toggle.

use std::fmt;

use super::settings_store::KeyValueStore;
use crate::error::MsgboxError;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Only an exact `"light"` selects light mode
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed access to the settings store
pub struct Settings<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Settings<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load(&self) -> ThemeMode {
        ThemeMode::from_stored(self.store.get(THEME_KEY).as_deref())
    }

    pub fn save(&mut self, mode: ThemeMode) -> Result<(), MsgboxError> {
        self.store.set(THEME_KEY, mode.as_str())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

/// The mode applied to the page, and the state of its toggle control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreference {
    mode: ThemeMode,
}

impl ThemePreference {
    /// Read the persisted value. Absent or unrecognized values mean dark.
    pub fn on_page_load<S: KeyValueStore>(settings: &Settings<S>) -> Self {
        let mode = settings.load();
        log::debug!("theme preference loaded: {}", mode);
        Self { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// The toggle control is checked in dark mode
    pub fn toggle_checked(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    /// Flip the applied mode and persist it.
    ///
    /// A failed write is logged; the applied mode flips regardless.
    pub fn toggle<S: KeyValueStore>(&mut self, settings: &mut Settings<S>) -> ThemeMode {
        self.mode = self.mode.toggled();
        if let Err(e) = settings.save(self.mode) {
            log::warn!("Failed to persist theme preference: {}", e);
        }
        self.mode
    }
}

#[cfg(test)]
#[path = "theme_preference_tests.rs"]
mod theme_preference_tests;
