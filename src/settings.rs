//! Persisted user settings
//!
//! Settings live in a small string key-value store. The store is injected,
//! so the app persists to disk while tests use an in-memory map.

mod settings_store;
mod theme_preference;

pub use settings_store::{FileStore, KeyValueStore, MemoryStore, settings_path};
pub use theme_preference::{Settings, THEME_KEY, ThemeMode, ThemePreference};
