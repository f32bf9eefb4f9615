//! Tests for theme_preference

use super::*;
use crate::settings::{FileStore, MemoryStore};
use proptest::prelude::*;
use tempfile::TempDir;

/// Store whose writes always fail
struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), MsgboxError> {
        Err(MsgboxError::NoSettingsDir)
    }
}

#[test]
fn test_no_stored_value_means_dark_and_checked() {
    let settings = Settings::new(MemoryStore::new());
    let preference = ThemePreference::on_page_load(&settings);
    assert_eq!(preference.mode(), ThemeMode::Dark);
    assert!(preference.toggle_checked());
}

#[test]
fn test_stored_light_means_light_and_unchecked() {
    let settings = Settings::new(MemoryStore::new().with_entry(THEME_KEY, "light"));
    let preference = ThemePreference::on_page_load(&settings);
    assert_eq!(preference.mode(), ThemeMode::Light);
    assert!(!preference.toggle_checked());
}

#[test]
fn test_unrecognized_stored_values_mean_dark() {
    for value in ["dark", "Light", "LIGHT", "", "blue", " light"] {
        let settings = Settings::new(MemoryStore::new().with_entry(THEME_KEY, value));
        assert_eq!(
            ThemePreference::on_page_load(&settings).mode(),
            ThemeMode::Dark,
            "value {:?}",
            value
        );
    }
}

#[test]
fn test_toggle_flips_and_persists() {
    let mut settings = Settings::new(MemoryStore::new());
    let mut preference = ThemePreference::on_page_load(&settings);

    assert_eq!(preference.toggle(&mut settings), ThemeMode::Light);
    assert!(!preference.toggle_checked());
    assert_eq!(settings.store().get(THEME_KEY), Some("light".to_string()));

    assert_eq!(preference.toggle(&mut settings), ThemeMode::Dark);
    assert!(preference.toggle_checked());
    assert_eq!(settings.store().get(THEME_KEY), Some("dark".to_string()));
}

#[test]
fn test_reload_reflects_last_toggle() {
    let mut settings = Settings::new(MemoryStore::new());
    let mut preference = ThemePreference::on_page_load(&settings);
    preference.toggle(&mut settings);

    let reloaded = ThemePreference::on_page_load(&Settings::new(settings.into_store()));
    assert_eq!(reloaded.mode(), ThemeMode::Light);
}

#[test]
fn test_reload_from_file_reflects_last_toggle() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");

    let mut settings = Settings::new(FileStore::open(&path));
    let mut preference = ThemePreference::on_page_load(&settings);
    assert_eq!(preference.mode(), ThemeMode::Dark);
    preference.toggle(&mut settings);

    let reloaded = ThemePreference::on_page_load(&Settings::new(FileStore::open(&path)));
    assert_eq!(reloaded.mode(), ThemeMode::Light);
}

#[test]
fn test_toggle_with_failing_store_still_flips() {
    let mut settings = Settings::new(ReadOnlyStore);
    let mut preference = ThemePreference::on_page_load(&settings);

    assert_eq!(preference.toggle(&mut settings), ThemeMode::Light);
    assert_eq!(preference.mode(), ThemeMode::Light);
}

#[test]
fn test_theme_mode_strings() {
    assert_eq!(ThemeMode::Light.to_string(), "light");
    assert_eq!(ThemeMode::Dark.to_string(), "dark");
    assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    assert_eq!(ThemeMode::from_stored(None), ThemeMode::Dark);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// After any number of toggles, the applied mode, the toggle control
    /// and a fresh reload all agree.
    #[test]
    fn prop_toggle_sequence_persists(toggles in 0usize..12, start_light in any::<bool>()) {
        let store = if start_light {
            MemoryStore::new().with_entry(THEME_KEY, "light")
        } else {
            MemoryStore::new()
        };
        let mut settings = Settings::new(store);
        let mut preference = ThemePreference::on_page_load(&settings);

        for _ in 0..toggles {
            preference.toggle(&mut settings);
        }

        let start = if start_light { ThemeMode::Light } else { ThemeMode::Dark };
        let expected = if toggles % 2 == 0 { start } else { start.toggled() };
        prop_assert_eq!(preference.mode(), expected);
        prop_assert_eq!(preference.toggle_checked(), expected == ThemeMode::Dark);

        let reloaded = ThemePreference::on_page_load(&settings);
        prop_assert_eq!(reloaded.mode(), expected);
    }
}
