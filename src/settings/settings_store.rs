use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::MsgboxError;

const SETTINGS_DIR: &str = "msgbox";
const SETTINGS_FILE: &str = "settings.toml";

/// Durable string key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value. Writes are synchronous: once this returns `Ok` the
    /// value survives a restart.
    fn set(&mut self, key: &str, value: &str) -> Result<(), MsgboxError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), MsgboxError> {
        (**self).set(key, value)
    }
}

/// Store that forgets everything on exit
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), MsgboxError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn settings_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

/// Flat TOML table of strings, rewritten on every `set`.
///
/// No file locking - last writer wins if multiple instances run simultaneously.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at the platform settings path
    pub fn open_default() -> Result<Self, MsgboxError> {
        let path = settings_path().ok_or(MsgboxError::NoSettingsDir)?;
        Ok(Self::open(path))
    }

    /// Open a store backed by `path`.
    ///
    /// A missing, unreadable or malformed file reads as empty; it is
    /// replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match read_entries(&path) {
            Ok(entries) => entries,
            Err(MsgboxError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                log::warn!("Ignoring settings file {:?}: {}", path, e);
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self) -> Result<(), MsgboxError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string(&self.entries)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), MsgboxError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.write()
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, String>, MsgboxError> {
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("theme"), None);

        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme"), Some("light".to_string()));
    }

    #[test]
    fn test_boxed_store_delegates() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k"), Some("v".to_string()));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path().join("settings.toml"));
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn test_file_store_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let mut store = FileStore::open(&path);
        store.set("theme", "light").unwrap();
        assert!(path.exists());

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("theme"), Some("light".to_string()));
    }

    #[test]
    fn test_file_store_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "other = \"kept\"\n").unwrap();

        let mut store = FileStore::open(&path);
        store.set("theme", "dark").unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("other"), Some("kept".to_string()));
        assert_eq!(reopened.get("theme"), Some("dark".to_string()));
    }

    #[test]
    fn test_file_store_malformed_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "theme = light\n[broken").unwrap();

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("theme"), None);

        // Next write replaces the broken file
        store.set("theme", "light").unwrap();
        assert_eq!(FileStore::open(&path).get("theme"), Some("light".to_string()));
    }

    #[test]
    fn test_file_store_write_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        // Parent "directory" is a regular file
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let mut store = FileStore::open(blocker.join("settings.toml"));
        assert!(store.set("theme", "light").is_err());
    }

    #[test]
    fn test_settings_path_ends_with_app_file() {
        if let Some(path) = settings_path() {
            assert!(path.ends_with("msgbox/settings.toml"));
        }
    }
}
