//! Durable key/value storage standing in for browser local storage.
//!
//! `FileStorage` keeps every key in one JSON object file. Writes go through a
//! sibling temp file and a rename so a crash never leaves a half-written file.
//! Values may hold bearer tokens; never log them.

use super::errors::AppError;
use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::{
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::debug;

pub trait LocalStorage: Send + Sync {
    /// # Errors
    /// Returns `AppError::Storage` if the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError>;

    /// # Errors
    /// Returns `AppError::Storage` if the backing store cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Removing a missing key is not an error.
    ///
    /// # Errors
    /// Returns `AppError::Storage` if the backing store cannot be written.
    fn remove_item(&self, key: &str) -> Result<(), AppError>;
}

#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>, AppError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => {
                return Err(AppError::Storage(format!(
                    "Failed to read {}: {err}",
                    self.path.display()
                )));
            }
        };

        if raw.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(AppError::Storage(format!(
                "{} does not contain a JSON object",
                self.path.display()
            ))),
            Err(err) => Err(AppError::Storage(format!(
                "Failed to parse {}: {err}",
                self.path.display()
            ))),
        }
    }

    fn write_all(&self, map: &Map<String, Value>) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| {
                AppError::Storage(format!("Failed to create {}: {err}", parent.display()))
            })?;
        }

        let payload = serde_json::to_vec_pretty(map)
            .map_err(|err| AppError::Serialization(format!("Failed to encode storage: {err}")))?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, payload)
            .map_err(|err| AppError::Storage(format!("Failed to write {}: {err}", tmp.display())))?;
        fs::rename(&tmp, &self.path).map_err(|err| {
            AppError::Storage(format!("Failed to replace {}: {err}", self.path.display()))
        })?;

        debug!("storage written: {}", self.path.display());

        Ok(())
    }
}

impl LocalStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        let _guard = self.lock.lock();
        let map = self.read_all()?;
        Ok(map.get(key).and_then(Value::as_str).map(ToString::to_string))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        let _guard = self.lock.lock();
        let mut map = self.read_all()?;
        map.insert(key.to_string(), Value::String(value.to_string()));
        self.write_all(&map)
    }

    fn remove_item(&self, key: &str) -> Result<(), AppError> {
        let _guard = self.lock.lock();
        let mut map = self.read_all()?;
        if map.remove(key).is_none() {
            return Ok(());
        }
        self.write_all(&map)
    }
}

/// In-memory storage, lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.items.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.items.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), AppError> {
        self.items.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn file_storage_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested").join("storage.json"));
        assert_eq!(storage.get_item("auth_token").unwrap(), None);
        storage.remove_item("auth_token").unwrap();
        assert!(!storage.path().exists());
    }

    #[test]
    fn file_storage_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        FileStorage::new(&path).set_item("auth_token", "abc").unwrap();
        FileStorage::new(&path).set_item("theme", "dark").unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get_item("auth_token").unwrap().as_deref(), Some("abc"));
        assert_eq!(reopened.get_item("theme").unwrap().as_deref(), Some("dark"));

        reopened.remove_item("auth_token").unwrap();
        assert_eq!(FileStorage::new(&path).get_item("auth_token").unwrap(), None);
        assert_eq!(
            FileStorage::new(&path).get_item("theme").unwrap().as_deref(),
            Some("dark")
        );
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn file_storage_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(storage.get_item("auth_token"), Err(AppError::Storage(_))));

        fs::write(&path, "{not json").unwrap();
        assert!(matches!(storage.get_item("auth_token"), Err(AppError::Storage(_))));
    }

    #[test]
    fn memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        storage.set_item("auth_token", "abc").unwrap();
        assert_eq!(storage.get_item("auth_token").unwrap().as_deref(), Some("abc"));
        storage.remove_item("auth_token").unwrap();
        assert_eq!(storage.get_item("auth_token").unwrap(), None);
    }
}
