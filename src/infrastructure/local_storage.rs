// src/infrastructure/local_storage.rs
use crate::application::KeyValueStorage;
use crate::domain::DomainError;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, instrument};

type Items = BTreeMap<String, String>;

/// Key/value items kept in one JSON object on disk.
///
/// Every `set_item` rewrites the whole file through a temp file in the same
/// directory, so readers never see a half-written file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_items(&self) -> Result<Items, DomainError> {
        if !self.path.exists() {
            return Ok(Items::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| {
            DomainError::Storage(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            DomainError::Storage(format!("Malformed storage file {}: {}", self.path.display(), e))
        })
    }

    fn write_items(&self, items: &Items) -> Result<(), DomainError> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| {
            DomainError::Storage(format!("Failed to create {}: {}", dir.display(), e))
        })?;

        let encoded = serde_json::to_string_pretty(items)
            .map_err(|e| DomainError::Storage(format!("Failed to encode storage: {}", e)))?;

        let mut tmp = NamedTempFile::new_in(&dir)
            .map_err(|e| DomainError::Storage(format!("Failed to create temp file: {}", e)))?;
        tmp.write_all(encoded.as_bytes())
            .map_err(|e| DomainError::Storage(format!("Failed to write temp file: {}", e)))?;
        tmp.persist(&self.path).map_err(|e| {
            DomainError::Storage(format!("Failed to replace {}: {}", self.path.display(), e))
        })?;
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    #[instrument(level = "trace", skip(self))]
    fn get_item(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.read_items()?.remove(key))
    }

    #[instrument(level = "debug", skip(self, value))]
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        // Unreadable contents are replaced.
        let mut items = self.read_items().unwrap_or_else(|e| {
            debug!(error = %e, "Discarding unreadable storage file");
            Items::new()
        });
        items.insert(key.to_string(), value.to_string());
        self.write_items(&items)?;
        debug!(path = ?self.path, "Persisted storage item");
        Ok(())
    }
}

/// Storage that lives for the process only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Items,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.items.insert(key.to_string(), value.to_string());
        storage
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
