//! String key/value stores
//!
//! `LocalStore` mirrors the browser `localStorage` contract: string keys,
//! string values, no schema. Two implementations are provided:
//! - `MemoryStore`: process-local, used by tests and `--ephemeral` sessions
//! - `FileStore`: a single JSON object file inside the data directory

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::StorageResult;

/// File name used by `FileStore` inside its data directory
pub const STORE_FILE_NAME: &str = "local_storage.json";

/// Persistent string key/value store
pub trait LocalStore: Send {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()>;

    fn remove_item(&mut self, key: &str) -> StorageResult<()>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl LocalStore for MemoryStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        self.items.remove(key);
        Ok(())
    }
}

/// JSON-file backed store
///
/// The whole map is loaded on open and rewritten on every change.
/// Writes go to a temporary sibling file first and are then renamed
/// over the original.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStore {
    /// Open (or lazily create) the store inside `data_dir`
    pub fn open(data_dir: impl AsRef<Path>) -> StorageResult<Self> {
        let data_dir = data_dir.as_ref();
        fs::create_dir_all(data_dir)?;

        let path = data_dir.join(STORE_FILE_NAME);
        let items = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = ?path, keys = items.len(), "Opened local store");
        Ok(Self { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(&self.items)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl LocalStore for FileStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        if self.items.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}
