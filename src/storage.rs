//! Durable string key-value storage for theme state.
//!
//! The store mirrors the browser's origin-scoped storage: string keys, string
//! values, no schema. Two backends are provided:
//! - [`MemoryStore`] keeps everything in a `HashMap` (tests, in-memory fallback)
//! - [`FileStore`] keeps a JSON object on disk and rewrites it on every write

use crate::error::Result;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Storage key holding `"light"` or `"dark"`.
pub const THEME_KEY: &str = "theme";
/// Storage key holding the base accent color.
pub const PRIMARY_COLOR_KEY: &str = "primaryColor";
/// Storage key holding the dark accent shade.
pub const PRIMARY_DARK_COLOR_KEY: &str = "primaryDarkColor";
/// Storage key holding the light accent shade.
pub const PRIMARY_LIGHT_COLOR_KEY: &str = "primaryLightColor";

/// A durable string-keyed, string-valued store.
///
/// Reads and writes may fail (quota, disabled storage, I/O); callers decide
/// whether a failure is fatal.
pub trait KeyValueStore {
    /// Returns the value for `key`, or `None` if absent.
    fn get_string(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_string(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get_string(&self, key: &str) -> Result<Option<String>> {
        (**self).get_string(key)
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set_string(key, value)
    }
}

/// In-memory store. Never fails.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_string(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.get(key).cloned())
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<()> {
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store persisting a flat JSON object.
///
/// The whole file is rewritten on every [`set_string`](KeyValueStore::set_string);
/// theme state is four short keys, so there is nothing to batch.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    data: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let data = if path.exists() {
            let text = fs::read_to_string(&path)?;
            if text.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&text)?
            }
        } else {
            BTreeMap::new()
        };

        debug!(path = %path.display(), keys = data.len(), "opened theme store");
        Ok(Self { path, data })
    }

    /// Default location: `<data dir>/sitetheme/storage.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("sitetheme").join("storage.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_file(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_string(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.get(key).cloned())
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<()> {
        self.data.insert(key.to_string(), value.to_string());
        self.write_file()
    }
}
