//! File-backed key-value store.
//!
//! All keys live in a single JSON object (`store.json` in the data
//! directory). The document is read once on open and rewritten on every
//! change.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::StoreError;
use crate::traits::KeyValueStore;

/// The store file name inside the data directory.
pub const STORE_FILE: &str = "store.json";

/// Key-value store persisted as one JSON document.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store in `data_dir`.
    ///
    /// A missing or unreadable file yields an empty store; the file is
    /// created on the first write.
    pub fn open(data_dir: &Path) -> Self {
        let path = data_dir.join(STORE_FILE);
        let values = Self::read_document(&path);
        tracing::debug!(path = %path.display(), keys = values.len(), "Opened store");
        Self {
            path,
            values: Mutex::new(values),
        }
    }

    /// Path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(path: &Path) -> BTreeMap<String, String> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(_) => return BTreeMap::new(),
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Store file is malformed, starting empty");
                BTreeMap::new()
            }
        }
    }

    fn write_document(&self, values: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let file = File::create(&self.path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, values)?;
        writer.flush().map_err(io_err)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.values.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.lock();
        values.insert(key.to_string(), value.to_string());
        self.write_document(&values)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut values = self.lock();
        if values.remove(key).is_some() {
            self.write_document(&values)?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut values = self.lock();
        values.clear();
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })?;
        }
        Ok(())
    }
}
