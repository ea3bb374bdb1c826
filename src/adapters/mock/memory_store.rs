//! In-memory key-value store for testing.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::error::StoreError;
use crate::traits::KeyValueStore;

/// In-memory store.
///
/// Clones share the same map, so a test can keep a handle and inspect what
/// the holders persisted.
///
/// # Example
///
/// ```
/// use agrodash::adapters::mock::InMemoryStore;
/// use agrodash::traits::KeyValueStore;
///
/// let store = InMemoryStore::new().with_value("language", "hi");
/// assert_eq!(store.get("language").as_deref(), Some("hi"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    values: Arc<Mutex<BTreeMap<String, String>>>,
    fail_writes: Arc<Mutex<bool>>,
    write_count: Arc<Mutex<usize>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value before handing the store to the code under test.
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Make every subsequent write fail.
    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().unwrap() = fail;
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        *self.write_count.lock().unwrap()
    }

    pub fn keys(&self) -> Vec<String> {
        self.values.lock().unwrap().keys().cloned().collect()
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        if *self.fail_writes.lock().unwrap() {
            return Err(StoreError::Unavailable("writes disabled".to_string()));
        }
        *self.write_count.lock().unwrap() += 1;
        Ok(())
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check_writable()?;
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.check_writable()?;
        self.values.lock().unwrap().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.check_writable()?;
        self.values.lock().unwrap().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_values() {
        let store = InMemoryStore::new();
        let handle = store.clone();
        store.set("theme", "dark").unwrap();
        assert_eq!(handle.get("theme").as_deref(), Some("dark"));
        assert_eq!(handle.write_count(), 1);
    }

    #[test]
    fn test_fail_writes() {
        let store = InMemoryStore::new().with_value("theme", "light");
        store.set_fail_writes(true);
        assert!(store.set("theme", "dark").is_err());
        assert_eq!(store.get("theme").as_deref(), Some("light"));
        assert_eq!(store.write_count(), 0);
    }
}
