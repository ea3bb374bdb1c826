//! Key-value store abstraction.
//!
//! Mirrors the browser-local-storage contract the dashboard was designed
//! around: string keys, string values, no schema versioning.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;

/// Persisted string key-value storage.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. Missing keys return `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a value. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Delete every value.
    fn clear(&self) -> Result<(), StoreError>;
}

/// Read and decode a JSON value.
///
/// Missing keys and malformed JSON both return `None`; callers substitute
/// their hardcoded default.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "Ignoring malformed stored value");
            None
        }
    }
}

/// Encode a value as JSON and write it.
pub fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::InMemoryStore;

    #[test]
    fn test_load_json_missing_key() {
        let store = InMemoryStore::new();
        let value: Option<Vec<u32>> = load_json(&store, "nothing");
        assert!(value.is_none());
    }

    #[test]
    fn test_load_json_malformed_value_falls_back() {
        let store = InMemoryStore::new();
        store.set("numbers", "[1, 2,").unwrap();
        let value: Option<Vec<u32>> = load_json(&store, "numbers");
        assert!(value.is_none());
    }

    #[test]
    fn test_save_then_load_json() {
        let store = InMemoryStore::new();
        save_json(&store, "numbers", &vec![1u32, 2, 3]).unwrap();
        assert_eq!(store.get("numbers").as_deref(), Some("[1,2,3]"));
        let value: Option<Vec<u32>> = load_json(&store, "numbers");
        assert_eq!(value, Some(vec![1, 2, 3]));
    }
}
