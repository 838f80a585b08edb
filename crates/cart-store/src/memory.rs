//! In-process session store.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

use crate::{SessionStore, StoreError};

/// Session store held in process memory.
///
/// Values are kept as serialized JSON bytes, so every read hands out an
/// independent copy of what was written.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all keys in the store.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use cart_store::{MemoryStore, SessionStore};
    /// let store = MemoryStore::new();
    /// store.put("phpcart_cart", serde_json::json!([])).unwrap();
    /// assert_eq!(store.keys().unwrap(), vec!["phpcart_cart".to_string()]);
    /// ```
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        let entries = self.entries.read().map_err(poisoned)?;
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }

    /// Number of stored keys.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.entries.read().map_err(poisoned)?.len())
    }

    /// Check if the store holds no keys.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let entries = self.entries.read().map_err(poisoned)?;
        match entries.get(key) {
            Some(bytes) => Ok(Some(serde_json::from_slice(bytes)?)),
            None => Ok(None),
        }
    }

    fn put(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(&value)?;
        self.entries
            .write()
            .map_err(poisoned)?
            .insert(key.to_string(), bytes);
        Ok(())
    }

    fn forget(&self, key: &str) -> Result<(), StoreError> {
        self.entries.write().map_err(poisoned)?.remove(key);
        Ok(())
    }

    fn has(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.entries.read().map_err(poisoned)?.contains_key(key))
    }
}

fn poisoned<T>(e: std::sync::PoisonError<T>) -> StoreError {
    StoreError::Store(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("nope").unwrap(), None);
        assert!(!store.has("nope").unwrap());
    }

    #[test]
    fn test_put_and_get() {
        let store = MemoryStore::new();
        store.put("k", json!([{"id": 1}])).unwrap();

        assert!(store.has("k").unwrap());
        assert_eq!(store.get("k").unwrap(), Some(json!([{"id": 1}])));
    }

    #[test]
    fn test_put_overwrites() {
        let store = MemoryStore::new();
        store.put("k", json!(1)).unwrap();
        store.put("k", json!(2)).unwrap();

        assert_eq!(store.get("k").unwrap(), Some(json!(2)));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_get_or_default() {
        let store = MemoryStore::new();
        assert_eq!(store.get_or("k", json!([])).unwrap(), json!([]));

        store.put("k", json!(["x"])).unwrap();
        assert_eq!(store.get_or("k", json!([])).unwrap(), json!(["x"]));
    }

    #[test]
    fn test_forget_is_idempotent() {
        let store = MemoryStore::new();
        store.put("k", json!(null)).unwrap();

        store.forget("k").unwrap();
        store.forget("k").unwrap();

        assert!(!store.has("k").unwrap());
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_null_value_still_exists() {
        let store = MemoryStore::new();
        store.put("k", Value::Null).unwrap();

        assert!(store.has("k").unwrap());
        assert_eq!(store.get("k").unwrap(), Some(Value::Null));
    }

    #[test]
    fn test_keys_sorted() {
        let store = MemoryStore::new();
        store.put("b", json!(1)).unwrap();
        store.put("a", json!(2)).unwrap();

        assert_eq!(store.keys().unwrap(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_shared_by_reference() {
        let store = MemoryStore::new();
        let first = &store;
        let second = &store;

        first.put("k", json!("v")).unwrap();
        assert_eq!(second.get("k").unwrap(), Some(json!("v")));
    }
}
