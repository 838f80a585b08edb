//! The session store contract.

use std::sync::Arc;

use serde_json::Value;

use crate::StoreError;

/// A key-value store scoped to a user/request context.
///
/// Values are JSON documents. All methods take `&self`, so implementations
/// hold their state behind interior mutability and several readers/writers
/// (e.g. two carts in the same request) can share one store by reference.
pub trait SessionStore {
    /// Get a value.
    ///
    /// Returns `None` if the key doesn't exist.
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Store a value, replacing any previous value under `key`.
    fn put(&self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Delete a value. Deleting a missing key is not an error.
    fn forget(&self, key: &str) -> Result<(), StoreError>;

    /// Check if a key exists.
    fn has(&self, key: &str) -> Result<bool, StoreError>;

    /// Get a value, or `default` if the key doesn't exist.
    fn get_or(&self, key: &str, default: Value) -> Result<Value, StoreError> {
        Ok(self.get(key)?.unwrap_or(default))
    }
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: Value) -> Result<(), StoreError> {
        (**self).put(key, value)
    }

    fn forget(&self, key: &str) -> Result<(), StoreError> {
        (**self).forget(key)
    }

    fn has(&self, key: &str) -> Result<bool, StoreError> {
        (**self).has(key)
    }
}

impl<S: SessionStore + ?Sized> SessionStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: Value) -> Result<(), StoreError> {
        (**self).put(key, value)
    }

    fn forget(&self, key: &str) -> Result<(), StoreError> {
        (**self).forget(key)
    }

    fn has(&self, key: &str) -> Result<bool, StoreError> {
        (**self).has(key)
    }
}
