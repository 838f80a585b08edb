//! Per-user sessions over a shared store.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{SessionStore, StoreError};

/// Identifies one user's session within a shared store.
///
/// Serialized as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Create a new session ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a random ID of the form `sess_<24 url-safe base64 chars>`.
    pub fn generate() -> Self {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        use rand::Rng;

        let bytes: [u8; 18] = rand::thread_rng().gen();
        Self(format!("sess_{}", URL_SAFE_NO_PAD.encode(bytes)))
    }

    /// Get the session ID as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A [`SessionStore`] scoped to one session.
///
/// Every key is namespaced under the session ID, so carts of different
/// users sharing one backing store never see each other's entries.
///
/// # Example
///
/// ```rust
/// use cart_store::{MemoryStore, Session, SessionId, SessionStore};
/// use serde_json::json;
///
/// let backend = MemoryStore::new();
/// let alice = Session::new(SessionId::from("alice"), &backend);
/// let bob = Session::new(SessionId::from("bob"), &backend);
///
/// alice.put("phpcart_cart", json!([])).unwrap();
/// assert!(alice.has("phpcart_cart").unwrap());
/// assert!(!bob.has("phpcart_cart").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Session<S> {
    id: SessionId,
    store: S,
}

impl<S: SessionStore> Session<S> {
    /// Attach to an existing session.
    pub fn new(id: SessionId, store: S) -> Self {
        Self { id, store }
    }

    /// Start a fresh session with a generated ID.
    pub fn start(store: S) -> Self {
        Self::new(SessionId::generate(), store)
    }

    /// The session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn session_key(&self, key: &str) -> String {
        format!("session:{}:{}", self.id, key)
    }
}

impl<S: SessionStore> SessionStore for Session<S> {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        self.store.get(&self.session_key(key))
    }

    fn put(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.store.put(&self.session_key(key), value)
    }

    fn forget(&self, key: &str) -> Result<(), StoreError> {
        self.store.forget(&self.session_key(key))
    }

    fn has(&self, key: &str) -> Result<bool, StoreError> {
        self.store.has(&self.session_key(key))
    }
}
