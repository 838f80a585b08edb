//! Session key-value storage for session carts.
//!
//! Provides the [`SessionStore`] contract that carts read from and write to,
//! an in-process [`MemoryStore`] backend, and [`Session`] for scoping a shared
//! store to a single user session.
//!
//! # Example
//!
//! ```rust
//! use cart_store::{MemoryStore, SessionStore};
//! use serde_json::json;
//!
//! let store = MemoryStore::new();
//!
//! store.put("wishlist_cart", json!([])).unwrap();
//! assert!(store.has("wishlist_cart").unwrap());
//!
//! let value = store.get_or("missing_cart", json!([])).unwrap();
//! assert_eq!(value, json!([]));
//!
//! store.forget("wishlist_cart").unwrap();
//! assert!(!store.has("wishlist_cart").unwrap());
//! ```

mod error;
mod memory;
mod session;
mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use session::{Session, SessionId};
pub use store::SessionStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{MemoryStore, Session, SessionId, SessionStore, StoreError};
}
