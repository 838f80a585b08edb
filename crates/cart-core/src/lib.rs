//! Session-backed shopping cart.
//!
//! A cart is a named, ordered collection of line items (id, quantity, price
//! and free-form attributes) kept in a [`SessionStore`](cart_store::SessionStore):
//!
//! - **Items**: [`Item`] records keyed by [`ItemId`], validated on insertion
//! - **Collection**: [`ItemCollection`], an insertion-ordered working set with
//!   count and sum queries
//! - **Cart**: [`Cart`], which loads the collection from the session on every
//!   call, applies the operation, and writes it back
//!
//! # Example
//!
//! ```rust
//! use cart_core::prelude::*;
//! use cart_store::MemoryStore;
//!
//! let session = MemoryStore::new();
//!
//! let cart = Cart::new(&session);
//! cart.add(Item::new(1, 2, 10.0).with_attribute("name", "Mug")).unwrap();
//! cart.add(Item::new("tea", 1, 4.5)).unwrap();
//!
//! let mut wishlist = Cart::new(&session);
//! wishlist.named("wishlist").unwrap();
//! wishlist.copy(&cart).unwrap();
//!
//! assert_eq!(wishlist.total().unwrap(), 24.5);
//! assert_eq!(wishlist.total_quantity().unwrap(), 3);
//! ```

pub mod cart;
pub mod collection;
pub mod config;
pub mod error;
pub mod ids;
pub mod item;

pub use cart::{Cart, CartSource, CartSummary};
pub use collection::{ItemCollection, ItemMap};
pub use config::CartConfig;
pub use error::{CartError, ErrorKind};
pub use ids::ItemId;
pub use item::{Item, ItemPatch};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, CartSource, CartSummary};
    pub use crate::collection::{ItemCollection, ItemMap};
    pub use crate::config::CartConfig;
    pub use crate::error::{CartError, ErrorKind};
    pub use crate::ids::ItemId;
    pub use crate::item::{Item, ItemPatch};
}
