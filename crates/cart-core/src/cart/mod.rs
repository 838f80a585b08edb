//! Session-backed shopping cart.
//!
//! Contains the cart façade, copy sources, and cart summaries.

mod cart;
mod summary;

pub use cart::{Cart, CartSource};
pub use summary::CartSummary;
