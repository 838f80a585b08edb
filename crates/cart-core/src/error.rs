//! Cart error types.

use crate::ids::ItemId;
use cart_store::StoreError;
use thiserror::Error;

/// Errors that can occur in cart operations.
#[derive(Error, Debug)]
pub enum CartError {
    /// Bad argument, e.g. an empty cart name.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Item payload failed shape or range checks.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Update payload carried no item id.
    #[error("id is required")]
    MissingItemId,

    /// Item not in cart.
    #[error("There is no item in shopping cart with id: {0}")]
    ItemNotInCart(ItemId),

    /// Copy source has no session entry.
    #[error("Cart does not exist: {0}")]
    CartNotFound(String),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in quantity calculation")]
    Overflow,

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Session store error.
    #[error("Session store error: {0}")]
    Store(#[from] StoreError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Broad category of a [`CartError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed an unusable argument.
    Argument,
    /// An item payload is malformed.
    Validation,
    /// The operation conflicts with the cart's contents.
    Domain,
    /// The session store or its data failed.
    Store,
}

impl CartError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CartError::InvalidArgument(_) | CartError::Config(_) => ErrorKind::Argument,
            CartError::Validation(_) | CartError::QuantityExceedsLimit(..) => {
                ErrorKind::Validation
            }
            CartError::MissingItemId
            | CartError::ItemNotInCart(_)
            | CartError::CartNotFound(_)
            | CartError::Overflow => ErrorKind::Domain,
            CartError::Store(_) | CartError::Serialization(_) => ErrorKind::Store,
        }
    }
}

impl From<serde_json::Error> for CartError {
    fn from(e: serde_json::Error) -> Self {
        CartError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(CartError::MissingItemId.to_string(), "id is required");
        assert_eq!(
            CartError::ItemNotInCart(ItemId::from(7)).to_string(),
            "There is no item in shopping cart with id: 7"
        );
        assert_eq!(
            CartError::CartNotFound("wishlist".into()).to_string(),
            "Cart does not exist: wishlist"
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(
            CartError::InvalidArgument("x".into()).kind(),
            ErrorKind::Argument
        );
        assert_eq!(CartError::Validation("x".into()).kind(), ErrorKind::Validation);
        assert_eq!(CartError::MissingItemId.kind(), ErrorKind::Domain);
        assert_eq!(CartError::CartNotFound("x".into()).kind(), ErrorKind::Domain);
        assert_eq!(
            CartError::Store(StoreError::Store("down".into())).kind(),
            ErrorKind::Store
        );
    }
}
