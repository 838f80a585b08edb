//! Store error types.

use thiserror::Error;

/// Errors that can occur when using a session store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to serialize or deserialize a stored value.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failed to perform store operation.
    #[error("Store operation failed: {0}")]
    Store(String),
}
