//! Unified error types for the land register.
//!
//! This module provides the error type returned by the public API. It wraps
//! the storage-level errors and adds configuration failures.

use landreg_core::ParcelKey;
use thiserror::Error;

/// All land register errors.
///
/// Every variant describes a refused operation; the register is left exactly
/// as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No parcel is registered under the key
    #[error("not found: {0}")]
    NotFound(ParcelKey),

    /// Insert collided with an existing parcel
    #[error("conflict: {0} is already registered")]
    Conflict(ParcelKey),

    /// The requested owner already holds the parcel
    #[error("no-op transfer: {owner:?} already owns {key}")]
    NoOpTransfer {
        /// Parcel whose transfer was refused
        key: ParcelKey,
        /// Owner as requested
        owner: String,
    },

    /// No acquisition order is left for the transfer
    #[error("orders exhausted: cannot transfer {0}")]
    OrdersExhausted(ParcelKey),

    /// Configuration rejected by the builder
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for land register operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this is a key conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::Conflict(_))
    }

    /// Check if this is a refused no-op transfer.
    pub fn is_noop(&self) -> bool {
        matches!(self, Error::NoOpTransfer { .. })
    }

    /// Check if the acquisition counter ran out.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Error::OrdersExhausted(_))
    }
}

// Convert from storage-level errors
impl From<landreg_core::Error> for Error {
    fn from(e: landreg_core::Error) -> Self {
        use landreg_core::Error as CoreError;
        match e {
            CoreError::NotFound { key } => Error::NotFound(key),
            CoreError::Conflict { key } => Error::Conflict(key),
            CoreError::NoOpTransfer { key, owner } => Error::NoOpTransfer { key, owner },
            CoreError::OrdersExhausted { key } => Error::OrdersExhausted(key),
        }
    }
}
