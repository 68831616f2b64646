//! Error types for register operations.
//!
//! Every failure is local and leaves the register unchanged, so none of
//! these variants is fatal.

use crate::types::ParcelKey;
use thiserror::Error;

/// Failure of a register operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No parcel is registered under the key
    #[error("parcel not found: {key}")]
    NotFound {
        /// The key that matched nothing
        key: ParcelKey,
    },

    /// A parcel already occupies one of the keys of the insert
    #[error("parcel already registered: {key}")]
    Conflict {
        /// The key that is already taken
        key: ParcelKey,
    },

    /// The requested owner already holds the parcel
    #[error("{owner:?} already owns parcel {key}")]
    NoOpTransfer {
        /// Parcel whose transfer was refused
        key: ParcelKey,
        /// Owner text as requested by the caller
        owner: String,
    },

    /// The acquisition counter has no order left to hand out
    #[error("no acquisition order left for transfer of {key}")]
    OrdersExhausted {
        /// Parcel whose transfer was refused
        key: ParcelKey,
    },
}

/// Result type for register operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Key the failed operation was addressed to.
    pub fn key(&self) -> &ParcelKey {
        match self {
            Error::NotFound { key }
            | Error::Conflict { key }
            | Error::NoOpTransfer { key, .. }
            | Error::OrdersExhausted { key } => key,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Check if this is a key conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::Conflict { .. })
    }

    /// Check if this is a refused no-op transfer.
    pub fn is_noop(&self) -> bool {
        matches!(self, Error::NoOpTransfer { .. })
    }

    /// Check if the acquisition counter ran out.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Error::OrdersExhausted { .. })
    }
}
