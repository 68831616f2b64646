//! Core types for the land register
//!
//! This crate defines the vocabulary shared by the storage layer and the
//! public facade:
//! - [`Parcel`]: a single registry entry
//! - [`AddressKey`] / [`RegionKey`]: the two composite keys
//! - [`AcquisitionOrder`]: position of an ownership change in registry history
//! - [`OwnerName`]: case-insensitive owner comparison
//! - [`Error`]: failure taxonomy for register operations

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod owner;
pub mod types;

pub use error::{Error, Result};
pub use owner::OwnerName;
pub use types::{AcquisitionOrder, AddressKey, Parcel, ParcelKey, RegionKey};
