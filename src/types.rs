//! Public types for the land register API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Parcel and keys
pub use landreg_core::Parcel;
pub use landreg_core::{AddressKey, ParcelKey, RegionKey};

// Ownership
pub use landreg_core::AcquisitionOrder;
pub use landreg_core::OwnerName;

// Snapshot cursor
pub use landreg_storage::ParcelCursor;
