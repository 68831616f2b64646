//! Convenient imports for the land register.
//!
//! ```ignore
//! use landreg::prelude::*;
//!
//! let mut register = LandRegister::new();
//! register.insert("Prague", "Thakurova", "Dejvice", 12345)?;
//! ```

// Main entry points
pub use crate::config::RegisterConfig;
pub use crate::register::{LandRegister, LandRegisterBuilder};
pub use crate::shared::SharedLandRegister;

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use crate::types::{AcquisitionOrder, AddressKey, Parcel, ParcelCursor, ParcelKey, RegionKey};
