//! # Land Register
//!
//! In-memory register of real-estate parcels.
//!
//! Every parcel is identified by two independent keys, (city, address) and
//! (region, id). The register supports insertion, deletion, ownership
//! transfer and ordered enumeration through snapshot cursors.
//!
//! ## Quick Start
//!
//! ```ignore
//! use landreg::prelude::*;
//!
//! let mut register = LandRegister::new();
//! register.insert("Prague", "Thakurova", "Dejvice", 12345)?;
//! register.insert("Plzen", "Evropska", "Plzen mesto", 78901)?;
//!
//! register.transfer_by_address("Prague", "Thakurova", "CVUT")?;
//! assert_eq!(register.owner_by_region("Dejvice", 12345)?, "CVUT");
//!
//! let mut cursor = register.list_by_address();
//! while !cursor.at_end() {
//!     println!("{} {} -> {:?}", cursor.city(), cursor.address(), cursor.owner());
//!     cursor.advance();
//! }
//! ```
//!
//! ## Views
//!
//! - [`LandRegister::list_by_address`] - all parcels by (city, address)
//! - [`LandRegister::list_by_region`] - all parcels by (region, id)
//! - [`LandRegister::list_by_owner`] - one owner's parcels, oldest acquisition first
//!
//! Cursors copy the parcels they walk; later mutations never show up in a
//! cursor that already exists.

#![warn(missing_docs)]

mod config;
mod error;
mod register;
mod shared;
mod types;

pub mod prelude;

// Re-export main entry points
pub use config::RegisterConfig;
pub use error::{Error, Result};
pub use register::{LandRegister, LandRegisterBuilder};
pub use shared::SharedLandRegister;

// Re-export types
pub use types::*;
