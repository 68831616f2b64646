//! Storage layer for the land register
//!
//! This crate implements the in-memory parcel store with:
//! - ParcelStore: one authoritative FxHashMap of parcels keyed by slot
//! - Ordered indices by (city, address), (region, id) and (owner, acquisition)
//! - ParcelCursor: forward-only reader over an ordered snapshot

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cursor;
pub mod index;
pub mod store;

pub use cursor::ParcelCursor;
pub use index::{OwnerEntry, Seniority, SlotId};
pub use store::ParcelStore;
