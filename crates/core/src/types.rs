//! Core types for the land register
//!
//! This module defines the fundamental types used throughout the system:
//! - [`Parcel`]: one registered piece of land
//! - [`AddressKey`]: composite key (city, address)
//! - [`RegionKey`]: composite key (region, id)
//! - [`AcquisitionOrder`]: global position of an ownership change

use serde::{Deserialize, Serialize};
use std::fmt;

/// Composite key (city, address)
///
/// Ordered lexicographically: city → address, comparing bytes, so the
/// ordering is case-sensitive.
///
/// # Examples
///
/// ```
/// use landreg_core::AddressKey;
///
/// let plzen = AddressKey::new("Plzen", "Evropska");
/// let prague = AddressKey::new("Prague", "Thakurova");
/// assert!(plzen < prague);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AddressKey {
    /// City the parcel lies in
    pub city: String,
    /// Street address within the city
    pub address: String,
}

impl AddressKey {
    /// Create a new address key
    pub fn new(city: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            address: address.into(),
        }
    }
}

impl fmt::Display for AddressKey {
    /// Display as city/address
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.city, self.address)
    }
}

/// Composite key (region, id)
///
/// Ordered by region, then numerically by id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RegionKey {
    /// Cadastral region
    pub region: String,
    /// Parcel number within the region
    pub id: u64,
}

impl RegionKey {
    /// Create a new region key
    pub fn new(region: impl Into<String>, id: u64) -> Self {
        Self {
            region: region.into(),
            id,
        }
    }
}

impl fmt::Display for RegionKey {
    /// Display as region#id
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.region, self.id)
    }
}

/// Either of the two keys a parcel can be addressed by
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParcelKey {
    /// Lookup by (city, address)
    Address(AddressKey),
    /// Lookup by (region, id)
    Region(RegionKey),
}

impl fmt::Display for ParcelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParcelKey::Address(key) => key.fmt(f),
            ParcelKey::Region(key) => key.fmt(f),
        }
    }
}

impl From<AddressKey> for ParcelKey {
    fn from(key: AddressKey) -> Self {
        ParcelKey::Address(key)
    }
}

impl From<RegionKey> for ParcelKey {
    fn from(key: RegionKey) -> Self {
        ParcelKey::Region(key)
    }
}

/// Position of an ownership change in the register's history
///
/// Drawn from a single counter shared by all parcels, so comparing two
/// orders tells which transfer happened first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AcquisitionOrder(u64);

impl AcquisitionOrder {
    /// First order handed out by a fresh register
    pub const FIRST: AcquisitionOrder = AcquisitionOrder(1);

    /// Wrap a raw counter value
    pub const fn new(value: u64) -> Self {
        AcquisitionOrder(value)
    }

    /// Raw counter value
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// The order that follows this one, or `None` once the counter is spent
    pub const fn checked_next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(AcquisitionOrder(value)),
            None => None,
        }
    }
}

impl fmt::Display for AcquisitionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered parcel
///
/// `owner` keeps the case given at transfer time; an empty owner means the
/// parcel has no owner. `acquired` is `None` until the first ownership
/// change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    /// City the parcel lies in
    pub city: String,
    /// Street address within the city
    pub address: String,
    /// Cadastral region
    pub region: String,
    /// Parcel number within the region
    pub id: u64,
    /// Current owner, empty when unowned
    pub owner: String,
    /// Order of the most recent ownership change
    pub acquired: Option<AcquisitionOrder>,
}

impl Parcel {
    /// Create an unowned parcel
    pub fn new(
        city: impl Into<String>,
        address: impl Into<String>,
        region: impl Into<String>,
        id: u64,
    ) -> Self {
        Self {
            city: city.into(),
            address: address.into(),
            region: region.into(),
            id,
            owner: String::new(),
            acquired: None,
        }
    }

    /// The parcel's (city, address) key
    pub fn address_key(&self) -> AddressKey {
        AddressKey::new(self.city.as_str(), self.address.as_str())
    }

    /// The parcel's (region, id) key
    pub fn region_key(&self) -> RegionKey {
        RegionKey::new(self.region.as_str(), self.id)
    }

    /// True if the parcel currently has a non-empty owner
    pub fn is_owned(&self) -> bool {
        !self.owner.is_empty()
    }
}
