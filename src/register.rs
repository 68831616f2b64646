//! Main entry point for the land register.
//!
//! This module provides the `LandRegister` struct, the primary entry point
//! for all register operations, and its builder.

use crate::config::RegisterConfig;
use crate::error::Result;
use landreg_core::{AcquisitionOrder, Parcel, ParcelKey};
use landreg_storage::{ParcelCursor, ParcelStore};
use tracing::debug;

/// The land register.
///
/// Every parcel can be addressed by (city, address) or by (region, id).
/// Lookups on those keys are case-sensitive; matching on owners is not.
///
/// # Example
///
/// ```ignore
/// use landreg::prelude::*;
///
/// let mut register = LandRegister::new();
/// register.insert("Prague", "Thakurova", "Dejvice", 12345)?;
/// register.transfer_by_address("Prague", "Thakurova", "CVUT")?;
///
/// assert_eq!(register.owner_by_region("Dejvice", 12345)?, "CVUT");
/// assert_eq!(register.count_by_owner("cvut"), 1);
/// ```
#[derive(Debug, Default)]
pub struct LandRegister {
    store: ParcelStore,
}

impl LandRegister {
    /// Create an empty register with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for register configuration.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let register = LandRegister::builder()
    ///     .with_capacity(10_000)
    ///     .build()?;
    /// ```
    pub fn builder() -> LandRegisterBuilder {
        LandRegisterBuilder::new()
    }

    /// Number of registered parcels.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if no parcel is registered.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Order the next successful transfer will receive.
    pub fn next_acquisition(&self) -> AcquisitionOrder {
        self.store.next_acquisition()
    }

    /// Register a new parcel with no owner.
    ///
    /// Fails with [`Error::Conflict`](crate::Error::Conflict) if
    /// (city, address) or (region, id) is already registered.
    pub fn insert(&mut self, city: &str, address: &str, region: &str, id: u64) -> Result<()> {
        Ok(self.store.insert(city, address, region, id)?)
    }

    /// Remove the parcel at (city, address), returning it.
    pub fn remove_by_address(&mut self, city: &str, address: &str) -> Result<Parcel> {
        Ok(self.store.remove_by_address(city, address)?)
    }

    /// Remove the parcel at (region, id), returning it.
    pub fn remove_by_region(&mut self, region: &str, id: u64) -> Result<Parcel> {
        Ok(self.store.remove_by_region(region, id)?)
    }

    /// Remove every parcel. Acquisition orders keep counting up.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Look up a parcel by either key.
    pub fn get(&self, key: &ParcelKey) -> Result<&Parcel> {
        Ok(self.store.get(key)?)
    }

    /// Owner of the parcel at (city, address); empty when unowned.
    pub fn owner_by_address(&self, city: &str, address: &str) -> Result<&str> {
        Ok(self.store.owner_by_address(city, address)?)
    }

    /// Owner of the parcel at (region, id); empty when unowned.
    pub fn owner_by_region(&self, region: &str, id: u64) -> Result<&str> {
        Ok(self.store.owner_by_region(region, id)?)
    }

    /// Transfer the parcel at (city, address) to `owner`.
    ///
    /// Returns the acquisition order assigned to this transfer. Fails with
    /// [`Error::NoOpTransfer`](crate::Error::NoOpTransfer) when `owner`
    /// already holds the parcel, ignoring case, and with
    /// [`Error::OrdersExhausted`](crate::Error::OrdersExhausted) once the
    /// acquisition counter is spent.
    pub fn transfer_by_address(
        &mut self,
        city: &str,
        address: &str,
        owner: &str,
    ) -> Result<AcquisitionOrder> {
        Ok(self.store.transfer_by_address(city, address, owner)?)
    }

    /// Transfer the parcel at (region, id) to `owner`.
    pub fn transfer_by_region(
        &mut self,
        region: &str,
        id: u64,
        owner: &str,
    ) -> Result<AcquisitionOrder> {
        Ok(self.store.transfer_by_region(region, id, owner)?)
    }

    /// Number of parcels held by `owner`, ignoring case.
    ///
    /// `count_by_owner("")` counts unowned parcels.
    pub fn count_by_owner(&self, owner: &str) -> usize {
        self.store.count_by_owner(owner)
    }

    /// Snapshot of all parcels ordered by (city, address).
    pub fn list_by_address(&self) -> ParcelCursor {
        self.store.list_by_address()
    }

    /// Snapshot of all parcels ordered by (region, id).
    pub fn list_by_region(&self) -> ParcelCursor {
        self.store.list_by_region()
    }

    /// Snapshot of the parcels held by `owner`, oldest acquisition first.
    pub fn list_by_owner(&self, owner: &str) -> ParcelCursor {
        self.store.list_by_owner(owner)
    }
}

/// Builder for register configuration.
///
/// # Example
///
/// ```ignore
/// let register = LandRegister::builder()
///     .with_capacity(4096)
///     .first_acquisition_order(1)
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct LandRegisterBuilder {
    config: RegisterConfig,
}

impl LandRegisterBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every option with `config`.
    pub fn config(mut self, config: RegisterConfig) -> Self {
        self.config = config;
        self
    }

    /// Reserve room for `capacity` parcels.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Acquisition order of the first transfer (default 1).
    pub fn first_acquisition_order(mut self, first: u64) -> Self {
        self.config.first_acquisition_order = first;
        self
    }

    /// Build the register.
    pub fn build(self) -> Result<LandRegister> {
        self.config.validate()?;
        debug!(
            "Opening land register (capacity {}, first acquisition {})",
            self.config.initial_capacity, self.config.first_acquisition_order
        );
        let store = ParcelStore::with_capacity(self.config.initial_capacity)
            .with_first_acquisition(AcquisitionOrder::new(self.config.first_acquisition_order));
        Ok(LandRegister { store })
    }
}
