//! Thread-safe handle to a land register.
//!
//! [`SharedLandRegister`] puts a [`LandRegister`] behind a
//! `parking_lot::RwLock`. Mutations take the write lock; lookups, counts and
//! cursor snapshots take the read lock, so a snapshot never observes a
//! half-applied mutation.

use crate::error::Result;
use crate::register::LandRegister;
use landreg_core::{AcquisitionOrder, Parcel};
use landreg_storage::ParcelCursor;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Cloneable, `Send + Sync` handle to one register.
///
/// # Example
///
/// ```ignore
/// let shared = SharedLandRegister::new(LandRegister::new());
/// let writer = shared.clone();
/// std::thread::spawn(move || writer.insert("Brno", "Bozetechova", "Kralovo Pole", 1)).join();
/// assert_eq!(shared.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedLandRegister {
    inner: Arc<RwLock<LandRegister>>,
}

impl SharedLandRegister {
    /// Share `register` between threads.
    pub fn new(register: LandRegister) -> Self {
        Self {
            inner: Arc::new(RwLock::new(register)),
        }
    }

    /// Lock for a sequence of reads.
    pub fn read(&self) -> RwLockReadGuard<'_, LandRegister> {
        self.inner.read()
    }

    /// Lock for a sequence of mutations applied as one unit.
    pub fn write(&self) -> RwLockWriteGuard<'_, LandRegister> {
        self.inner.write()
    }

    /// Number of registered parcels.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if no parcel is registered.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// See [`LandRegister::insert`].
    pub fn insert(&self, city: &str, address: &str, region: &str, id: u64) -> Result<()> {
        self.inner.write().insert(city, address, region, id)
    }

    /// See [`LandRegister::remove_by_address`].
    pub fn remove_by_address(&self, city: &str, address: &str) -> Result<Parcel> {
        self.inner.write().remove_by_address(city, address)
    }

    /// See [`LandRegister::remove_by_region`].
    pub fn remove_by_region(&self, region: &str, id: u64) -> Result<Parcel> {
        self.inner.write().remove_by_region(region, id)
    }

    /// Owner of the parcel at (city, address), copied out of the lock.
    pub fn owner_by_address(&self, city: &str, address: &str) -> Result<String> {
        self.inner
            .read()
            .owner_by_address(city, address)
            .map(str::to_string)
    }

    /// Owner of the parcel at (region, id), copied out of the lock.
    pub fn owner_by_region(&self, region: &str, id: u64) -> Result<String> {
        self.inner
            .read()
            .owner_by_region(region, id)
            .map(str::to_string)
    }

    /// See [`LandRegister::transfer_by_address`].
    pub fn transfer_by_address(
        &self,
        city: &str,
        address: &str,
        owner: &str,
    ) -> Result<AcquisitionOrder> {
        self.inner.write().transfer_by_address(city, address, owner)
    }

    /// See [`LandRegister::transfer_by_region`].
    pub fn transfer_by_region(&self, region: &str, id: u64, owner: &str) -> Result<AcquisitionOrder> {
        self.inner.write().transfer_by_region(region, id, owner)
    }

    /// See [`LandRegister::count_by_owner`].
    pub fn count_by_owner(&self, owner: &str) -> usize {
        self.inner.read().count_by_owner(owner)
    }

    /// See [`LandRegister::list_by_address`].
    pub fn list_by_address(&self) -> ParcelCursor {
        self.inner.read().list_by_address()
    }

    /// See [`LandRegister::list_by_region`].
    pub fn list_by_region(&self) -> ParcelCursor {
        self.inner.read().list_by_region()
    }

    /// See [`LandRegister::list_by_owner`].
    pub fn list_by_owner(&self, owner: &str) -> ParcelCursor {
        self.inner.read().list_by_owner(owner)
    }
}
