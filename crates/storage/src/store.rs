//! Multi-index parcel store
//!
//! # Design
//!
//! - parcels: FxHashMap<SlotId, Parcel>, the only copy of each parcel
//! - by_address / by_region: BTreeMap from each composite key to its slot
//! - by_owner: BTreeMap from (folded owner, seniority) to slot
//!
//! Every mutation updates the parcel map and all three indices before it
//! returns, so any ordering read afterwards reflects the current owners and
//! acquisition orders. Failed operations change nothing.
//!
//! # Performance
//!
//! - Point lookups: O(log n) through the key indices
//! - count_by_owner: O(log n + k) range scan of the owner index
//! - Listing: O(n) walk of an index plus one clone per parcel

use crate::cursor::ParcelCursor;
use crate::index::{OwnerEntry, SlotId};
use landreg_core::{
    AcquisitionOrder, AddressKey, Error, OwnerName, Parcel, ParcelKey, RegionKey, Result,
};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// In-memory store of parcels with three ordered views
///
/// # Example
///
/// ```ignore
/// use landreg_storage::ParcelStore;
///
/// let mut store = ParcelStore::new();
/// store.insert("Prague", "Thakurova", "Dejvice", 12345)?;
/// store.transfer_by_address("Prague", "Thakurova", "CVUT")?;
/// assert_eq!(store.owner_by_region("Dejvice", 12345)?, "CVUT");
/// ```
pub struct ParcelStore {
    /// Authoritative parcels by slot
    parcels: FxHashMap<SlotId, Parcel>,
    /// (city, address) → slot
    by_address: BTreeMap<AddressKey, SlotId>,
    /// (region, id) → slot
    by_region: BTreeMap<RegionKey, SlotId>,
    /// (folded owner, seniority) → slot
    by_owner: BTreeMap<OwnerEntry, SlotId>,
    /// Next slot to hand out
    next_slot: u64,
    /// Next acquisition order to hand out
    next_acquisition: AcquisitionOrder,
}

impl ParcelStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty store with room for `capacity` parcels
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parcels: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            by_address: BTreeMap::new(),
            by_region: BTreeMap::new(),
            by_owner: BTreeMap::new(),
            next_slot: 0,
            next_acquisition: AcquisitionOrder::FIRST,
        }
    }

    /// Start the acquisition counter at `first` instead of 1
    pub fn with_first_acquisition(mut self, first: AcquisitionOrder) -> Self {
        self.next_acquisition = first;
        self
    }

    /// Number of registered parcels
    pub fn len(&self) -> usize {
        self.parcels.len()
    }

    /// True if no parcel is registered
    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }

    /// Order the next successful transfer will receive
    #[inline]
    pub fn next_acquisition(&self) -> AcquisitionOrder {
        self.next_acquisition
    }

    // ========================================================================
    // Insert / Remove
    // ========================================================================

    /// Register a new, unowned parcel
    ///
    /// Fails with [`Error::Conflict`] if either key is already taken; the
    /// store is left untouched in that case.
    pub fn insert(&mut self, city: &str, address: &str, region: &str, id: u64) -> Result<()> {
        let address_key = AddressKey::new(city, address);
        if self.by_address.contains_key(&address_key) {
            trace!("Insert rejected, {} already registered", address_key);
            return Err(Error::Conflict {
                key: address_key.into(),
            });
        }
        let region_key = RegionKey::new(region, id);
        if self.by_region.contains_key(&region_key) {
            trace!("Insert rejected, {} already registered", region_key);
            return Err(Error::Conflict {
                key: region_key.into(),
            });
        }

        let slot = SlotId::new(self.next_slot);
        self.next_slot += 1;

        let parcel = Parcel::new(city, address, region, id);
        debug!("Registering parcel {} / {}", address_key, region_key);
        self.by_owner.insert(OwnerEntry::of(&parcel, slot), slot);
        self.by_address.insert(address_key, slot);
        self.by_region.insert(region_key, slot);
        self.parcels.insert(slot, parcel);
        Ok(())
    }

    /// Remove the parcel registered under `key`
    ///
    /// Returns the removed parcel. The acquisition counter is not rewound.
    pub fn remove(&mut self, key: &ParcelKey) -> Result<Parcel> {
        let slot = self.slot_of(key)?;
        let parcel = self.parcels.remove(&slot).ok_or_else(|| Error::NotFound {
            key: key.clone(),
        })?;
        self.by_address.remove(&parcel.address_key());
        self.by_region.remove(&parcel.region_key());
        self.by_owner.remove(&OwnerEntry::of(&parcel, slot));

        debug!(
            "Removed parcel {} / {}",
            parcel.address_key(),
            parcel.region_key()
        );
        Ok(parcel)
    }

    /// Remove the parcel at (city, address)
    pub fn remove_by_address(&mut self, city: &str, address: &str) -> Result<Parcel> {
        self.remove(&AddressKey::new(city, address).into())
    }

    /// Remove the parcel at (region, id)
    pub fn remove_by_region(&mut self, region: &str, id: u64) -> Result<Parcel> {
        self.remove(&RegionKey::new(region, id).into())
    }

    /// Drop every parcel
    ///
    /// The acquisition counter keeps running, so orders handed out later
    /// still compare after everything handed out before.
    pub fn clear(&mut self) {
        debug!("Clearing {} parcels", self.parcels.len());
        self.parcels.clear();
        self.by_address.clear();
        self.by_region.clear();
        self.by_owner.clear();
    }

    // ========================================================================
    // Point lookups
    // ========================================================================

    /// Parcel registered under `key`
    pub fn get(&self, key: &ParcelKey) -> Result<&Parcel> {
        let slot = self.slot_of(key)?;
        self.parcels
            .get(&slot)
            .ok_or_else(|| Error::NotFound { key: key.clone() })
    }

    /// Parcel at (city, address)
    pub fn get_by_address(&self, city: &str, address: &str) -> Result<&Parcel> {
        self.get(&AddressKey::new(city, address).into())
    }

    /// Parcel at (region, id)
    pub fn get_by_region(&self, region: &str, id: u64) -> Result<&Parcel> {
        self.get(&RegionKey::new(region, id).into())
    }

    /// True if (city, address) is registered
    pub fn contains_address(&self, city: &str, address: &str) -> bool {
        self.by_address.contains_key(&AddressKey::new(city, address))
    }

    /// True if (region, id) is registered
    pub fn contains_region(&self, region: &str, id: u64) -> bool {
        self.by_region.contains_key(&RegionKey::new(region, id))
    }

    /// Owner of the parcel at (city, address), exactly as stored
    pub fn owner_by_address(&self, city: &str, address: &str) -> Result<&str> {
        self.get_by_address(city, address).map(|p| p.owner.as_str())
    }

    /// Owner of the parcel at (region, id), exactly as stored
    pub fn owner_by_region(&self, region: &str, id: u64) -> Result<&str> {
        self.get_by_region(region, id).map(|p| p.owner.as_str())
    }

    // ========================================================================
    // Ownership
    // ========================================================================

    /// Hand the parcel under `key` to `new_owner`
    ///
    /// The owner is stored verbatim and the parcel receives the next
    /// acquisition order, which is returned. Fails with
    /// [`Error::NoOpTransfer`] if `new_owner` already holds the parcel
    /// (compared case-insensitively), and with [`Error::OrdersExhausted`]
    /// once the counter cannot move past the current order. Neither moves
    /// the counter.
    pub fn transfer(&mut self, key: &ParcelKey, new_owner: &str) -> Result<AcquisitionOrder> {
        let slot = self.slot_of(key)?;
        let parcel = self
            .parcels
            .get_mut(&slot)
            .ok_or_else(|| Error::NotFound { key: key.clone() })?;

        if OwnerName::matches(&parcel.owner, new_owner) {
            trace!("Transfer of {} to {:?} is a no-op", key, new_owner);
            return Err(Error::NoOpTransfer {
                key: key.clone(),
                owner: new_owner.to_string(),
            });
        }

        let order = self.next_acquisition;
        let Some(next) = order.checked_next() else {
            trace!("Acquisition counter spent at {}, refusing {}", order, key);
            return Err(Error::OrdersExhausted { key: key.clone() });
        };
        self.next_acquisition = next;

        self.by_owner.remove(&OwnerEntry::of(parcel, slot));
        parcel.owner = new_owner.to_string();
        parcel.acquired = Some(order);
        self.by_owner.insert(OwnerEntry::of(parcel, slot), slot);

        debug!("Transferred {} to {:?} at order {}", key, new_owner, order);
        Ok(order)
    }

    /// Hand the parcel at (city, address) to `new_owner`
    pub fn transfer_by_address(
        &mut self,
        city: &str,
        address: &str,
        new_owner: &str,
    ) -> Result<AcquisitionOrder> {
        self.transfer(&AddressKey::new(city, address).into(), new_owner)
    }

    /// Hand the parcel at (region, id) to `new_owner`
    pub fn transfer_by_region(
        &mut self,
        region: &str,
        id: u64,
        new_owner: &str,
    ) -> Result<AcquisitionOrder> {
        self.transfer(&RegionKey::new(region, id).into(), new_owner)
    }

    /// Number of parcels held by `owner`, compared case-insensitively
    ///
    /// The empty owner counts unowned parcels.
    pub fn count_by_owner(&self, owner: &str) -> usize {
        self.owned_slots(owner).count()
    }

    // ========================================================================
    // Listing
    // ========================================================================

    /// Snapshot of all parcels ascending by (city, address)
    pub fn list_by_address(&self) -> ParcelCursor {
        self.snapshot(self.by_address.values())
    }

    /// Snapshot of all parcels ascending by (region, id)
    pub fn list_by_region(&self) -> ParcelCursor {
        self.snapshot(self.by_region.values())
    }

    /// Snapshot of the parcels held by `owner`, oldest transfer first
    ///
    /// Parcels that were never transferred (only reachable through the
    /// empty owner) come first, in insertion order.
    pub fn list_by_owner(&self, owner: &str) -> ParcelCursor {
        self.snapshot(self.owned_slots(owner))
    }

    fn owned_slots<'a>(&'a self, owner: &str) -> impl Iterator<Item = &'a SlotId> + 'a {
        let owner = OwnerName::new(owner);
        let start = OwnerEntry::lower_bound(owner.clone());
        self.by_owner
            .range(start..)
            .take_while(move |(entry, _)| entry.owner == owner)
            .map(|(_, slot)| slot)
    }

    fn snapshot<'a>(&self, slots: impl Iterator<Item = &'a SlotId>) -> ParcelCursor {
        let parcels: Vec<Parcel> = slots
            .filter_map(|slot| self.parcels.get(slot).cloned())
            .collect();
        trace!("Snapshot of {} parcels", parcels.len());
        ParcelCursor::new(parcels)
    }

    fn slot_of(&self, key: &ParcelKey) -> Result<SlotId> {
        let slot = match key {
            ParcelKey::Address(k) => self.by_address.get(k),
            ParcelKey::Region(k) => self.by_region.get(k),
        };
        slot.copied().ok_or_else(|| {
            trace!("No parcel registered under {}", key);
            Error::NotFound { key: key.clone() }
        })
    }
}

impl Default for ParcelStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ParcelStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParcelStore")
            .field("parcels", &self.parcels.len())
            .field("next_acquisition", &self.next_acquisition)
            .finish()
    }
}
