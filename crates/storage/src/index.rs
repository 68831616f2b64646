//! Index keys for the parcel store
//!
//! The store keeps every parcel exactly once, under a [`SlotId`]. The
//! ordered indices map their keys to slots:
//! - by_address: [`AddressKey`](landreg_core::AddressKey) → slot
//! - by_region: [`RegionKey`](landreg_core::RegionKey) → slot
//! - by_owner: [`OwnerEntry`] → slot
//!
//! An [`OwnerEntry`] is derived from a parcel's current owner and
//! acquisition order, so it must be rebuilt whenever either changes.

use landreg_core::{AcquisitionOrder, OwnerName, Parcel};

/// Stable internal handle of a stored parcel
///
/// Slots are handed out in insertion order and never reused, even after
/// the parcel is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotId(u64);

impl SlotId {
    /// Wrap a raw slot number
    pub const fn new(value: u64) -> Self {
        SlotId(value)
    }

    /// Raw slot number
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

/// Where a parcel sorts among the parcels of one owner
///
/// Parcels that never changed hands (only possible for the unowned name)
/// have no order and sort first, in insertion order. Parcels that did
/// follow them by acquisition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Seniority {
    /// Never transferred since it was inserted into this slot
    Never(SlotId),
    /// Ownership changed at this point in history
    Acquired(AcquisitionOrder),
}

/// Key of the owner index
///
/// Ordered by folded owner, then seniority, so all parcels of one owner are
/// contiguous and in transfer order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct OwnerEntry {
    /// Folded owner name
    pub owner: OwnerName,
    /// Position within that owner's parcels
    pub seniority: Seniority,
}

impl OwnerEntry {
    /// Index entry for the current state of the parcel stored in `slot`
    pub fn of(parcel: &Parcel, slot: SlotId) -> Self {
        let seniority = match parcel.acquired {
            Some(order) => Seniority::Acquired(order),
            None => Seniority::Never(slot),
        };
        Self {
            owner: OwnerName::new(&parcel.owner),
            seniority,
        }
    }

    /// Smallest possible entry for `owner`; range scans start here
    pub fn lower_bound(owner: OwnerName) -> Self {
        Self {
            owner,
            seniority: Seniority::Never(SlotId::new(0)),
        }
    }
}
