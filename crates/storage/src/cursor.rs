//! Snapshot cursor over ordered parcels
//!
//! A [`ParcelCursor`] owns copies of the parcels it walks. Mutating the
//! store after the cursor is created never changes what the cursor yields.

use landreg_core::{AcquisitionOrder, Parcel};

/// Forward-only reader over a fixed, ordered snapshot of parcels
///
/// The cursor is either positioned on a parcel or exhausted. Field
/// accessors return `""` or `0` once exhausted.
///
/// # Example
///
/// ```ignore
/// let mut cursor = store.list_by_address();
/// while !cursor.at_end() {
///     println!("{} {}", cursor.city(), cursor.address());
///     cursor.advance();
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParcelCursor {
    parcels: Vec<Parcel>,
    position: usize,
}

impl ParcelCursor {
    /// Create a cursor positioned on the first of `parcels`
    pub fn new(parcels: Vec<Parcel>) -> Self {
        Self {
            parcels,
            position: 0,
        }
    }

    /// True once every parcel has been passed
    #[inline]
    pub fn at_end(&self) -> bool {
        self.position >= self.parcels.len()
    }

    /// Move to the next parcel; no-op when exhausted
    pub fn advance(&mut self) {
        if !self.at_end() {
            self.position += 1;
        }
    }

    /// Go back to the first parcel of the snapshot
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Parcel under the cursor
    pub fn current(&self) -> Option<&Parcel> {
        self.parcels.get(self.position)
    }

    /// City of the current parcel
    pub fn city(&self) -> &str {
        self.current().map_or("", |p| p.city.as_str())
    }

    /// Address of the current parcel
    pub fn address(&self) -> &str {
        self.current().map_or("", |p| p.address.as_str())
    }

    /// Region of the current parcel
    pub fn region(&self) -> &str {
        self.current().map_or("", |p| p.region.as_str())
    }

    /// Id of the current parcel
    pub fn id(&self) -> u64 {
        self.current().map_or(0, |p| p.id)
    }

    /// Owner of the current parcel, as stored
    pub fn owner(&self) -> &str {
        self.current().map_or("", |p| p.owner.as_str())
    }

    /// Acquisition order of the current parcel
    pub fn acquired(&self) -> Option<AcquisitionOrder> {
        self.current().and_then(|p| p.acquired)
    }

    /// Number of parcels in the snapshot
    pub fn len(&self) -> usize {
        self.parcels.len()
    }

    /// True if the snapshot holds no parcels
    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }

    /// Parcels not yet passed, including the current one
    pub fn remaining(&self) -> usize {
        self.parcels.len().saturating_sub(self.position)
    }
}

impl Iterator for ParcelCursor {
    type Item = Parcel;

    fn next(&mut self) -> Option<Parcel> {
        let parcel = self.current().cloned()?;
        self.position += 1;
        Some(parcel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}
