//! Record ring: runtime-sized ring over opaque fixed-size byte records
//!
//! Item size and capacity are chosen at runtime (typically from a
//! [`RingConfig`]) and the ring owns one contiguous, zero-initialised block
//! of `item_size * capacity` bytes. Slot `i` occupies bytes
//! `i * item_size .. (i + 1) * item_size`.
//!
//! Allocation is fallible: an allocator refusal comes back as
//! `RingError::AllocationFailed` instead of aborting.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ops::Range;

use log::{debug, trace};

use crate::config::RingConfig;
use crate::cursor::Cursors;
use crate::{RingError, Result};

/// Fixed-capacity FIFO of byte records that all share one size
#[derive(Debug)]
pub struct RecordRing {
    storage: Box<[u8]>,
    item_size: usize,
    cursors: Cursors,
}

impl RecordRing {
    /// Create a ring holding `capacity` records of `item_size` bytes
    ///
    /// # Errors
    /// - `ZeroCapacity` / `ZeroItemSize` for a degenerate geometry
    /// - `StorageOverflow` if the block size overflows `usize`
    /// - `AllocationFailed` if the allocator refuses the block
    pub fn new(item_size: usize, capacity: usize) -> Result<Self> {
        Self::from_config(RingConfig::new(item_size, capacity))
    }

    /// Create a ring from a validated [`RingConfig`]
    pub fn from_config(config: RingConfig) -> Result<Self> {
        let bytes = config.validate()?;

        let mut storage = Vec::new();
        storage
            .try_reserve_exact(bytes)
            .map_err(|_| RingError::AllocationFailed { bytes })?;
        storage.resize(bytes, 0u8);

        debug!(
            "record ring created: {} x {} bytes ({} bytes storage)",
            config.capacity, config.item_size, bytes
        );

        Ok(Self {
            storage: storage.into_boxed_slice(),
            item_size: config.item_size,
            cursors: Cursors::new(config.capacity),
        })
    }

    /// Release the ring and its storage
    pub fn destroy(self) {
        debug!(
            "record ring destroyed ({} records dropped)",
            self.cursors.used()
        );
    }

    /// Copy one record into the slot at the head
    ///
    /// # Errors
    /// - `ItemSizeMismatch` if `item.len() != item_size()`
    /// - `Full` if every slot is occupied
    ///
    /// The ring is unchanged on error.
    pub fn push(&mut self, item: &[u8]) -> Result<()> {
        self.check_len(item.len())?;

        match self.cursors.push_slot() {
            Some(slot) => {
                let range = self.slot_range(slot);
                self.storage[range].copy_from_slice(item);
                Ok(())
            }
            None => {
                trace!(
                    "push rejected, record ring full ({} records)",
                    self.capacity()
                );
                Err(RingError::Full {
                    capacity: self.capacity(),
                })
            }
        }
    }

    /// Push, evicting the oldest record if the ring is full
    ///
    /// Returns `true` if a record was evicted.
    ///
    /// # Errors
    /// `ItemSizeMismatch` if `item.len() != item_size()`; the ring is
    /// unchanged.
    pub fn push_overwrite(&mut self, item: &[u8]) -> Result<bool> {
        self.check_len(item.len())?;

        let evicted = self.cursors.is_full();
        if evicted {
            if let Some(slot) = self.cursors.pop_slot() {
                trace!("record ring full, overwriting oldest record in slot {}", slot);
            }
        }

        self.push(item)?;
        Ok(evicted)
    }

    /// Pop the oldest record, borrowing its bytes
    ///
    /// The slot is already released when this returns; the borrow keeps it
    /// from being overwritten until the caller is done with it.
    ///
    /// # Errors
    /// `Empty` if there is nothing to pop; the ring is unchanged.
    pub fn pop(&mut self) -> Result<&[u8]> {
        let slot = self.cursors.pop_slot().ok_or(RingError::Empty)?;
        let range = self.slot_range(slot);
        Ok(&self.storage[range])
    }

    /// Pop the oldest record, copying it into `out`
    ///
    /// # Errors
    /// - `ItemSizeMismatch` if `out.len() != item_size()`
    /// - `Empty` if there is nothing to pop
    ///
    /// The ring is unchanged on error.
    pub fn pop_into(&mut self, out: &mut [u8]) -> Result<()> {
        self.check_len(out.len())?;
        out.copy_from_slice(self.pop()?);
        Ok(())
    }

    /// Oldest record without removing it
    pub fn peek(&self) -> Option<&[u8]> {
        self.cursors
            .front()
            .map(|slot| &self.storage[self.slot_range(slot)])
    }

    /// Iterate stored records, oldest first
    pub fn iter(&self) -> Records<'_> {
        Records {
            ring: self,
            offset: 0,
        }
    }

    /// Number of records stored
    #[inline]
    pub fn used(&self) -> usize {
        self.cursors.used()
    }

    /// Number of free slots
    #[inline]
    pub fn available(&self) -> usize {
        self.cursors.available()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.cursors.capacity()
    }

    /// Size of one record in bytes
    #[inline]
    pub fn item_size(&self) -> usize {
        self.item_size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cursors.is_full()
    }

    /// Geometry this ring was built with
    pub fn config(&self) -> RingConfig {
        RingConfig::new(self.item_size, self.capacity())
    }

    /// Current cursor state
    pub fn cursors(&self) -> &Cursors {
        &self.cursors
    }

    /// Forget every record without freeing storage
    pub fn clear(&mut self) {
        debug!(
            "clearing record ring ({} of {} slots used)",
            self.used(),
            self.capacity()
        );
        self.cursors.clear();
    }

    fn check_len(&self, actual: usize) -> Result<()> {
        if actual != self.item_size {
            return Err(RingError::ItemSizeMismatch {
                expected: self.item_size,
                actual,
            });
        }
        Ok(())
    }

    #[inline]
    fn slot_range(&self, slot: usize) -> Range<usize> {
        let start = slot * self.item_size;
        start..start + self.item_size
    }
}

/// Iterator over the records of a [`RecordRing`], oldest first
pub struct Records<'a> {
    ring: &'a RecordRing,
    offset: usize,
}

impl<'a> Iterator for Records<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.ring.cursors.slot(self.offset)?;
        self.offset += 1;
        Some(&self.ring.storage[self.ring.slot_range(slot)])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.ring.used() - self.offset;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Records<'_> {}

impl<'a> IntoIterator for &'a RecordRing {
    type Item = &'a [u8];
    type IntoIter = Records<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
