//! Ring geometry configuration
//!
//! A [`RingConfig`] describes the shape of a record ring: how many bytes
//! one item occupies and how many items fit. It is a plain value so it can
//! be built in a `const` next to the driver that owns the ring, or (with
//! the `serde` feature) read from a system manifest.

use crate::{RingError, Result};

/// Item size and capacity of a ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingConfig {
    /// Size of one item in bytes
    pub item_size: usize,

    /// Maximum number of items stored at once
    pub capacity: usize,
}

impl RingConfig {
    /// Create a configuration (not validated until [`validate`](Self::validate))
    pub const fn new(item_size: usize, capacity: usize) -> Self {
        Self {
            item_size,
            capacity,
        }
    }

    /// Total bytes of backing storage, or `None` on overflow
    pub const fn storage_bytes(&self) -> Option<usize> {
        self.item_size.checked_mul(self.capacity)
    }

    /// Check the configuration and return the storage size in bytes
    ///
    /// # Errors
    /// - `ZeroCapacity` if `capacity == 0`
    /// - `ZeroItemSize` if `item_size == 0`
    /// - `StorageOverflow` if `item_size * capacity` overflows
    pub fn validate(&self) -> Result<usize> {
        if self.capacity == 0 {
            return Err(RingError::ZeroCapacity);
        }
        if self.item_size == 0 {
            return Err(RingError::ZeroItemSize);
        }
        self.storage_bytes().ok_or(RingError::StorageOverflow {
            item_size: self.item_size,
            capacity: self.capacity,
        })
    }
}
