//! Ring buffer error types

use thiserror::Error;

/// Errors returned by ring construction and by push/pop
///
/// None of these are fatal: a full or empty ring is normal back-pressure
/// for an interrupt handler or a draining task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RingError {
    /// Ring buffer is full
    #[error("ring buffer is full (capacity: {capacity})")]
    Full { capacity: usize },

    /// Ring buffer is empty
    #[error("ring buffer is empty")]
    Empty,

    /// Capacity of zero slots requested
    #[error("capacity must be greater than zero")]
    ZeroCapacity,

    /// Item size of zero bytes requested
    #[error("item size must be greater than zero")]
    ZeroItemSize,

    /// Caller's item does not match the ring's item size
    #[error("item size mismatch (expected {expected} bytes, got {actual})")]
    ItemSizeMismatch { expected: usize, actual: usize },

    /// `item_size * capacity` does not fit in `usize`
    #[error("storage size overflows usize ({item_size} bytes x {capacity} items)")]
    StorageOverflow { item_size: usize, capacity: usize },

    /// Allocator refused the storage block
    #[error("failed to allocate {bytes} bytes of ring storage")]
    AllocationFailed { bytes: usize },
}

pub type Result<T> = core::result::Result<T, RingError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            RingError::Full { capacity: 4 }.to_string(),
            "ring buffer is full (capacity: 4)"
        );
        assert_eq!(RingError::Empty.to_string(), "ring buffer is empty");
        assert_eq!(
            RingError::ItemSizeMismatch {
                expected: 8,
                actual: 3
            }
            .to_string(),
            "item size mismatch (expected 8 bytes, got 3)"
        );
        assert_eq!(
            RingError::AllocationFailed { bytes: 1024 }.to_string(),
            "failed to allocate 1024 bytes of ring storage"
        );
    }
}
