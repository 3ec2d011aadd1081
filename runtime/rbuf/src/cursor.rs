//! Head/tail/count bookkeeping shared by every ring
//!
//! # Scheme
//! - `head` is the slot the next push writes
//! - `tail` is the slot the next pop reads
//! - `count` disambiguates full from empty (`head == tail` in both cases),
//!   so every slot is usable and no sentinel slot is wasted
//!
//! Indices are in items, never bytes. Wraparound is a compare against
//! `capacity` rather than a modulo, which also keeps the arithmetic free of
//! overflow for any capacity up to `usize::MAX`.
//!
//! When a pop leaves the ring empty both cursors rewind to slot 0, so a
//! burst written after a full drain lands contiguously from the start of
//! storage.

use log::trace;

/// Cursor state of a ring with a fixed, non-zero capacity
///
/// Outside the crate this is a read-only view obtained from a ring's
/// `cursors()`; only the rings move the cursors.
///
/// ```compile_fail
/// let mut cursors = rbuf::Cursors::new(4);
/// cursors.push_slot();
/// ```
///
/// ```
/// let mut rb: rbuf::RingBuffer<u8, 4> = rbuf::RingBuffer::new();
/// rb.push(1).unwrap();
/// assert_eq!(rb.cursors().head(), 1);
/// assert_eq!(rb.cursors().used(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursors {
    /// Next slot to write
    head: usize,
    /// Next slot to read
    tail: usize,
    /// Occupied slots
    count: usize,
    /// Total slots
    capacity: usize,
}

impl Cursors {
    /// Create cursors for an empty ring
    ///
    /// # Panics
    /// Panics if `capacity` is zero. Rings validate this before building
    /// their cursors.
    pub(crate) const fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "ring capacity must be non-zero");

        Self {
            head: 0,
            tail: 0,
            count: 0,
            capacity,
        }
    }

    #[inline]
    pub const fn head(&self) -> usize {
        self.head
    }

    #[inline]
    pub const fn tail(&self) -> usize {
        self.tail
    }

    /// Number of occupied slots
    #[inline]
    pub const fn used(&self) -> usize {
        self.count
    }

    /// Number of free slots
    #[inline]
    pub const fn available(&self) -> usize {
        self.capacity - self.count
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub const fn is_full(&self) -> bool {
        self.count == self.capacity
    }

    /// Claim the slot at `head` for a push
    ///
    /// Returns the slot index to write, or `None` if the ring is full (in
    /// which case nothing changes).
    #[inline]
    pub(crate) fn push_slot(&mut self) -> Option<usize> {
        if self.is_full() {
            return None;
        }

        let slot = self.head;
        self.head = self.wrap_increment(self.head);
        self.count += 1;
        Some(slot)
    }

    /// Release the slot at `tail` for a pop
    ///
    /// Returns the slot index to read, or `None` if the ring is empty (in
    /// which case nothing changes). The slot's contents stay intact until
    /// the next push claims it.
    #[inline]
    pub(crate) fn pop_slot(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }

        let slot = self.tail;
        self.tail = self.wrap_increment(self.tail);
        self.count -= 1;

        if self.count == 0 && self.head != 0 {
            trace!("ring drained, rewinding cursors from slot {}", self.head);
            self.head = 0;
            self.tail = 0;
        }

        Some(slot)
    }

    /// Slot holding the oldest item, if any
    #[inline]
    pub const fn front(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.tail)
        }
    }

    /// Physical slot of the `offset`-th occupied item (0 = oldest)
    pub const fn slot(&self, offset: usize) -> Option<usize> {
        if offset >= self.count {
            return None;
        }

        let to_end = self.capacity - self.tail;
        if offset < to_end {
            Some(self.tail + offset)
        } else {
            Some(offset - to_end)
        }
    }

    /// Forget every item (storage untouched)
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    /// `(index + 1) % capacity` for `index < capacity`
    #[inline(always)]
    const fn wrap_increment(&self, index: usize) -> usize {
        let next = index + 1;
        if next == self.capacity {
            0
        } else {
            next
        }
    }
}
