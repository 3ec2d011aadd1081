//! Typed ring buffer over an owned fixed-size array
//!
//! `RingBuffer<T, N>` needs no allocator: the `N` slots live inline, so a
//! ring can sit in a `static` (behind the caller's lock) or on a task
//! stack. Capacity is fixed at compile time and `N == 0` fails to compile.

use log::{debug, trace};

use crate::cursor::Cursors;
use crate::{RingError, Result};

/// Fixed-capacity FIFO of `Copy` items
///
/// # Type Parameters
/// * `T` - Item type
/// * `N` - Capacity in items (must be non-zero)
#[derive(Debug, Clone)]
pub struct RingBuffer<T, const N: usize> {
    slots: [T; N],
    cursors: Cursors,
}

impl<T: Copy, const N: usize> RingBuffer<T, N> {
    const NON_ZERO: () = assert!(N > 0, "RingBuffer capacity must be non-zero");

    /// Create an empty ring with every slot set to `fill`
    ///
    /// Usable in `const`/`static` initialisers.
    pub const fn new_with(fill: T) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_ZERO;

        Self {
            slots: [fill; N],
            cursors: Cursors::new(N),
        }
    }

    /// Push an item at the head
    ///
    /// # Errors
    /// Returns `RingError::Full` if every slot is occupied; the ring is
    /// unchanged.
    pub fn push(&mut self, item: T) -> Result<()> {
        match self.cursors.push_slot() {
            Some(slot) => {
                self.slots[slot] = item;
                Ok(())
            }
            None => {
                trace!("push rejected, ring full ({} items)", N);
                Err(RingError::Full { capacity: N })
            }
        }
    }

    /// Pop the oldest item
    ///
    /// # Errors
    /// Returns `RingError::Empty` if there is nothing to pop; the ring is
    /// unchanged.
    pub fn pop(&mut self) -> Result<T> {
        self.cursors
            .pop_slot()
            .map(|slot| self.slots[slot])
            .ok_or(RingError::Empty)
    }

    /// Push, evicting the oldest item if the ring is full
    ///
    /// Returns the evicted item, if any.
    pub fn push_overwrite(&mut self, item: T) -> Option<T> {
        let evicted = if self.cursors.is_full() {
            let slot = self.cursors.pop_slot()?;
            trace!("ring full, overwriting oldest item in slot {}", slot);
            Some(self.slots[slot])
        } else {
            None
        };

        // A slot is free at this point
        if let Some(slot) = self.cursors.push_slot() {
            self.slots[slot] = item;
        }
        evicted
    }

    /// Oldest item without removing it
    pub fn peek(&self) -> Option<&T> {
        self.cursors.front().map(|slot| &self.slots[slot])
    }

    /// Iterate occupied slots, oldest first
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            ring: self,
            offset: 0,
        }
    }

    /// Number of items stored
    #[inline]
    pub const fn len(&self) -> usize {
        self.cursors.used()
    }

    /// Number of items stored (same as [`len`](Self::len))
    #[inline]
    pub const fn used(&self) -> usize {
        self.cursors.used()
    }

    /// Number of free slots
    #[inline]
    pub const fn available(&self) -> usize {
        self.cursors.available()
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Size of one item in bytes
    #[inline]
    pub const fn item_size(&self) -> usize {
        core::mem::size_of::<T>()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    #[inline]
    pub const fn is_full(&self) -> bool {
        self.cursors.is_full()
    }

    /// Current cursor state
    pub const fn cursors(&self) -> &Cursors {
        &self.cursors
    }

    /// Forget every item without touching storage
    pub fn clear(&mut self) {
        debug!("clearing ring ({} of {} slots used)", self.len(), N);
        self.cursors.clear();
    }

    /// Raw slot storage, in physical order
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }
}

impl<T: Copy + Default, const N: usize> RingBuffer<T, N> {
    /// Create an empty ring with default-initialised slots
    pub fn new() -> Self {
        Self::new_with(T::default())
    }
}

impl<T: Copy + Default, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the items of a [`RingBuffer`], oldest first
pub struct Iter<'a, T, const N: usize> {
    ring: &'a RingBuffer<T, N>,
    offset: usize,
}

impl<'a, T: Copy, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.ring.cursors.slot(self.offset)?;
        self.offset += 1;
        Some(&self.ring.slots[slot])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.ring.len() - self.offset;
        (remaining, Some(remaining))
    }
}

impl<T: Copy, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}

impl<'a, T: Copy, const N: usize> IntoIterator for &'a RingBuffer<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    #[test]
    fn test_abcd_example() {
        let mut rb: RingBuffer<u8, 4> = RingBuffer::new();

        for byte in *b"abcd" {
            rb.push(byte).unwrap();
        }
        assert!(rb.is_full());
        assert_eq!(rb.push(b'e'), Err(RingError::Full { capacity: 4 }));

        assert_eq!(rb.pop(), Ok(b'a'));
        assert_eq!(rb.pop(), Ok(b'b'));
        assert_eq!(rb.pop(), Ok(b'c'));
        assert_eq!(rb.pop(), Ok(b'd'));
        assert_eq!(rb.pop(), Err(RingError::Empty));
    }

    #[test]
    fn test_used_plus_available() {
        let mut rb: RingBuffer<u32, 5> = RingBuffer::new();
        assert_eq!(rb.used() + rb.available(), 5);

        for i in 0..3 {
            rb.push(i).unwrap();
            assert_eq!(rb.used() + rb.available(), 5);
        }
        rb.pop().unwrap();
        assert_eq!(rb.used(), 2);
        assert_eq!(rb.available(), 3);
    }

    #[test]
    fn test_full_push_leaves_contents() {
        let mut rb: RingBuffer<u16, 2> = RingBuffer::new();
        rb.push(10).unwrap();
        rb.push(20).unwrap();
        assert!(rb.push(30).is_err());
        assert_eq!(rb.len(), 2);
        assert_eq!(rb.pop(), Ok(10));
        assert_eq!(rb.pop(), Ok(20));
    }

    #[test]
    fn test_wraparound_order() {
        let mut rb: RingBuffer<u8, 3> = RingBuffer::new();
        rb.push(1).unwrap();
        rb.push(2).unwrap();
        assert_eq!(rb.pop(), Ok(1));
        rb.push(3).unwrap();
        rb.push(4).unwrap();
        assert!(rb.is_full());

        let items: Vec<u8> = rb.iter().copied().collect();
        assert_eq!(items, [2, 3, 4]);

        assert_eq!(rb.pop(), Ok(2));
        assert_eq!(rb.pop(), Ok(3));
        assert_eq!(rb.pop(), Ok(4));
        assert!(rb.is_empty());
    }

    #[test]
    fn test_peek() {
        let mut rb: RingBuffer<char, 2> = RingBuffer::new();
        assert_eq!(rb.peek(), None);
        rb.push('x').unwrap();
        rb.push('y').unwrap();
        assert_eq!(rb.peek(), Some(&'x'));
        assert_eq!(rb.len(), 2);
    }

    #[test]
    fn test_push_overwrite() {
        let mut rb: RingBuffer<u8, 3> = RingBuffer::new();
        assert_eq!(rb.push_overwrite(1), None);
        assert_eq!(rb.push_overwrite(2), None);
        assert_eq!(rb.push_overwrite(3), None);
        assert_eq!(rb.push_overwrite(4), Some(1));
        assert_eq!(rb.push_overwrite(5), Some(2));
        assert!(rb.is_full());

        let items: Vec<u8> = rb.iter().copied().collect();
        assert_eq!(items, [3, 4, 5]);
    }

    #[test]
    fn test_push_overwrite_single_slot() {
        let mut rb: RingBuffer<u8, 1> = RingBuffer::new();
        assert_eq!(rb.push_overwrite(7), None);
        assert_eq!(rb.push_overwrite(8), Some(7));
        assert_eq!(rb.pop(), Ok(8));
    }

    #[test]
    fn test_clear_keeps_storage() {
        let mut rb: RingBuffer<u8, 4> = RingBuffer::new();
        rb.push(0xAA).unwrap();
        rb.push(0xBB).unwrap();
        rb.clear();

        assert!(rb.is_empty());
        assert_eq!(rb.available(), 4);
        assert_eq!(rb.cursors().head(), 0);
        assert_eq!(&rb.as_slice()[..2], &[0xAA, 0xBB]);
    }

    #[test]
    fn test_const_static_init() {
        static TEMPLATE: RingBuffer<u8, 8> = RingBuffer::new_with(0);
        let mut rb = TEMPLATE.clone();
        rb.push(1).unwrap();
        assert_eq!(rb.capacity(), 8);
        assert!(TEMPLATE.is_empty());
    }

    #[test]
    fn test_item_size() {
        let rb: RingBuffer<[u8; 12], 2> = RingBuffer::new_with([0; 12]);
        assert_eq!(rb.item_size(), 12);
        assert_eq!(rb.iter().len(), 0);
    }
}
