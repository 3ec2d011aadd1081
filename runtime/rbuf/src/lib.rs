//! rbuf - Fixed-capacity ring buffers for firmware
//!
//! # Purpose
//! Bounded FIFO queues over fixed-size items for interrupt-to-task handoff,
//! UART byte queues and frame queues. Storage is allocated once; push and
//! pop never allocate and never block.
//!
//! # Rings
//! - [`RingBuffer<T, N>`]: typed items in an inline `[T; N]` array, no
//!   allocator needed, usable in `static` initialisers
//! - [`RecordRing`] (feature `alloc`): opaque byte records whose size and
//!   count are picked at runtime from a [`RingConfig`]
//!
//! Both share the same cursor logic ([`Cursors`]): `head` is the next slot
//! to write, `tail` the next slot to read, and an occupancy count tells a
//! full ring from an empty one, so all `capacity` slots are usable.
//!
//! # Concurrency
//! Single-threaded by contract. Every mutating call takes `&mut self`; a
//! ring shared between an interrupt handler and a task must sit behind the
//! caller's critical section.
//!
//! # Example
//! ```
//! use rbuf::{RingBuffer, RingError};
//!
//! let mut rx: RingBuffer<u8, 4> = RingBuffer::new();
//! for byte in *b"abcd" {
//!     rx.push(byte).unwrap();
//! }
//! assert_eq!(rx.push(b'e'), Err(RingError::Full { capacity: 4 }));
//! assert_eq!(rx.pop(), Ok(b'a'));
//! assert_eq!(rx.used() + rx.available(), rx.capacity());
//! ```
//!
//! # Features
//! - `alloc` (default): [`RecordRing`]
//! - `std`: implements `std::error::Error` through thiserror
//! - `serde`: (de)serialize [`RingConfig`]

#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

mod config;
mod cursor;
mod error;
mod ring;

#[cfg(feature = "alloc")]
mod record;

pub use config::RingConfig;
pub use cursor::Cursors;
pub use error::{Result, RingError};
pub use ring::{Iter, RingBuffer};

#[cfg(feature = "alloc")]
pub use record::{RecordRing, Records};

use static_assertions::{assert_eq_size, assert_impl_all};

// Errors travel across task boundaries by value
assert_impl_all!(RingError: Copy, Send, Sync, core::fmt::Display);
assert_impl_all!(RingBuffer<u8, 16>: Send, Sync, Clone);
#[cfg(feature = "alloc")]
assert_impl_all!(RecordRing: Send, Sync);

// Cursor state is four words, independent of the item type
assert_eq_size!(Cursors, [usize; 4]);
