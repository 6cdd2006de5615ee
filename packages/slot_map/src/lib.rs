#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! A densely packed object pool that addresses its values through stable integer handles.
//!
//! This crate provides [`SlotMap`], a collection that stores values of one type contiguously
//! for fast iteration while giving each value a [`SlotHandle`] that keeps resolving to it in
//! O(1), regardless of other values being inserted or removed.
//!
//! This is useful wherever code needs a long-lived reference into a collection that can
//! reallocate or compact itself: the caller holds a small copyable handle instead of a
//! reference or pointer, and the map translates it to the value's current location on demand.
//!
//! # Key Features
//!
//! - **Dense storage**: values are kept in one contiguous slice with no gaps.
//! - **Stable handles**: a handle resolves to the same value until that value is removed.
//! - **O(1) everything**: insertion (amortized), lookup and removal are constant time.
//! - **Handle/position translation**: go from a handle to a storage position and back.
//! - **Cursors**: walk the storage order in either direction while knowing each value's handle.
//!
//! # How it works
//!
//! Three parallel structures make up the map:
//!
//! - the values themselves, packed in storage order;
//! - a reverse map that records, for every storage position, which handle owns it;
//! - a handle table that records, for every handle in use, the storage position of its value.
//!
//! Removing a value moves the last value into the vacated position (swap-remove) and uses the
//! reverse map to find and repoint the moved value's handle. The freed handle goes into a FIFO
//! free list threaded through the unused entries of the handle table, to be reused by a later
//! insertion.
//!
//! # Handle reuse
//!
//! Handles carry no generation counter. Once a value is removed its handle may be reissued to
//! an unrelated value, and the two are indistinguishable. Callers must stop using a handle as
//! soon as they remove its value.
//!
//! # Examples
//!
//! ```
//! use slot_map::SlotMap;
//!
//! let mut map = SlotMap::new();
//!
//! let apple = map.insert("apple");
//! let banana = map.insert("banana");
//! let cherry = map.insert("cherry");
//!
//! // Removing a value does not affect the handles of other values.
//! map.remove(apple);
//! assert_eq!(map[banana], "banana");
//! assert_eq!(map[cherry], "cherry");
//!
//! // Iteration visits values in storage order, which is not insertion order.
//! let mut fruits = map.iter().copied().collect::<Vec<_>>();
//! fruits.sort_unstable();
//! assert_eq!(fruits, ["banana", "cherry"]);
//!
//! // The handle of a removed value is reused by the next insertion.
//! let date = map.insert("date");
//! assert_eq!(date, apple);
//! ```
//!
//! Translating between storage positions and handles:
//!
//! ```
//! use slot_map::SlotMap;
//!
//! let mut map = SlotMap::new();
//! let first = map.insert(1.5_f32);
//! let second = map.insert(2.5_f32);
//!
//! let cursor = map.find(second);
//! assert_eq!(cursor.position(), 1);
//! assert_eq!(cursor.handle(), Some(second));
//!
//! for (position, value) in map.iter().enumerate() {
//!     let handle = map.handle_at(position).unwrap();
//!     assert_eq!(map.get(handle), Some(value));
//! }
//! # _ = first;
//! ```

mod builder;
mod cursor;
mod error;
mod handle;
mod handle_table;
mod iter;
mod slot_map;
mod validation;

pub use builder::*;
pub use cursor::*;
pub use error::Error;
pub(crate) use error::Result;
pub use handle::*;
pub(crate) use handle_table::*;
pub use iter::*;
pub use slot_map::*;
pub use validation::*;
