// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous array with explicit buffer ownership.
//!
//! `DynArray<T>` owns exactly one heap block of `capacity()` slots, of which the
//! first `len()` hold initialized elements. Growth is geometric (`0 → 1 → 2 → 4 → …`),
//! capacity never shrinks on its own, and every block is released exactly once.
//!
//! # Core Guarantees
//!
//! - **Single owner**: clones allocate their own block with the source's capacity;
//!   [`DynArray::take`] hands the block over and leaves the source empty.
//! - **Allocate first, commit after**: `reserve`, growth on insertion and the
//!   `clone_from` fallback build the new buffer before mutating the array, so a
//!   failed `try_*` call leaves the array untouched.
//! - **Checked and unchecked access**: [`DynArray::at`] reports
//!   [`DynArrayError::OutOfRange`], indexing panics, and
//!   [`DynArray::get_unchecked`] trusts the caller.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use dynarr::{DynArray, DynArrayError, dynarr};
//!
//! fn example() -> Result<(), DynArrayError> {
//!     let mut array = dynarr![1, 2, 3];
//!     assert_eq!(array.capacity(), 3);
//!
//!     array.push_back(4);
//!     assert_eq!(array.len(), 4);
//!     assert_eq!(array.capacity(), 6);
//!
//!     assert!(array.at(10).is_err());
//!
//!     array.erase(0);
//!     assert_eq!(array, [2, 3, 4]);
//!
//!     let empty: DynArray<u32> = DynArray::new();
//!     assert_eq!(empty.capacity(), 0);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Reserve Hint
//!
//! ```rust
//! use dynarr::{DynArray, reserve_hint};
//!
//! // Pre-allocates, constructs nothing.
//! let reserved: DynArray<String> = DynArray::from(reserve_hint(16));
//! assert_eq!(reserved.len(), 0);
//! assert_eq!(reserved.capacity(), 16);
//!
//! // Constructs 16 copies.
//! let filled = DynArray::from_elem(String::from("x"), 16);
//! assert_eq!(filled.len(), 16);
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! dynarr = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use `DynArrayBehaviour` to exercise the error paths of your code.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod cmp;
mod convert;
mod dyn_array;
mod error;
mod iter;
mod raw_buffer;
mod reserve_hint;

#[cfg(test)]
mod tests;

pub use dyn_array::DynArray;
pub use error::DynArrayError;
pub use iter::IntoIter;
pub use reserve_hint::{ReserveHint, reserve_hint};

#[cfg(any(test, feature = "test_utils"))]
pub use dyn_array::DynArrayBehaviour;

/// Creates a [`DynArray`] from a list of elements or a `value; count` pair.
///
/// The list form sizes the buffer exactly (`len == capacity`), like
/// `DynArray::from([..])`. The repeat form clones `value` into `count` slots.
///
/// # Example
///
/// ```rust
/// use dynarr::dynarr;
///
/// let list = dynarr![1, 2, 3];
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.capacity(), 3);
///
/// let repeated = dynarr![0u8; 4];
/// assert_eq!(repeated, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! dynarr {
    () => {
        $crate::DynArray::new()
    };
    ($value:expr; $count:expr) => {
        $crate::DynArray::from_elem($value, $count)
    };
    ($($element:expr),+ $(,)?) => {
        $crate::DynArray::from([$($element),+])
    };
}
