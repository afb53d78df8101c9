// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// A requested capacity, consumed by `DynArray::from(hint)` to pre-allocate
/// without constructing any element.
///
/// The hint exists so that "empty with room for `n`" reads differently from
/// "`n` filled elements" at the call site.
///
/// # Example
///
/// ```rust
/// use dynarr::{DynArray, reserve_hint};
///
/// let array: DynArray<u64> = reserve_hint(8).into();
/// assert!(array.is_empty());
/// assert_eq!(array.capacity(), 8);
/// ```
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct ReserveHint {
    capacity: usize,
}

impl ReserveHint {
    /// Creates a hint for `capacity` slots. Zero is a valid, no-op hint.
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Returns the requested capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Builds a [`ReserveHint`] for `capacity` slots.
///
/// # Example
///
/// ```rust
/// use dynarr::reserve_hint;
///
/// assert_eq!(reserve_hint(100).capacity(), 100);
/// ```
pub const fn reserve_hint(capacity: usize) -> ReserveHint {
    ReserveHint::new(capacity)
}
