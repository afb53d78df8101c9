// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for dynarr.

use core::alloc::Layout;

use thiserror::Error;

/// Error type for `DynArray` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum DynArrayError {
    /// Checked access or insertion with an index past the valid range.
    #[error("index {index} is out of range for length {len}")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The array length at the time of the request.
        len: usize,
    },

    /// The requested capacity does not fit in `isize::MAX` bytes.
    #[error("capacity overflow: requested buffer exceeds isize::MAX bytes")]
    CapacityOverflow,

    /// The global allocator returned a null pointer.
    #[error("memory allocation of {} bytes failed", .layout.size())]
    AllocFailed {
        /// Layout of the block that could not be allocated.
        layout: Layout,
    },
}

/// Turns an error from a `try_*` path into the panic or abort of its
/// infallible counterpart.
#[cold]
#[inline(never)]
pub(crate) fn handle_error(err: DynArrayError) -> ! {
    match err {
        DynArrayError::AllocFailed { layout } => alloc::alloc::handle_alloc_error(layout),
        other => panic!("{other}"),
    }
}
