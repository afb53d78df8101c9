// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Owning handle over an uninitialized heap block.
//!
//! `RawBuffer<T>` knows nothing about which slots are initialized. It allocates
//! `capacity` slots up front and frees them in `Drop`; dropping elements is the
//! job of its owner. Zero capacity and zero-sized `T` never touch the allocator.

use core::alloc::Layout;
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use crate::error::DynArrayError;

pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

// SAFETY: RawBuffer uniquely owns its block; sending it sends the `T`s inside.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: shared access to RawBuffer only hands out shared access to `T`.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> RawBuffer<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Empty handle: zero capacity, dangling pointer, nothing to free.
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    pub(crate) fn layout_for(capacity: usize) -> Result<Layout, DynArrayError> {
        Layout::array::<T>(capacity).map_err(|_| DynArrayError::CapacityOverflow)
    }

    /// Allocates exactly `capacity` uninitialized slots.
    ///
    /// # Errors
    ///
    /// - [`DynArrayError::CapacityOverflow`] if the block would exceed `isize::MAX` bytes.
    /// - [`DynArrayError::AllocFailed`] if the global allocator returns null.
    pub(crate) fn try_allocate(capacity: usize) -> Result<Self, DynArrayError> {
        if capacity == 0 {
            return Ok(Self::new());
        }

        let layout = Self::layout_for(capacity)?;

        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _marker: PhantomData,
            });
        }

        // SAFETY: layout has a non-zero size.
        let raw = unsafe { alloc::alloc::alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>()).ok_or(DynArrayError::AllocFailed { layout })?;

        Ok(Self {
            ptr,
            capacity,
            _marker: PhantomData,
        })
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub(crate) fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline(always)]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns `true` if this handle owns a block obtained from the allocator.
    #[inline]
    pub(crate) fn is_allocated(&self) -> bool {
        self.capacity != 0 && !Self::IS_ZST
    }
}

impl<T> Default for RawBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if !self.is_allocated() {
            return;
        }

        // SAFETY: try_allocate validated this exact (size, align) pair when the
        // block was created, and capacity has not changed since.
        let layout = unsafe {
            Layout::from_size_align_unchecked(
                mem::size_of::<T>() * self.capacity,
                mem::align_of::<T>(),
            )
        };

        // SAFETY: ptr was returned by `alloc` with this layout and is freed only here.
        unsafe {
            alloc::alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout);
        }
    }
}
