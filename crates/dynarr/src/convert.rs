// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Conversions into and out of `DynArray`.
//!
//! Every `From` conversion sizes the buffer exactly (`len == capacity`).

use alloc::vec::Vec;
use core::borrow::{Borrow, BorrowMut};

use crate::dyn_array::DynArray;
use crate::reserve_hint::ReserveHint;

impl<T> From<ReserveHint> for DynArray<T> {
    fn from(hint: ReserveHint) -> Self {
        Self::with_reserve_hint(hint)
    }
}

impl<T, const N: usize> From<[T; N]> for DynArray<T> {
    fn from(elements: [T; N]) -> Self {
        let mut array = Self::with_capacity(N);

        for element in elements {
            array.push_back(element);
        }

        array
    }
}

impl<T> From<Vec<T>> for DynArray<T> {
    fn from(elements: Vec<T>) -> Self {
        let mut array = Self::with_capacity(elements.len());

        for element in elements {
            array.push_back(element);
        }

        array
    }
}

impl<T: Clone> From<&[T]> for DynArray<T> {
    fn from(elements: &[T]) -> Self {
        let mut array = Self::with_capacity(elements.len());

        for element in elements {
            array.push_back(element.clone());
        }

        array
    }
}

impl<T> From<DynArray<T>> for Vec<T> {
    fn from(array: DynArray<T>) -> Self {
        array.into_iter().collect()
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for DynArray<T> {
    /// Reserves the iterator's lower size bound, then appends with the usual
    /// doubling growth for anything beyond it.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(self.len().saturating_add(lower));

        for element in iter {
            self.push_back(element);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> AsRef<[T]> for DynArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for DynArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for DynArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
