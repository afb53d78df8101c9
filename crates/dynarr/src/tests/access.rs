// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{DynArray, DynArrayError, dynarr};

// =============================================================================
// at(), at_mut()
// =============================================================================

#[test]
fn test_at() {
    let array = dynarr![10, 20, 30];

    assert_eq!(array.at(0), Ok(&10));
    assert_eq!(array.at(2), Ok(&30));
}

#[test]
fn test_at_out_of_range() {
    let array = dynarr![1, 2, 3];

    assert_eq!(
        array.at(10),
        Err(DynArrayError::OutOfRange { index: 10, len: 3 })
    );
    assert_eq!(
        array.at(3),
        Err(DynArrayError::OutOfRange { index: 3, len: 3 })
    );
}

#[test]
fn test_at_empty() {
    let array: DynArray<u8> = DynArray::with_capacity(4);

    assert!(array.at(0).is_err());
}

#[test]
fn test_at_error_message() {
    let err = dynarr![1, 2, 3].at(10).unwrap_err();

    assert_eq!(err.to_string(), "index 10 is out of range for length 3");
}

#[test]
fn test_at_mut() -> Result<(), DynArrayError> {
    let mut array = dynarr![1, 2, 3];

    *array.at_mut(1)? = 42;

    assert_eq!(array, [1, 42, 3]);
    assert!(array.at_mut(3).is_err());
    Ok(())
}

// =============================================================================
// Index, IndexMut
// =============================================================================

#[test]
fn test_index() {
    let mut array = dynarr![1, 2, 3];

    array[0] = 5;

    assert_eq!(array[0], 5);
    assert_eq!(&array[1..], [2, 3]);
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn test_index_out_of_range_panics() {
    let array = dynarr![1, 2, 3];
    let _ = array[3];
}

#[test]
#[should_panic]
fn test_index_beyond_len_within_capacity_panics() {
    let mut array = DynArray::with_capacity(8);
    array.push_back(1u8);

    let _ = array[1];
}

// =============================================================================
// get_unchecked(), get_unchecked_mut()
// =============================================================================

#[test]
fn test_get_unchecked() {
    let mut array = dynarr![1, 2, 3];

    // SAFETY: indices are below len.
    unsafe {
        *array.get_unchecked_mut(2) = 7;
        assert_eq!(*array.get_unchecked(0), 1);
        assert_eq!(*array.get_unchecked(2), 7);
    }
}

// =============================================================================
// len(), is_empty(), capacity()
// =============================================================================

#[test]
fn test_is_empty_matches_len() {
    let mut array = DynArray::new();
    assert!(array.is_empty());

    array.push_back(1);
    assert!(!array.is_empty());

    array.pop_back();
    assert!(array.is_empty());
    assert_eq!(array.capacity(), 1);
}

// =============================================================================
// as_slice(), as_mut_slice(), as_ptr(), Deref
// =============================================================================

#[test]
fn test_as_slice() {
    let mut array = dynarr![3, 1, 2];

    assert_eq!(array.as_slice(), &[3, 1, 2]);

    array.as_mut_slice().sort();
    assert_eq!(array, [1, 2, 3]);
}

#[test]
fn test_slice_methods_through_deref() {
    let mut array = dynarr![1, 2, 3, 4];

    assert_eq!(array.first(), Some(&1));
    assert_eq!(array.last(), Some(&4));
    assert!(array.contains(&3));

    array.reverse();
    assert_eq!(array, [4, 3, 2, 1]);
}

#[test]
fn test_as_ptr_stable_without_reallocation() {
    let mut array = DynArray::with_capacity(4);
    let ptr = array.as_ptr();

    array.push_back(1);
    array.push_back(2);
    array.insert(0, 0);
    array.erase(1);

    assert_eq!(array.as_ptr(), ptr);
}

#[test]
fn test_as_mut_ptr_writes() {
    let mut array = dynarr![0u8; 3];

    // SAFETY: index 1 is below len.
    unsafe { *array.as_mut_ptr().add(1) = 9 };

    assert_eq!(array, [0, 9, 0]);
}

// =============================================================================
// iter(), iter_mut()
// =============================================================================

#[test]
fn test_iter() {
    let array = dynarr![1, 2, 3];

    let sum: i32 = array.iter().sum();
    assert_eq!(sum, 6);

    let collected: Vec<_> = (&array).into_iter().copied().collect();
    assert_eq!(collected, [1, 2, 3]);
}

#[test]
fn test_iter_mut() {
    let mut array = dynarr![1, 2, 3];

    for value in array.iter_mut() {
        *value *= 10;
    }
    for value in &mut array {
        *value += 1;
    }

    assert_eq!(array, [11, 21, 31]);
}

#[test]
fn test_iter_covers_len_only() {
    let mut array = DynArray::with_capacity(10);
    array.push_back(1);

    assert_eq!(array.iter().count(), 1);
}
