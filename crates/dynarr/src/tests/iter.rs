// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use dynarr_test_utils::DropTally;

use crate::{DynArray, dynarr};

// =============================================================================
// into_iter()
// =============================================================================

#[test]
fn test_into_iter_order() {
    let collected: Vec<_> = dynarr![1, 2, 3].into_iter().collect();

    assert_eq!(collected, [1, 2, 3]);
}

#[test]
fn test_into_iter_double_ended() {
    let mut iter = dynarr![1, 2, 3, 4].into_iter();

    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.as_slice(), [2, 3]);
    assert_eq!(iter.next_back(), Some(3));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_into_iter_exact_size() {
    let mut iter = dynarr!['a', 'b', 'c'].into_iter();
    assert_eq!(iter.len(), 3);

    iter.next();
    assert_eq!(iter.size_hint(), (2, Some(2)));
}

#[test]
fn test_into_iter_fused() {
    let mut iter = dynarr![1].into_iter();

    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_into_iter_empty() {
    let array: DynArray<String> = DynArray::with_capacity(4);

    assert_eq!(array.into_iter().count(), 0);
}

#[test]
fn test_into_iter_zero_sized() {
    let array = DynArray::from_elem((), 5);

    assert_eq!(array.into_iter().count(), 5);
}

#[test]
fn test_into_iter_drops_unyielded() {
    let tally = DropTally::new();
    let array = dynarr![tally.track(1), tally.track(2), tally.track(3), tally.track(4)];

    let mut iter = array.into_iter();
    let first = iter.next();
    let last = iter.next_back();
    drop(iter);

    assert_eq!(tally.dropped(), 2);
    assert_eq!(tally.live(), 2);

    drop(first);
    drop(last);
    assert_eq!(tally.live(), 0);
}

#[test]
fn test_into_iter_debug() {
    let mut iter = dynarr![1, 2, 3].into_iter();
    iter.next();

    insta::assert_snapshot!(format!("{iter:?}"), @"IntoIter([2, 3])");
}

// =============================================================================
// for loops
// =============================================================================

#[test]
fn test_for_loops() {
    let mut array = dynarr![1, 2, 3];

    for value in &mut array {
        *value *= 2;
    }

    let mut seen = Vec::new();
    for value in &array {
        seen.push(*value);
    }
    assert_eq!(seen, [2, 4, 6]);

    let mut owned = Vec::new();
    for value in array {
        owned.push(value);
    }
    assert_eq!(owned, [2, 4, 6]);
}

#[test]
fn test_rev() {
    let reversed: DynArray<_> = dynarr![1, 2, 3].into_iter().rev().collect();

    assert_eq!(reversed, [3, 2, 1]);
}
