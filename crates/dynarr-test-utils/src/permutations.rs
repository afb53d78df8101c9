// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Permutation utilities for exhaustive testing.

/// Calls `callback` once with every ordering of `items`.
///
/// Uses the iterative form of Heap's algorithm: each ordering differs from the
/// previous one by a single swap. An empty input produces no call.
///
/// # Example
///
/// ```
/// use dynarr_test_utils::for_each_permutation;
///
/// let mut seen = Vec::new();
/// for_each_permutation(&[1, 2, 3], |perm| seen.push(perm.to_vec()));
///
/// assert_eq!(seen.len(), 6);
/// assert!(seen.contains(&vec![3, 2, 1]));
/// ```
pub fn for_each_permutation<T, F>(items: &[T], mut callback: F)
where
    T: Clone,
    F: FnMut(&[T]),
{
    let n = items.len();
    if n == 0 {
        return;
    }

    let mut items = items.to_vec();
    let mut counters = vec![0usize; n];

    callback(&items);

    let mut i = 1;
    while i < n {
        if counters[i] < i {
            if i % 2 == 0 {
                items.swap(0, i);
            } else {
                items.swap(counters[i], i);
            }

            callback(&items);

            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }
}
