// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared drop counters for container tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
struct Counters {
    created: AtomicUsize,
    cloned: AtomicUsize,
    dropped: AtomicUsize,
}

/// Shared counters observed by every [`Tracked`] value it hands out.
///
/// Cloning a `DropTally` shares the same counters, so a test can keep one
/// handle while the container owns the tracked values.
///
/// # Example
///
/// ```rust
/// use dynarr_test_utils::DropTally;
///
/// let tally = DropTally::new();
/// let values = vec![tally.track(1), tally.track(2)];
/// assert_eq!(tally.live(), 2);
///
/// drop(values);
/// assert_eq!(tally.dropped(), 2);
/// assert_eq!(tally.live(), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DropTally(Arc<Counters>);

impl DropTally {
    /// Creates a tally with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `value` so its clones and drops are counted here.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        self.0.created.fetch_add(1, Ordering::Relaxed);
        Tracked {
            value,
            tally: self.clone(),
        }
    }

    /// Number of values created, through `track` or `clone`.
    pub fn created(&self) -> usize {
        self.0.created.load(Ordering::Relaxed)
    }

    /// Number of `clone` calls on tracked values.
    pub fn cloned(&self) -> usize {
        self.0.cloned.load(Ordering::Relaxed)
    }

    /// Number of tracked values dropped.
    pub fn dropped(&self) -> usize {
        self.0.dropped.load(Ordering::Relaxed)
    }

    /// Number of tracked values still alive.
    pub fn live(&self) -> usize {
        self.created() - self.dropped()
    }
}

/// A value whose clones and drops are counted by a [`DropTally`].
///
/// Equality and ordering look at the wrapped value only.
#[derive(Debug)]
pub struct Tracked<T> {
    value: T,
    tally: DropTally,
}

impl<T> Tracked<T> {
    /// Returns the wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: Clone> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        self.tally.0.cloned.fetch_add(1, Ordering::Relaxed);
        self.tally.track(self.value.clone())
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        let previous = self.tally.0.dropped.fetch_add(1, Ordering::Relaxed);
        assert!(
            previous < self.tally.created(),
            "Tracked value dropped more often than created"
        );
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Tracked<T> {}

impl<T: PartialOrd> PartialOrd for Tracked<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: PartialEq> PartialEq<T> for Tracked<T> {
    fn eq(&self, other: &T) -> bool {
        self.value == *other
    }
}
