// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Values whose `clone` panics once a shared budget is spent.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared clone allowance for [`Budgeted`] values.
///
/// # Example
///
/// ```rust
/// use dynarr_test_utils::CloneBudget;
///
/// let budget = CloneBudget::new(1);
/// let item = budget.item(0);
///
/// let _first = item.clone();
/// assert_eq!(budget.remaining(), 0);
///
/// let second = std::panic::catch_unwind(|| item.clone());
/// assert!(second.is_err());
/// ```
#[derive(Clone, Debug)]
pub struct CloneBudget(Arc<AtomicUsize>);

impl CloneBudget {
    /// Allows `clones` successful clones across all items of this budget.
    pub fn new(clones: usize) -> Self {
        Self(Arc::new(AtomicUsize::new(clones)))
    }

    /// Creates an item identified by `id`. Creation does not spend budget.
    pub fn item(&self, id: usize) -> Budgeted {
        Budgeted {
            id,
            budget: self.clone(),
        }
    }

    /// Clones still allowed.
    pub fn remaining(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }

    /// Replaces the remaining allowance.
    pub fn refill(&self, clones: usize) {
        self.0.store(clones, Ordering::Relaxed);
    }
}

/// An item that spends one unit of its [`CloneBudget`] per clone.
///
/// # Panics
///
/// `clone` panics when the budget is exhausted.
#[derive(Debug)]
pub struct Budgeted {
    id: usize,
    budget: CloneBudget,
}

impl Budgeted {
    /// Returns the id given at creation.
    pub fn id(&self) -> usize {
        self.id
    }
}

impl Clone for Budgeted {
    fn clone(&self) -> Self {
        let spent = self
            .budget
            .0
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |left| left.checked_sub(1));

        if spent.is_err() {
            panic!("clone budget exhausted while cloning item {}", self.id);
        }

        self.budget.item(self.id)
    }
}

impl PartialEq for Budgeted {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Budgeted {}
