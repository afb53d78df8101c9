// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for dynarr crates.
//!
//! - [`DropTally`] / [`Tracked`]: count constructions, clones and drops of
//!   values stored in a container.
//! - [`CloneBudget`] / [`Budgeted`]: values whose `clone` panics once a shared
//!   budget runs out, for exercising unwinding paths.
//! - [`for_each_permutation`]: exhaustive orderings of a small input.
//!
//! ## License
//!
//! GPL-3.0-only

mod clone_budget;
mod drop_tally;
mod permutations;

pub use clone_budget::{Budgeted, CloneBudget};
pub use drop_tally::{DropTally, Tracked};
pub use permutations::for_each_permutation;
