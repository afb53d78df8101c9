// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Checks that every buffer is allocated when expected and released exactly once.
//!
//! Counters are per thread, so tests running in parallel do not see each
//! other's allocations.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use dynarr::{DynArray, dynarr, reserve_hint};

struct CountingAllocator;

thread_local! {
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
    static LIVE_BLOCKS: Cell<isize> = const { Cell::new(0) };
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let _ = ALLOCATIONS.try_with(|count| count.set(count.get() + 1));
        let _ = LIVE_BLOCKS.try_with(|live| live.set(live.get() + 1));
        // SAFETY: forwarded unchanged to the system allocator.
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        let _ = LIVE_BLOCKS.try_with(|live| live.set(live.get() - 1));
        // SAFETY: ptr came from System.alloc with this layout.
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Usage {
    allocations: usize,
    live_blocks: isize,
}

fn usage() -> Usage {
    Usage {
        allocations: ALLOCATIONS.with(Cell::get),
        live_blocks: LIVE_BLOCKS.with(Cell::get),
    }
}

/// Runs `f` and returns how many allocations it made and how many blocks it
/// left alive.
fn measure<R>(f: impl FnOnce() -> R) -> (R, Usage) {
    let before = usage();
    let result = f();
    let after = usage();

    (
        result,
        Usage {
            allocations: after.allocations - before.allocations,
            live_blocks: after.live_blocks - before.live_blocks,
        },
    )
}

// =============================================================================
// construction
// =============================================================================

#[test]
fn test_empty_constructors_do_not_allocate() {
    let (_, used) = measure(|| {
        let _a: DynArray<u64> = DynArray::new();
        let _b: DynArray<u64> = DynArray::from(reserve_hint(0));
        let _c = DynArray::from_elem(1u64, 0);
        let _d: DynArray<u64> = DynArray::from([]);
        let _e: DynArray<u64> = dynarr![];
    });

    assert_eq!(used.allocations, 0);
}

#[test]
fn test_zero_sized_elements_do_not_allocate() {
    let (_, used) = measure(|| {
        let mut array = DynArray::with_capacity(100);
        for _ in 0..1000 {
            array.push_back(());
        }
        array.reserve(5000);
        array.len()
    });

    assert_eq!(used.allocations, 0);
}

#[test]
fn test_reserve_hint_allocates_once() {
    let (array, used) = measure(|| DynArray::<u64>::from(reserve_hint(32)));

    assert_eq!(used.allocations, 1);
    assert_eq!(used.live_blocks, 1);

    let ((), used) = measure(|| drop(array));
    assert_eq!(used.live_blocks, -1);
}

// =============================================================================
// growth
// =============================================================================

#[test]
fn test_push_back_allocates_per_doubling() {
    let (array, used) = measure(|| {
        let mut array = DynArray::new();
        for value in 0..9u64 {
            array.push_back(value);
        }
        array
    });

    // Capacities 1, 2, 4, 8, 16.
    assert_eq!(used.allocations, 5);
    assert_eq!(used.live_blocks, 1);
    assert_eq!(array.capacity(), 16);

    let ((), used) = measure(|| drop(array));
    assert_eq!(used.live_blocks, -1);
}

#[test]
fn test_reserve_noop_does_not_allocate() {
    let mut array = dynarr![1u64, 2, 3];

    let ((), used) = measure(|| {
        array.reserve(3);
        array.reserve(1);
    });

    assert_eq!(used.allocations, 0);
}

#[test]
fn test_reserve_releases_old_block() {
    let mut array = dynarr![1u64, 2, 3];

    let ((), used) = measure(|| array.reserve(100));

    assert_eq!(used.allocations, 1);
    assert_eq!(used.live_blocks, 0);
}

#[test]
fn test_erase_and_in_place_insert_do_not_allocate() {
    let mut array = DynArray::<u64>::with_capacity(8);
    array.extend([1, 2, 3]);

    let ((), used) = measure(|| {
        array.insert(1, 9);
        array.erase(0);
        array.pop_back();
        array.clear();
    });

    assert_eq!(used.allocations, 0);
    assert_eq!(used.live_blocks, 0);
}

// =============================================================================
// copies and moves
// =============================================================================

#[test]
fn test_clone_allocates_one_block() {
    let array = dynarr![1u64, 2, 3];

    let (copy, used) = measure(|| array.clone());

    assert_eq!(used.allocations, 1);
    assert_eq!(used.live_blocks, 1);
    assert_eq!(copy, array);
}

#[test]
fn test_clone_from_within_capacity_does_not_allocate() {
    let mut target = DynArray::<u64>::with_capacity(10);
    let source = dynarr![1u64, 2, 3];

    let ((), used) = measure(|| target.clone_from(&source));

    assert_eq!(used.allocations, 0);
    assert_eq!(target, [1, 2, 3]);
}

#[test]
fn test_clone_from_fallback_swaps_blocks() {
    let mut target = dynarr![1u64];
    let source = dynarr![1u64, 2, 3];

    let ((), used) = measure(|| target.clone_from(&source));

    assert_eq!(used.allocations, 1);
    assert_eq!(used.live_blocks, 0);
}

#[test]
fn test_take_transfers_without_allocating() {
    let mut source = dynarr![1u64, 2, 3];

    let (moved, used) = measure(|| source.take());

    assert_eq!(used.allocations, 0);
    assert_eq!(used.live_blocks, 0);

    let ((), used) = measure(|| {
        drop(moved);
        drop(source);
    });
    assert_eq!(used.live_blocks, -1);
}

#[test]
fn test_move_assignment_releases_old_block() {
    let mut a = dynarr![1u64, 2];
    let mut b = dynarr![3u64, 4, 5];
    assert_eq!(a.len(), 2);

    let ((), used) = measure(|| a = b.take());

    assert_eq!(used.allocations, 0);
    assert_eq!(used.live_blocks, -1);
    assert_eq!(a, [3, 4, 5]);
}

#[test]
fn test_into_iter_releases_block_once() {
    let array = dynarr![String::from("a"), String::from("b")];

    let (count, used) = measure(|| array.into_iter().filter(|s| s == "a").count());

    assert_eq!(count, 1);
    assert_eq!(used.allocations, 0);
    // One DynArray block plus two String blocks.
    assert_eq!(used.live_blocks, -3);
}

// =============================================================================
// full lifecycle
// =============================================================================

#[test]
fn test_every_block_released() {
    let ((), used) = measure(|| {
        let mut array = DynArray::new();
        for value in 0..100u64 {
            array.insert(array.len() / 2, value);
        }
        array.resize(300);
        array.truncate(10);

        let mut copy = array.clone();
        copy.clone_from(&dynarr![0u64; 500]);

        let moved = array.take();
        array = moved.clone();
        array.swap_with(&mut copy);
    });

    assert_eq!(used.live_blocks, 0);
}
