//
// Copyright 2018 yvt, all rights reserved.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>. This file may
// not be copied, modified,or distributed except
// according to those terms.
//
//! The process-wide default heap.
//!
//! Programs that only ever need one heap can use these short forms instead
//! of carrying an instance around. The default instance is a
//! [`LockedHeap`] with the default alignment and mutex; it exists from
//! program start and, like any other instance, does nothing until
//! [`assign`] succeeds.
//!
//! [`LockedHeap`]: ../heap/struct.LockedHeap.html
//! [`assign`]: fn.assign.html
use std::ptr::NonNull;

#[cfg(feature = "stats")]
use heap::Stats;
use heap::LockedHeap;
use region::{AssignError, Region};

static DEFAULT: LockedHeap = LockedHeap::new();

/// Assign the memory regions the default heap manages.
///
/// See [`Heap::assign`](../heap/struct.Heap.html#method.assign).
///
/// # Safety
///
/// The regions must stay valid and unaliased for the rest of the program.
pub unsafe fn assign(regions: &[Region]) -> Result<usize, AssignError> {
    DEFAULT.assign(regions)
}

/// Allocate `size` bytes from the default heap.
pub fn alloc(size: usize) -> Option<NonNull<u8>> {
    DEFAULT.alloc(size)
}

/// Allocate `size` bytes from one specific region of the default heap.
pub fn alloc_in(region: &Region, size: usize) -> Option<NonNull<u8>> {
    DEFAULT.alloc_in(region, size)
}

/// Allocate a zero-initialized array from the default heap.
pub fn alloc_zeroed(nitems: usize, size: usize) -> Option<NonNull<u8>> {
    DEFAULT.alloc_zeroed(nitems, size)
}

/// Region-pinned variant of [`alloc_zeroed`](fn.alloc_zeroed.html).
pub fn alloc_zeroed_in(region: &Region, nitems: usize, size: usize) -> Option<NonNull<u8>> {
    DEFAULT.alloc_zeroed_in(region, nitems, size)
}

/// Resize an allocation of the default heap.
///
/// # Safety
///
/// Same contract as [`Heap::realloc`](../heap/struct.Heap.html#method.realloc).
pub unsafe fn realloc(ptr: Option<NonNull<u8>>, size: usize) -> Option<NonNull<u8>> {
    DEFAULT.realloc(ptr, size)
}

/// Region-pinned variant of [`realloc`](fn.realloc.html).
///
/// # Safety
///
/// Same contract as [`Heap::realloc`](../heap/struct.Heap.html#method.realloc).
pub unsafe fn realloc_in(
    region: &Region,
    ptr: Option<NonNull<u8>>,
    size: usize,
) -> Option<NonNull<u8>> {
    DEFAULT.realloc_in(region, ptr, size)
}

/// Resize an allocation of the default heap through the caller's slot.
///
/// # Safety
///
/// Same contract as [`Heap::realloc`](../heap/struct.Heap.html#method.realloc)
/// for the slot contents.
pub unsafe fn realloc_safe(slot: &mut Option<NonNull<u8>>, size: usize) -> bool {
    DEFAULT.realloc_safe(slot, size)
}

/// Region-pinned variant of [`realloc_safe`](fn.realloc_safe.html).
///
/// # Safety
///
/// Same contract as [`Heap::realloc`](../heap/struct.Heap.html#method.realloc)
/// for the slot contents.
pub unsafe fn realloc_safe_in(
    region: &Region,
    slot: &mut Option<NonNull<u8>>,
    size: usize,
) -> bool {
    DEFAULT.realloc_safe_in(region, slot, size)
}

/// Free an allocation of the default heap.
///
/// # Safety
///
/// Same contract as [`Heap::dealloc`](../heap/struct.Heap.html#method.dealloc).
pub unsafe fn dealloc(ptr: NonNull<u8>) {
    DEFAULT.dealloc(ptr)
}

/// Free an allocation of the default heap through the caller's slot,
/// clearing the slot.
///
/// # Safety
///
/// Same contract as [`Heap::dealloc`](../heap/struct.Heap.html#method.dealloc)
/// for the slot contents.
pub unsafe fn dealloc_safe(slot: &mut Option<NonNull<u8>>) {
    DEFAULT.dealloc_safe(slot)
}

/// The payload size of a live allocation of the default heap.
///
/// # Safety
///
/// Same contract as [`Heap::alloc_size`](../heap/struct.Heap.html#method.alloc_size).
pub unsafe fn alloc_size(ptr: NonNull<u8>) -> usize {
    DEFAULT.alloc_size(ptr)
}

/// Bytes currently on the default heap's free list.
pub fn available_bytes() -> usize {
    DEFAULT.available_bytes()
}

/// Number of regions linked into the default heap.
pub fn regions_count() -> usize {
    DEFAULT.regions_count()
}

/// Take a snapshot of the default heap's counters.
#[cfg(feature = "stats")]
pub fn stats() -> Stats {
    DEFAULT.stats()
}
