//
// Copyright 2018 yvt, all rights reserved.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>. This file may
// not be copied, modified,or distributed except
// according to those terms.
//
//! A grow-only bump allocator for extremely constrained deployments.
//!
//! [`Bump`] manages a single region and hands out allocations by advancing
//! a pointer. There is no per-allocation metadata, which means there is
//! also no way back: freeing, resizing, and size queries do not exist in
//! this mode. Where [`Heap`] costs one aligned header per allocation,
//! `Bump` costs nothing but the alignment padding.
//!
//! [`Bump`]: struct.Bump.html
//! [`Heap`]: ../heap/struct.Heap.html
use std::ptr::{self, NonNull};

use region::{normalize, AssignError, Region};

/// Grow-only bump allocator over a single application-supplied region.
///
/// ## Type parameters
///
///  - `ALIGN` is the alignment of returned addresses and of the per-request
///    charge. Must be a power of two; violating this is a compile-time
///    error.
///
/// ## Examples
///
/// ```
/// use heaplet::{Bump, Region};
///
/// let mut backing = [0u64; 8];
/// let region = Region::new(backing.as_mut_ptr() as *mut u8, 64);
///
/// let mut bump: Bump = Bump::new();
/// unsafe { bump.assign(region) }.unwrap();
///
/// assert!(bump.alloc(32).is_some());
/// assert!(bump.alloc(32).is_some());
/// assert!(bump.alloc(4).is_none());
/// ```
#[derive(Debug)]
pub struct Bump<const ALIGN: usize = 8> {
    /// Address handed out by the next allocation. Null until a region is
    /// assigned.
    next: *mut u8,
    /// Bytes left in the region.
    available: usize,
}

// The bump pointer refers to memory the allocator owns exclusively.
unsafe impl<const ALIGN: usize> Send for Bump<ALIGN> {}

impl<const ALIGN: usize> Bump<ALIGN> {
    const ALIGN_OK: () = assert!(ALIGN.is_power_of_two(), "ALIGN must be a power of two");

    /// Construct a `Bump` with no region assigned.
    pub const fn new() -> Bump<ALIGN> {
        let _ok: () = Self::ALIGN_OK;
        Bump {
            next: ptr::null_mut(),
            available: 0,
        }
    }

    /// Assign the single region this allocator serves from.
    ///
    /// The region is normalized to `ALIGN` first. A second call fails with
    /// [`AssignError::AlreadyAssigned`]; a region with no aligned bytes
    /// fails with [`AssignError::NoUsableRegion`].
    ///
    /// [`AssignError::AlreadyAssigned`]: ../region/enum.AssignError.html
    /// [`AssignError::NoUsableRegion`]: ../region/enum.AssignError.html
    ///
    /// # Safety
    ///
    /// The region must refer to writable memory that nothing else reads or
    /// writes for as long as this allocator exists, and the backing memory
    /// must outlive it.
    pub unsafe fn assign(&mut self, region: Region) -> Result<(), AssignError> {
        if !self.next.is_null() {
            return Err(AssignError::AlreadyAssigned);
        }
        let addr = region.start() as usize;
        let (base, len) = normalize(addr, region.size(), ALIGN);
        if len == 0 {
            return Err(AssignError::NoUsableRegion);
        }
        self.next = region.start().add(base - addr);
        self.available = len;
        Ok(())
    }

    /// Allocate `size` bytes, charged rounded up to `ALIGN`.
    ///
    /// Returns the payload address. Returns `None` if no region is assigned
    /// or the remaining space is too small.
    pub fn alloc(&mut self, size: usize) -> Option<NonNull<u8>> {
        if self.next.is_null() {
            return None;
        }
        let size = size.checked_add(ALIGN - 1)? & !(ALIGN - 1);
        if size > self.available {
            return None;
        }
        let p = self.next;
        self.next = unsafe { self.next.add(size) };
        self.available -= size;
        NonNull::new(p)
    }

    /// Allocate a zero-initialized array of `nitems` elements of `size`
    /// bytes each.
    ///
    /// Returns `None` under the same conditions as [`alloc`](#method.alloc)
    /// or when `nitems * size` overflows.
    pub fn alloc_zeroed(&mut self, nitems: usize, size: usize) -> Option<NonNull<u8>> {
        let total = nitems.checked_mul(size)?;
        let p = self.alloc(total)?;
        unsafe { ptr::write_bytes(p.as_ptr(), 0, total) };
        Some(p)
    }

    /// Bytes still available for allocation.
    pub fn available_bytes(&self) -> usize {
        self.available
    }
}
