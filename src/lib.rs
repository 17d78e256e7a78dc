//
// Copyright 2018 yvt, all rights reserved.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>. This file may
// not be copied, modified,or distributed except
// according to those terms.
//
//! A lightweight dynamic memory manager for application-supplied memory
//! regions, with in-band block metadata.
//!
//! The application hands over one or more raw byte regions (static buffers,
//! reserved RAM banks, a chunk cut out of a larger allocation) and gets a
//! `malloc`/`realloc`/`free`-shaped allocator over them. All bookkeeping
//! lives inside the regions themselves; an instance is a few words of state
//! plus an optional mutex.
//!
//! # Provided Allocators
//!
//! |      Name      |        Strategy         |              Supports               |
//! | -------------- | ----------------------- | ----------------------------------- |
//! | [`Heap`]       | First-fit free list     | alloc, dealloc, realloc, size query |
//! | [`LockedHeap`] | `Heap` behind a mutex   | the same, from multiple threads     |
//! | [`Bump`]       | Grow-only bump pointer  | alloc                               |
//!
//! [`Heap`]: struct.Heap.html
//! [`LockedHeap`]: struct.LockedHeap.html
//! [`Bump`]: struct.Bump.html
//!
//! Any number of instances can coexist, each with its own regions. A
//! process-wide default instance lives in the [`global`](global/index.html)
//! module.
//!
//! # Examples
//!
//! ```
//! use heaplet::{Heap, Region};
//!
//! let mut backing = [0u64; 128];
//! let regions = [Region::new(backing.as_mut_ptr() as *mut u8, 1024)];
//!
//! let mut heap: Heap = Heap::new();
//! unsafe { heap.assign(&regions) }.unwrap();
//!
//! // Allocate and resize
//! let p = heap.alloc(40).unwrap();
//! let p = unsafe { heap.realloc(Some(p), 160) }.unwrap();
//!
//! // Release
//! unsafe { heap.dealloc(p) };
//! assert_eq!(heap.available_bytes(), 1024 - Heap::<8>::META_SIZE);
//! ```
//!
//! # Feature Flags
//!
//! - `stats` (default): every `Heap` maintains allocation/free counters
//!   and a minimum-ever-available watermark, exposed through
//!   [`Heap::stats`](struct.Heap.html#method.stats).
//! - `clean-memory`: the payload of every block returned to the free list
//!   is zeroed.
//! - `nightly`: enables benchmarks, which currently require a Nightly
//!   Rust compiler.
//!
pub extern crate parking_lot;

pub mod bump;
pub mod global;
pub mod heap;
pub mod region;

pub use self::bump::Bump;
#[cfg(feature = "stats")]
pub use self::heap::Stats;
pub use self::heap::{Heap, LockedHeap};
pub use self::region::{AssignError, Region};
