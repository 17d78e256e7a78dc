//
// Copyright 2018 yvt, all rights reserved.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>. This file may
// not be copied, modified,or distributed except
// according to those terms.
//
extern crate heaplet;

use heaplet::{AssignError, Bump, Region};

#[test]
fn capacity_is_a_hard_limit() {
    let mut buf = [0u64; 8];
    let region = Region::new(buf.as_mut_ptr() as *mut u8, 64);
    let mut bump: Bump = Bump::new();
    unsafe { bump.assign(region).unwrap() };

    assert!(bump.alloc(32).is_some());
    assert!(bump.alloc(32).is_some());
    assert_eq!(bump.available_bytes(), 0);
    assert!(bump.alloc(4).is_none());
}

#[test]
fn allocations_are_contiguous() {
    let mut buf = [0u64; 32];
    let region = Region::new(buf.as_mut_ptr() as *mut u8, 256);
    let mut bump: Bump = Bump::new();
    unsafe { bump.assign(region).unwrap() };

    let mut last = None;
    for _ in 0..8 {
        let p = bump.alloc(24).unwrap();
        assert_eq!(p.as_ptr() as usize % 8, 0);
        if let Some(prev) = last {
            assert_eq!(p.as_ptr() as usize, prev + 24);
        }
        last = Some(p.as_ptr() as usize);
    }
    assert_eq!(bump.available_bytes(), 256 - 8 * 24);
}

#[test]
fn charge_rounds_up_to_alignment() {
    let mut buf = [0u64; 8];
    let region = Region::new(buf.as_mut_ptr() as *mut u8, 64);
    let mut bump: Bump = Bump::new();
    unsafe { bump.assign(region).unwrap() };

    bump.alloc(1).unwrap();
    assert_eq!(bump.available_bytes(), 56);
    bump.alloc(9).unwrap();
    assert_eq!(bump.available_bytes(), 40);
}

#[test]
fn single_region_only() {
    let mut buf = [0u64; 32];
    let base = buf.as_mut_ptr() as *mut u8;
    let mut bump: Bump = Bump::new();
    unsafe {
        bump.assign(Region::new(base, 128)).unwrap();
        // The one region is already in place; a second never joins.
        assert_eq!(
            bump.assign(Region::new(base.add(128), 128)),
            Err(AssignError::AlreadyAssigned)
        );
    }
    assert_eq!(bump.available_bytes(), 128);
}

#[test]
fn zeroed_variant() {
    let mut buf = [0xEEu8; 128];
    let region = Region::new(buf.as_mut_ptr(), 128);
    let mut bump: Bump = Bump::new();
    unsafe { bump.assign(region).unwrap() };

    let p = bump.alloc_zeroed(10, 3).unwrap();
    let bytes = unsafe { ::std::slice::from_raw_parts(p.as_ptr(), 30) };
    assert!(bytes.iter().all(|&b| b == 0));
}
