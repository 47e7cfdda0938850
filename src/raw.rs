// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The allocation half of the container: a raw buffer that knows its
//! capacity but nothing about which slots are initialized.

use std::alloc::{self, Layout, handle_alloc_error};
use std::mem;
use std::ptr::NonNull;

use tracing::trace;

/// An owned allocation of `cap` uninitialized slots of `T`.
///
/// `RawBuf` never reads or drops elements. The owner tracks which slots are
/// live and must drop them before this buffer frees the block.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
}

// SAFETY: RawBuf owns its allocation outright, so ownership can move between
// threads whenever T can.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: a shared RawBuf hands out element access only through &T, so it can
// be shared whenever T is Sync.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// The largest element count any buffer of `T` can hold: allocations are
    /// capped at `isize::MAX` bytes.
    pub(crate) const MAX_SIZE: usize = {
        let size = mem::size_of::<T>();
        if size == 0 { usize::MAX } else { isize::MAX as usize / size }
    };

    pub(crate) fn new() -> Self {
        assert!(mem::size_of::<T>() != 0, "zero-sized element types are not supported");
        RawBuf { ptr: NonNull::dangling(), cap: 0 }
    }

    pub(crate) fn with_capacity(cap: usize) -> Self {
        let mut buf = Self::new();
        if cap > 0 {
            assert!(cap <= Self::MAX_SIZE, "capacity overflow");
            buf.reallocate(cap);
        }
        buf
    }

    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    /// Grows by doubling (starting at 1), clamped to [`Self::MAX_SIZE`].
    pub(crate) fn grow(&mut self) {
        assert!(self.cap < Self::MAX_SIZE, "capacity overflow");
        let doubled = if self.cap == 0 { 1 } else { self.cap * 2 };
        self.reallocate(doubled.min(Self::MAX_SIZE));
    }

    /// Reallocates to exactly `new_cap` slots. Callers check `new_cap`
    /// against the current capacity and [`Self::MAX_SIZE`] first.
    pub(crate) fn reserve_exact(&mut self, new_cap: usize) {
        debug_assert!(new_cap > self.cap && new_cap <= Self::MAX_SIZE);
        self.reallocate(new_cap);
    }

    fn reallocate(&mut self, new_cap: usize) {
        // new_cap <= MAX_SIZE keeps the byte size within isize::MAX, so the
        // layout computation cannot fail.
        let new_layout = Layout::array::<T>(new_cap).unwrap();

        let new_ptr = if self.cap == 0 {
            unsafe { alloc::alloc(new_layout) }
        } else {
            let old_layout = Layout::array::<T>(self.cap).unwrap();
            unsafe { alloc::realloc(self.ptr.as_ptr() as *mut u8, old_layout, new_layout.size()) }
        };

        self.ptr = match NonNull::new(new_ptr as *mut T) {
            Some(ptr) => ptr,
            None => handle_alloc_error(new_layout),
        };
        trace!(old_cap = self.cap, new_cap, "reallocated buffer");
        self.cap = new_cap;
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if self.cap != 0 {
            let layout = Layout::array::<T>(self.cap).unwrap();
            unsafe { alloc::dealloc(self.ptr.as_ptr() as *mut u8, layout) };
        }
    }
}
