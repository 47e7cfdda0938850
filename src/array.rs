// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `DynamicArray<T>`: an owning, contiguous, growable sequence with a
//! `Result`-signaled behavioral contract.
//!
//! The invariant `len <= capacity <= max_size` holds after every operation.
//! Element order is insertion order unless explicitly reversed or erased.
//! Growth never decreases capacity; [`clear`](DynamicArray::clear) and a
//! full-range [`erase`](DynamicArray::erase) retain the allocation.

use std::fmt;
use std::mem::ManuallyDrop;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use tracing::trace;

use crate::error::{Error, Result};
use crate::raw::RawBuf;

/// An owning, contiguous, growable sequence container.
///
/// Bad indices and oversized targets are signaled through [`Error`] rather
/// than panicking, so a harness can assert on them deterministically.
/// Reallocation (from pushing or reserving) invalidates any previously
/// obtained references into the buffer, as for any growable Rust container.
pub struct DynamicArray<T> {
    buf: RawBuf<T>,
    len: usize,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array without allocating.
    ///
    /// # Panics
    ///
    /// Panics for zero-sized element types, which this container does not
    /// support.
    pub fn new() -> Self {
        DynamicArray { buf: RawBuf::new(), len: 0 }
    }

    /// Creates an empty array with room for at least `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds [`max_size`](Self::max_size). Like
    /// [`new`](Self::new), panics for zero-sized element types, which this
    /// container does not support.
    pub fn with_capacity(capacity: usize) -> Self {
        DynamicArray { buf: RawBuf::with_capacity(capacity), len: 0 }
    }

    /// True iff the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The number of allocated slots. Always at least [`len`](Self::len).
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// The theoretical upper bound on [`len`](Self::len), derived from
    /// addressable memory over the element size. Always at least
    /// [`capacity`](Self::capacity).
    pub fn max_size(&self) -> usize {
        RawBuf::<T>::MAX_SIZE
    }

    /// Appends `value` at the end, doubling the allocation when full.
    /// Amortized O(1).
    pub fn push_back(&mut self, value: T) {
        if self.len == self.capacity() {
            self.buf.grow();
        }
        unsafe {
            ptr::write(self.buf.ptr().add(self.len), value);
        }
        self.len += 1;
    }

    /// Removes and returns the last element, or `None` when empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            unsafe { Some(ptr::read(self.buf.ptr().add(self.len))) }
        }
    }

    /// The first element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyAccess`] when the array is empty.
    pub fn front(&self) -> Result<&T> {
        self.as_slice().first().ok_or(Error::EmptyAccess)
    }

    /// The last element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyAccess`] when the array is empty.
    pub fn back(&self) -> Result<&T> {
        self.as_slice().last().ok_or(Error::EmptyAccess)
    }

    /// Bounds-checked element access.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `index >= len()`, for every length
    /// including 0.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.as_slice().get(index).ok_or(Error::IndexOutOfRange { index, len: self.len })
    }

    /// Grows the allocation to hold at least `new_cap` elements, leaving the
    /// length and contents unchanged. A no-op when `new_cap` does not exceed
    /// the current capacity; the capacity never shrinks through this call.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSize`] when `new_cap` exceeds
    /// [`max_size`](Self::max_size).
    pub fn reserve(&mut self, new_cap: usize) -> Result<()> {
        if new_cap > self.max_size() {
            return Err(Error::InvalidSize { requested: new_cap, max: self.max_size() });
        }
        if new_cap > self.capacity() {
            self.buf.reserve_exact(new_cap);
        }
        Ok(())
    }

    /// Removes the half-open range `[begin, end)`, preserving the relative
    /// order of the surviving elements. Erasing the full range has the same
    /// size effect as [`clear`](Self::clear).
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `end > len()`;
    /// [`Error::InvalidSize`] when `begin > end`.
    pub fn erase(&mut self, begin: usize, end: usize) -> Result<()> {
        if end > self.len {
            return Err(Error::IndexOutOfRange { index: end, len: self.len });
        }
        if begin > end {
            return Err(Error::InvalidSize { requested: begin, max: end });
        }
        let removed = end - begin;
        if removed == 0 {
            return Ok(());
        }
        let tail = self.len - end;
        // Keep len at the erase point while dropping, so an unwinding
        // destructor leaks the tail instead of exposing dropped elements to
        // a second drop.
        self.len = begin;
        unsafe {
            let hole = self.buf.ptr().add(begin);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(hole, removed));
            ptr::copy(hole.add(removed), hole, tail);
        }
        self.len = begin + tail;
        trace!(begin, end, len = self.len, "erased range");
        Ok(())
    }

    /// Removes all elements. The length becomes 0; the allocation is
    /// retained, so the capacity does not shrink.
    pub fn clear(&mut self) {
        let live = self.len;
        // Set len before dropping so a panicking destructor cannot leave
        // dropped elements observable.
        self.len = 0;
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr(), live));
        }
    }

    /// Shortens the array to `new_len`, dropping excess trailing elements.
    /// No effect when `new_len >= len()`.
    pub fn truncate(&mut self, new_len: usize) {
        while self.len > new_len {
            drop(self.pop_back());
        }
    }

    /// Reverses the element order in place; length and capacity unchanged.
    /// Applying it twice restores the original order.
    pub fn reverse(&mut self) {
        self.as_mut_slice().reverse();
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: Default> DynamicArray<T> {
    /// Grows with default-constructed elements or truncates (dropping the
    /// excess) until `len() == new_len`. Capacity grows as needed and never
    /// shrinks.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSize`] when `new_len` exceeds
    /// [`max_size`](Self::max_size).
    pub fn resize(&mut self, new_len: usize) -> Result<()> {
        if new_len > self.max_size() {
            return Err(Error::InvalidSize { requested: new_len, max: self.max_size() });
        }
        if new_len > self.len {
            if new_len > self.capacity() {
                self.buf.reserve_exact(new_len);
            }
            while self.len < new_len {
                self.push_back(T::default());
            }
        } else {
            self.truncate(new_len);
        }
        Ok(())
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // Drop the live elements; RawBuf's Drop frees the block.
        self.clear();
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: PartialEq> PartialEq<[T]> for DynamicArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut clone = DynamicArray::with_capacity(self.len);
        clone.extend(self.iter().cloned());
        clone
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = DynamicArray::new();
        array.extend(iter);
        array
    }
}

/// A by-value iterator that owns the allocation of the array it came from.
pub struct IntoIter<T> {
    // Owns the block; freed on drop after the remaining elements are.
    _buf: RawBuf<T>,
    start: *const T,
    end: *const T,
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        // Disarm the array's Drop; the iterator takes over both the live
        // elements and the allocation.
        let this = ManuallyDrop::new(self);
        let buf = unsafe { ptr::read(&this.buf) };
        let start = buf.ptr() as *const T;
        let end = unsafe { start.add(this.len) };
        IntoIter { _buf: buf, start, end }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            None
        } else {
            unsafe {
                let value = ptr::read(self.start);
                self.start = self.start.add(1);
                Some(value)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = unsafe { self.end.offset_from(self.start) } as usize;
        (remaining, Some(remaining))
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = unsafe { self.end.offset_from(self.start) } as usize;
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.start as *mut T, remaining));
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}


#[cfg(kani)]
mod verification {
    use super::*;
    use crate::invariant::Invariant;

    #[kani::proof]
    #[kani::unwind(3)]
    fn check_push_back_maintains_invariant() {
        let mut array = DynamicArray::<u8>::new();
        array.push_back(kani::any());
        assert!(array.is_safe());
        assert_eq!(array.len(), 1);
    }

    #[kani::proof]
    #[kani::unwind(3)]
    fn check_at_rejects_out_of_range() {
        let mut array = DynamicArray::<u8>::new();
        array.push_back(kani::any());
        let index: usize = kani::any();
        kani::assume(index >= array.len());
        assert!(array.at(index).is_err());
    }

    #[kani::proof]
    #[kani::unwind(4)]
    fn check_erase_full_range_empties() {
        let mut array = DynamicArray::<u8>::new();
        array.push_back(kani::any());
        array.push_back(kani::any());
        array.erase(0, 2).unwrap();
        assert!(array.is_empty());
        assert!(array.is_safe());
    }
}
