// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This module introduces the `Invariant` trait: a programmatic way to
//! specify (in Rust) the safety properties a value must uphold at the
//! boundaries to safe code. It can be checked dynamically from tests and
//! statically from proof harnesses.

use crate::DynamicArray;

/// Specifies and checks the safety invariant of a type.
///
/// ```rust
/// use dynarray::{DynamicArray, Invariant};
///
/// let mut seats: DynamicArray<u16> = DynamicArray::new();
/// seats.push_back(40);
/// assert!(seats.is_safe());
/// ```
pub trait Invariant {
    /// True iff the value currently upholds its safety invariant.
    fn is_safe(&self) -> bool;
}

impl<T> Invariant for DynamicArray<T> {
    /// `len <= capacity <= max_size`, the container's structural contract.
    fn is_safe(&self) -> bool {
        self.len() <= self.capacity() && self.capacity() <= self.max_size()
    }
}
