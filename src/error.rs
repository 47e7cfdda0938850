// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The error taxonomy of the container contract.
//!
//! Every contract violation is signaled as a value so callers (and the test
//! harness) can assert on it deterministically. The container never panics on
//! a bad index or size, and never returns garbage.

use thiserror::Error;

/// A contract violation raised by [`DynamicArray`](crate::DynamicArray).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Bounds-checked access past the live region, or an erase bound past it.
    #[error("index {index} is out of range for a collection of {len} elements")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The number of live elements at the time of the access.
        len: usize,
    },

    /// A requested length or capacity the container cannot represent, or an
    /// erase range whose start lies past its end.
    #[error("requested size {requested} exceeds the maximum of {max}")]
    InvalidSize {
        /// The size (or range start) that was asked for.
        requested: usize,
        /// The largest value the operation accepts.
        max: usize,
    },

    /// `front` or `back` on an empty collection.
    #[error("cannot access the front or back of an empty collection")]
    EmptyAccess,
}

pub type Result<T> = std::result::Result<T, Error>;
