// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A growable, contiguous, owning sequence container with a checked
//! behavioral contract.
//!
//! [`DynamicArray`] tracks three quantities: `len` (live elements),
//! `capacity` (allocated slots) and `max_size` (the upper bound derived from
//! addressable memory over the element size), and maintains
//! `len <= capacity <= max_size` through every operation. Contract
//! violations (out-of-range access, oversized resize or reserve targets,
//! front/back on an empty container) are signaled through [`Error`] values
//! instead of undefined behavior, so harnesses can assert on them.
//!
//! # Example
//!
//! ```
//! use dynarray::DynamicArray;
//!
//! let mut tickets: DynamicArray<u32> = DynamicArray::new();
//! tickets.push_back(7);
//! tickets.push_back(11);
//! assert_eq!(tickets.len(), 2);
//! assert_eq!(*tickets.back()?, 11);
//! tickets.reverse();
//! assert_eq!(*tickets.front()?, 11);
//! # Ok::<(), dynarray::Error>(())
//! ```

pub use array::{DynamicArray, IntoIter};
pub use error::{Error, Result};
pub use invariant::Invariant;

mod array;
mod error;
mod invariant;
mod raw;
