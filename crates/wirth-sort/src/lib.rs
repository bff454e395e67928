#![forbid(unsafe_code)]

//! Generic sorting utilities for ordered payloads.
//!
//! `merge` is an in-place, stable merge sort that never allocates an auxiliary buffer: the
//! merge step shifts elements one slot at a time instead. `bogo` is the randomized
//! shuffle-until-sorted baseline kept for comparison.

pub mod bogo;
pub mod error;
pub mod merge;

pub use bogo::BogoSort;
pub use error::{Error, Result};
pub use merge::{is_sorted, is_sorted_by, sort, sort_by, sort_range, sort_range_by};
