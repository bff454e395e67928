//! In-place merge sort.
//!
//! The split is the usual recursive halving. The merge walks a `left` and a `right` cursor;
//! whenever the right element has to come first it is carried down to `left` one slot at a
//! time, so no auxiliary buffer is ever allocated. The price is an O(n^2) worst-case merge.
//!
//! Elements only ever move past strictly greater ones, which keeps the sort stable.

use crate::error::{Error, Result};
use std::cmp::Ordering;

/// Sorts `items` ascending in place.
pub fn sort<T: PartialOrd>(items: &mut [T]) {
    if items.len() < 2 {
        return;
    }
    let end = items.len() - 1;
    merge_sort(items, 0, end, &mut |a: &T, b: &T| a <= b);
}

/// Sorts `items` in place using `compare` as the ordering.
pub fn sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() < 2 {
        return;
    }
    let end = items.len() - 1;
    merge_sort(items, 0, end, &mut |a: &T, b: &T| {
        compare(a, b) != Ordering::Greater
    });
}

/// Sorts the inclusive range `start..=end` of `items`, leaving the rest untouched.
///
/// An empty or single-element range (`start >= end`) is a no-op.
pub fn sort_range<T: PartialOrd>(items: &mut [T], start: usize, end: usize) -> Result<()> {
    if start >= end {
        return Ok(());
    }
    check_range(items.len(), start, end)?;
    merge_sort(items, start, end, &mut |a: &T, b: &T| a <= b);
    Ok(())
}

pub fn sort_range_by<T, F>(
    items: &mut [T],
    start: usize,
    end: usize,
    mut compare: F,
) -> Result<()>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if start >= end {
        return Ok(());
    }
    check_range(items.len(), start, end)?;
    merge_sort(items, start, end, &mut |a: &T, b: &T| {
        compare(a, b) != Ordering::Greater
    });
    Ok(())
}

/// Returns `true` if every adjacent pair satisfies `<=`.
pub fn is_sorted<T: PartialOrd>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0] <= w[1])
}

pub fn is_sorted_by<T, F>(items: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    items
        .windows(2)
        .all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}

fn check_range(len: usize, start: usize, end: usize) -> Result<()> {
    if end >= len {
        return Err(Error::RangeOutOfBounds { start, end, len });
    }
    Ok(())
}

fn merge_sort<T, F>(items: &mut [T], start: usize, end: usize, is_le: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if start >= end {
        return;
    }
    let mid = start + (end - start) / 2;
    merge_sort(items, start, mid, is_le);
    merge_sort(items, mid + 1, end, is_le);
    merge_in_place(items, start, mid, end, is_le);
}

fn merge_in_place<T, F>(items: &mut [T], start: usize, mut mid: usize, end: usize, is_le: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut left = start;
    let mut right = mid + 1;

    while left <= mid && right <= end {
        if is_le(&items[left], &items[right]) {
            left += 1;
            continue;
        }

        // Carry items[right] down to `left`; everything in [left, right) moves up one slot.
        let mut index = right;
        while index > left {
            items.swap(index - 1, index);
            index -= 1;
        }

        left += 1;
        mid += 1;
        right += 1;
    }
}
