//! Shuffle-until-sorted.
//!
//! `BogoSort` works on its own copy of the input, so the caller's slice is never touched.
//! Expected running time is factorial in the input length; it is only meant for tiny inputs.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;

pub struct BogoSort<T, R = StdRng> {
    items: Vec<T>,
    rng: R,
}

impl<T: Clone> BogoSort<T, StdRng> {
    pub fn new(items: &[T]) -> Self {
        Self::with_rng(items, StdRng::from_entropy())
    }
}

impl<T: Clone, R: Rng> BogoSort<T, R> {
    /// Uses `rng` for shuffling. Pass a seeded generator for reproducible runs.
    pub fn with_rng(items: &[T], rng: R) -> Self {
        Self {
            items: items.to_vec(),
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.items.shuffle(&mut self.rng);
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn set_items(&mut self, items: &[T]) {
        self.items = items.to_vec();
    }
}

impl<T: Clone + PartialOrd, R: Rng> BogoSort<T, R> {
    pub fn is_sorted(&self) -> bool {
        crate::merge::is_sorted(&self.items)
    }

    /// Shuffles until the copy is ordered and returns it.
    pub fn sort(&mut self) -> Vec<T> {
        let mut shuffles: u64 = 0;
        while !self.is_sorted() {
            self.shuffle();
            shuffles += 1;
        }
        tracing::trace!(len = self.items.len(), shuffles, "bogosort finished");
        self.items.clone()
    }
}

impl<T, R> fmt::Display for BogoSort<T, R>
where
    T: fmt::Debug + PartialOrd,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BogoSort(array={:?}, sorted={})",
            self.items,
            crate::merge::is_sorted(&self.items)
        )
    }
}
