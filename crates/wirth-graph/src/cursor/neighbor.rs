//! Neighbor cursors are single-direction: neither variant can step back.

use super::{Ascending, Descending};
use crate::error::Result;
use crate::graph::CsrGraph;
use std::fmt;

/// Walks one vertex's neighbor range in adjacency-cache order.
pub struct NeighborCursor<'g, T> {
    graph: &'g CsrGraph<T>,
    vertex: usize,
    neighbors: &'g [usize],
    pos: Ascending,
}

impl<'g, T> NeighborCursor<'g, T> {
    pub(crate) fn new(graph: &'g CsrGraph<T>, vertex: usize, position: usize) -> Self {
        Self {
            graph,
            vertex,
            neighbors: graph.neighbor_slice(vertex),
            pos: Ascending::new(position),
        }
    }

    pub fn vertex(&self) -> usize {
        self.vertex
    }

    pub fn position(&self) -> usize {
        self.pos.get()
    }

    pub fn current(&self) -> Result<usize> {
        self.pos
            .index(self.neighbors.len())
            .map(|idx| self.neighbors[idx])
    }
}

impl<T> Iterator for NeighborCursor<'_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.pos
            .advance(self.neighbors.len())
            .map(|idx| self.neighbors[idx])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.pos.remaining(self.neighbors.len());
        (n, Some(n))
    }
}

impl<T> Clone for NeighborCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NeighborCursor<'_, T> {}

impl<T> PartialEq for NeighborCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph)
            && self.vertex == other.vertex
            && self.pos == other.pos
    }
}

impl<T> Eq for NeighborCursor<'_, T> {}

impl<T> fmt::Debug for NeighborCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NeighborCursor")
            .field("vertex", &self.vertex)
            .field("position", &self.pos.get())
            .finish()
    }
}

/// Walks one vertex's neighbor range from its last entry to its first.
pub struct ReverseNeighborCursor<'g, T> {
    graph: &'g CsrGraph<T>,
    vertex: usize,
    neighbors: &'g [usize],
    pos: Descending,
}

impl<'g, T> ReverseNeighborCursor<'g, T> {
    pub(crate) fn new(graph: &'g CsrGraph<T>, vertex: usize, position: isize) -> Self {
        Self {
            graph,
            vertex,
            neighbors: graph.neighbor_slice(vertex),
            pos: Descending::new(position),
        }
    }

    pub fn vertex(&self) -> usize {
        self.vertex
    }

    pub fn position(&self) -> isize {
        self.pos.get()
    }

    pub fn current(&self) -> Result<usize> {
        self.pos
            .index(self.neighbors.len())
            .map(|idx| self.neighbors[idx])
    }
}

impl<T> Iterator for ReverseNeighborCursor<'_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.pos.advance().map(|idx| self.neighbors[idx])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.pos.remaining();
        (n, Some(n))
    }
}

impl<T> Clone for ReverseNeighborCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ReverseNeighborCursor<'_, T> {}

impl<T> PartialEq for ReverseNeighborCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph)
            && self.vertex == other.vertex
            && self.pos == other.pos
    }
}

impl<T> Eq for ReverseNeighborCursor<'_, T> {}

impl<T> fmt::Debug for ReverseNeighborCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReverseNeighborCursor")
            .field("vertex", &self.vertex)
            .field("position", &self.pos.get())
            .finish()
    }
}
