use super::{Ascending, Descending};
use crate::error::Result;
use crate::graph::{CsrGraph, Edge};
use std::fmt;

/// Walks the edge list in insertion order.
pub struct EdgeCursor<'g, T> {
    graph: &'g CsrGraph<T>,
    pos: Ascending,
}

impl<'g, T> EdgeCursor<'g, T> {
    pub(crate) fn new(graph: &'g CsrGraph<T>, position: usize) -> Self {
        Self {
            graph,
            pos: Ascending::new(position),
        }
    }

    pub fn position(&self) -> usize {
        self.pos.get()
    }

    pub fn current(&self) -> Result<Edge> {
        let edges = self.graph.edges();
        self.pos.index(edges.len()).map(|idx| edges[idx])
    }

    pub fn prev(&mut self) -> Option<Edge> {
        let edges = self.graph.edges();
        self.pos.retreat().map(|idx| edges[idx])
    }
}

impl<T> Iterator for EdgeCursor<'_, T> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        let edges = self.graph.edges();
        self.pos.advance(edges.len()).map(|idx| edges[idx])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.pos.remaining(self.graph.edge_count());
        (n, Some(n))
    }
}

impl<T> Clone for EdgeCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EdgeCursor<'_, T> {}

impl<T> PartialEq for EdgeCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.pos == other.pos
    }
}

impl<T> Eq for EdgeCursor<'_, T> {}

impl<T> fmt::Debug for EdgeCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeCursor")
            .field("position", &self.pos.get())
            .finish()
    }
}

/// Walks the edge list from the most recently added edge back to the first.
pub struct ReverseEdgeCursor<'g, T> {
    graph: &'g CsrGraph<T>,
    pos: Descending,
}

impl<'g, T> ReverseEdgeCursor<'g, T> {
    pub(crate) fn new(graph: &'g CsrGraph<T>, position: isize) -> Self {
        Self {
            graph,
            pos: Descending::new(position),
        }
    }

    pub fn position(&self) -> isize {
        self.pos.get()
    }

    pub fn current(&self) -> Result<Edge> {
        let edges = self.graph.edges();
        self.pos.index(edges.len()).map(|idx| edges[idx])
    }

    pub fn prev(&mut self) -> Option<Edge> {
        let edges = self.graph.edges();
        self.pos.retreat(edges.len()).map(|idx| edges[idx])
    }
}

impl<T> Iterator for ReverseEdgeCursor<'_, T> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        let edges = self.graph.edges();
        self.pos.advance().map(|idx| edges[idx])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.pos.remaining();
        (n, Some(n))
    }
}

impl<T> Clone for ReverseEdgeCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ReverseEdgeCursor<'_, T> {}

impl<T> PartialEq for ReverseEdgeCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.pos == other.pos
    }
}

impl<T> Eq for ReverseEdgeCursor<'_, T> {}

impl<T> fmt::Debug for ReverseEdgeCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReverseEdgeCursor")
            .field("position", &self.pos.get())
            .finish()
    }
}
