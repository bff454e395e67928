use super::{Ascending, Descending};
use crate::error::Result;
use crate::graph::{CsrGraph, Edge, canonical};
use std::fmt;

/// Walks the edges incident to one vertex, each reported as `(min, max)`.
///
/// The order follows the vertex's neighbor range, not the global edge list.
pub struct IncidentEdgeCursor<'g, T> {
    graph: &'g CsrGraph<T>,
    vertex: usize,
    neighbors: &'g [usize],
    pos: Ascending,
}

impl<'g, T> IncidentEdgeCursor<'g, T> {
    pub(crate) fn new(graph: &'g CsrGraph<T>, vertex: usize, position: usize) -> Self {
        Self {
            graph,
            vertex,
            neighbors: graph.neighbor_slice(vertex),
            pos: Ascending::new(position),
        }
    }

    fn edge_at(&self, idx: usize) -> Edge {
        canonical(self.vertex, self.neighbors[idx])
    }

    pub fn vertex(&self) -> usize {
        self.vertex
    }

    pub fn position(&self) -> usize {
        self.pos.get()
    }

    pub fn current(&self) -> Result<Edge> {
        self.pos
            .index(self.neighbors.len())
            .map(|idx| self.edge_at(idx))
    }

    pub fn prev(&mut self) -> Option<Edge> {
        self.pos.retreat().map(|idx| self.edge_at(idx))
    }
}

impl<T> Iterator for IncidentEdgeCursor<'_, T> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        self.pos
            .advance(self.neighbors.len())
            .map(|idx| self.edge_at(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.pos.remaining(self.neighbors.len());
        (n, Some(n))
    }
}

impl<T> Clone for IncidentEdgeCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for IncidentEdgeCursor<'_, T> {}

impl<T> PartialEq for IncidentEdgeCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph)
            && self.vertex == other.vertex
            && self.pos == other.pos
    }
}

impl<T> Eq for IncidentEdgeCursor<'_, T> {}

impl<T> fmt::Debug for IncidentEdgeCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IncidentEdgeCursor")
            .field("vertex", &self.vertex)
            .field("position", &self.pos.get())
            .finish()
    }
}

pub struct ReverseIncidentEdgeCursor<'g, T> {
    graph: &'g CsrGraph<T>,
    vertex: usize,
    neighbors: &'g [usize],
    pos: Descending,
}

impl<'g, T> ReverseIncidentEdgeCursor<'g, T> {
    pub(crate) fn new(graph: &'g CsrGraph<T>, vertex: usize, position: isize) -> Self {
        Self {
            graph,
            vertex,
            neighbors: graph.neighbor_slice(vertex),
            pos: Descending::new(position),
        }
    }

    fn edge_at(&self, idx: usize) -> Edge {
        canonical(self.vertex, self.neighbors[idx])
    }

    pub fn vertex(&self) -> usize {
        self.vertex
    }

    pub fn position(&self) -> isize {
        self.pos.get()
    }

    pub fn current(&self) -> Result<Edge> {
        self.pos
            .index(self.neighbors.len())
            .map(|idx| self.edge_at(idx))
    }

    pub fn prev(&mut self) -> Option<Edge> {
        let len = self.neighbors.len();
        self.pos.retreat(len).map(|idx| self.edge_at(idx))
    }
}

impl<T> Iterator for ReverseIncidentEdgeCursor<'_, T> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        self.pos.advance().map(|idx| self.edge_at(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.pos.remaining();
        (n, Some(n))
    }
}

impl<T> Clone for ReverseIncidentEdgeCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ReverseIncidentEdgeCursor<'_, T> {}

impl<T> PartialEq for ReverseIncidentEdgeCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph)
            && self.vertex == other.vertex
            && self.pos == other.pos
    }
}

impl<T> Eq for ReverseIncidentEdgeCursor<'_, T> {}

impl<T> fmt::Debug for ReverseIncidentEdgeCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReverseIncidentEdgeCursor")
            .field("vertex", &self.vertex)
            .field("position", &self.pos.get())
            .finish()
    }
}
