use super::{Ascending, Descending};
use crate::error::Result;
use crate::graph::CsrGraph;
use std::fmt;

/// Walks vertex ids `0..vertex_count`.
pub struct VertexCursor<'g, T> {
    graph: &'g CsrGraph<T>,
    pos: Ascending,
}

impl<'g, T> VertexCursor<'g, T> {
    pub(crate) fn new(graph: &'g CsrGraph<T>, position: usize) -> Self {
        Self {
            graph,
            pos: Ascending::new(position),
        }
    }

    pub fn position(&self) -> usize {
        self.pos.get()
    }

    pub fn current(&self) -> Result<usize> {
        self.pos.index(self.graph.vertex_count())
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.pos.retreat()
    }
}

impl<T> Iterator for VertexCursor<'_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.pos.advance(self.graph.vertex_count())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.pos.remaining(self.graph.vertex_count());
        (n, Some(n))
    }
}

impl<T> Clone for VertexCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VertexCursor<'_, T> {}

impl<T> PartialEq for VertexCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.pos == other.pos
    }
}

impl<T> Eq for VertexCursor<'_, T> {}

impl<T> fmt::Debug for VertexCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VertexCursor")
            .field("position", &self.pos.get())
            .finish()
    }
}

/// Walks vertex ids from `vertex_count - 1` down to `0`.
pub struct ReverseVertexCursor<'g, T> {
    graph: &'g CsrGraph<T>,
    pos: Descending,
}

impl<'g, T> ReverseVertexCursor<'g, T> {
    pub(crate) fn new(graph: &'g CsrGraph<T>, position: isize) -> Self {
        Self {
            graph,
            pos: Descending::new(position),
        }
    }

    pub fn position(&self) -> isize {
        self.pos.get()
    }

    pub fn current(&self) -> Result<usize> {
        self.pos.index(self.graph.vertex_count())
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.pos.retreat(self.graph.vertex_count())
    }
}

impl<T> Iterator for ReverseVertexCursor<'_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.pos.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.pos.remaining();
        (n, Some(n))
    }
}

impl<T> Clone for ReverseVertexCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ReverseVertexCursor<'_, T> {}

impl<T> PartialEq for ReverseVertexCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.pos == other.pos
    }
}

impl<T> Eq for ReverseVertexCursor<'_, T> {}

impl<T> fmt::Debug for ReverseVertexCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReverseVertexCursor")
            .field("position", &self.pos.get())
            .finish()
    }
}
