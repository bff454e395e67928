//! Cursors over a [`CsrGraph`](crate::CsrGraph).
//!
//! Every family comes as a forward and a reverse cursor. A cursor borrows the graph, so
//! the graph cannot be mutated while a cursor is alive; removal through a cursor goes via
//! its [`position`](VertexCursor::position) and `CsrGraph::remove_vertex_at` /
//! `CsrGraph::remove_edge_at`.
//!
//! Cursors implement [`Iterator`]: `next()` yields the current element and advances, and
//! `None` marks exhaustion. `current()` reads without moving and fails with
//! [`Error::CursorOutOfRange`](crate::Error::CursorOutOfRange) past either end. All
//! families except the neighbor cursors can also step back with `prev()`.
//!
//! Two cursors are equal when they borrow the same graph instance, walk the same vertex
//! (for vertex-scoped families) and sit at the same position.

mod edge;
mod incident;
mod neighbor;
mod vertex;

pub use edge::{EdgeCursor, ReverseEdgeCursor};
pub use incident::{IncidentEdgeCursor, ReverseIncidentEdgeCursor};
pub use neighbor::{NeighborCursor, ReverseNeighborCursor};
pub use vertex::{ReverseVertexCursor, VertexCursor};

use crate::error::{Error, Result};

/// Position in `0..=len`, walking up. `len` is the end position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ascending(usize);

impl Ascending {
    pub(crate) fn new(position: usize) -> Self {
        Self(position)
    }

    pub(crate) fn get(self) -> usize {
        self.0
    }

    pub(crate) fn index(self, len: usize) -> Result<usize> {
        if self.0 < len {
            Ok(self.0)
        } else {
            Err(Error::CursorOutOfRange {
                position: self.0 as isize,
                len,
            })
        }
    }

    pub(crate) fn advance(&mut self, len: usize) -> Option<usize> {
        if self.0 >= len {
            return None;
        }
        let idx = self.0;
        self.0 += 1;
        Some(idx)
    }

    pub(crate) fn retreat(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        self.0 -= 1;
        Some(self.0)
    }

    pub(crate) fn remaining(self, len: usize) -> usize {
        len.saturating_sub(self.0)
    }
}

/// Position in `-1..len`, walking down. `-1` is the end position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Descending(isize);

impl Descending {
    pub(crate) fn new(position: isize) -> Self {
        Self(position)
    }

    pub(crate) fn get(self) -> isize {
        self.0
    }

    pub(crate) fn index(self, len: usize) -> Result<usize> {
        if self.0 >= 0 && (self.0 as usize) < len {
            Ok(self.0 as usize)
        } else {
            Err(Error::CursorOutOfRange {
                position: self.0,
                len,
            })
        }
    }

    pub(crate) fn advance(&mut self) -> Option<usize> {
        if self.0 < 0 {
            return None;
        }
        let idx = self.0 as usize;
        self.0 -= 1;
        Some(idx)
    }

    /// Steps back towards the reverse-begin position (the last element).
    pub(crate) fn retreat(&mut self, len: usize) -> Option<usize> {
        if self.0 + 1 >= len as isize {
            return None;
        }
        self.0 += 1;
        Some(self.0 as usize)
    }

    pub(crate) fn remaining(self) -> usize {
        (self.0 + 1).max(0) as usize
    }
}
