//! The CSR adjacency cache used by [`CsrGraph`](super::CsrGraph).
//!
//! `start` holds `vertex_count + 1` offsets into `ends`; vertex `v`'s neighbors live in
//! `ends[start[v]..start[v + 1]]`. Every edge contributes one entry to each endpoint, so
//! `ends.len() == 2 * edge_count`. The cache is derived from the edge list and is always
//! rebuilt from scratch, since any edit can shift offsets globally.

use super::Edge;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(in crate::graph) struct Adjacency {
    pub(in crate::graph) start: Vec<usize>,
    pub(in crate::graph) ends: Vec<usize>,
}

impl Default for Adjacency {
    fn default() -> Self {
        Self {
            start: vec![0],
            ends: Vec::new(),
        }
    }
}

impl Adjacency {
    /// Two-pass construction: count degrees, prefix-sum into `start`, then scatter each
    /// endpoint into the other's range through a per-vertex write cursor.
    ///
    /// Neighbor order within a range follows edge-list order. All endpoints must be
    /// `< vertex_count`; callers validate before pushing edges.
    pub(in crate::graph) fn build(vertex_count: usize, edges: &[Edge]) -> Self {
        let mut degree = vec![0usize; vertex_count];
        for &(u, v) in edges {
            degree[u] += 1;
            degree[v] += 1;
        }

        let mut start = Vec::with_capacity(vertex_count + 1);
        start.push(0);
        let mut acc = 0usize;
        for d in &degree {
            acc += d;
            start.push(acc);
        }

        let mut cursor = start[..vertex_count].to_vec();
        let mut ends = vec![0usize; 2 * edges.len()];
        for &(u, v) in edges {
            ends[cursor[u]] = v;
            cursor[u] += 1;
            ends[cursor[v]] = u;
            cursor[v] += 1;
        }

        tracing::trace!(
            vertex_count,
            edge_count = edges.len(),
            "rebuilt adjacency cache"
        );

        Self { start, ends }
    }

    /// Registers a new isolated vertex by repeating the last offset.
    pub(in crate::graph) fn push_isolated(&mut self) {
        let last = self.start.last().copied().unwrap_or(0);
        self.start.push(last);
    }

    pub(in crate::graph) fn neighbors(&self, v: usize) -> &[usize] {
        &self.ends[self.start[v]..self.start[v + 1]]
    }

    pub(in crate::graph) fn degree(&self, v: usize) -> usize {
        self.start[v + 1] - self.start[v]
    }
}
