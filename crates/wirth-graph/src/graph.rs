//! The CSR graph store.
//!
//! `CsrGraph` owns three pieces of state:
//!
//! - the per-vertex payload array, index-aligned with vertex ids `0..vertex_count`,
//! - the edge list, in insertion order, with every undirected edge stored as `(min, max)`,
//! - an adjacency cache derived from the edge list (see `adj`).
//!
//! The edge list is the source of truth. Every edit that touches it, or that renumbers
//! vertices, rebuilds the cache in full.

mod adj;
mod options;

pub use options::GraphOptions;

use crate::cursor::{
    EdgeCursor, IncidentEdgeCursor, NeighborCursor, ReverseEdgeCursor, ReverseIncidentEdgeCursor,
    ReverseNeighborCursor, ReverseVertexCursor, VertexCursor,
};
use crate::error::{Error, Result};
use adj::Adjacency;
use std::cmp::Ordering;
use std::fmt;

/// An undirected edge as `(min, max)`.
pub type Edge = (usize, usize);

/// Orders the endpoints of an undirected edge.
pub fn canonical(u: usize, v: usize) -> Edge {
    if u <= v { (u, v) } else { (v, u) }
}

#[derive(Debug, Clone)]
pub struct CsrGraph<T> {
    options: GraphOptions,
    vertex_data: Vec<T>,
    edges: Vec<Edge>,
    adj: Adjacency,
}

impl<T> Default for CsrGraph<T> {
    fn default() -> Self {
        Self {
            options: GraphOptions::default(),
            vertex_data: Vec::new(),
            edges: Vec::new(),
            adj: Adjacency::default(),
        }
    }
}

impl<T: Default> CsrGraph<T> {
    /// Creates `vertex_count` isolated vertices with default payloads.
    pub fn new(vertex_count: usize) -> Self {
        Self::with_options(vertex_count, GraphOptions::default())
    }

    pub fn with_options(vertex_count: usize, options: GraphOptions) -> Self {
        let vertex_data: Vec<T> = (0..vertex_count).map(|_| T::default()).collect();
        Self {
            options,
            vertex_data,
            edges: Vec::new(),
            adj: Adjacency::build(vertex_count, &[]),
        }
    }

    /// Creates `vertex_count` vertices joined by `edges`.
    ///
    /// Endpoints are validated up front; repeated pairs (in either direction) are kept once.
    pub fn with_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut g = Self::new(vertex_count);
        g.add_edges(edges)?;
        Ok(g)
    }
}

impl<T> CsrGraph<T> {
    fn rebuild(&mut self) {
        self.adj = Adjacency::build(self.vertex_data.len(), &self.edges);
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if self.has_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    fn check_edge(&self, u: usize, v: usize) -> Result<Edge> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v && !self.options.allow_self_loops {
            return Err(Error::SelfLoop { vertex: u });
        }
        Ok(canonical(u, v))
    }

    /// Neighbor range of `vertex` in the adjacency cache; empty for unknown vertices.
    pub(crate) fn neighbor_slice(&self, vertex: usize) -> &[usize] {
        if !self.has_vertex(vertex) {
            return &[];
        }
        self.adj.neighbors(vertex)
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_data.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_data.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The edge list in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// All payloads, indexed by vertex.
    pub fn vertex_data(&self) -> &[T] {
        &self.vertex_data
    }

    pub fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_data.len()
    }

    /// Scans `u`'s neighbor range. Unknown endpoints yield `false`.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        if !self.has_vertex(u) || !self.has_vertex(v) {
            return false;
        }
        self.adj.neighbors(u).contains(&v)
    }

    /// Degree of `vertex`, or `0` if it does not exist.
    pub fn vertex_degree(&self, vertex: usize) -> usize {
        if !self.has_vertex(vertex) {
            return 0;
        }
        self.adj.degree(vertex)
    }

    /// Number of edges sharing an endpoint with `(u, v)`, or `0` if the edge does not exist.
    pub fn edge_degree(&self, (u, v): Edge) -> usize {
        if !self.has_edge(u, v) {
            return 0;
        }
        // u and v list each other once.
        self.vertex_degree(u) + self.vertex_degree(v) - 2
    }

    /// Appends an isolated vertex and returns its index.
    pub fn add_vertex(&mut self, data: T) -> usize {
        self.vertex_data.push(data);
        self.adj.push_isolated();
        self.vertex_data.len() - 1
    }

    /// Connects `u` and `v`. Adding an existing edge, in either direction, is a no-op.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        let edge = self.check_edge(u, v)?;
        if self.has_edge(u, v) {
            return Ok(());
        }
        self.edges.push(edge);
        self.rebuild();
        Ok(())
    }

    /// Adds a batch of edges with a single rebuild.
    ///
    /// Every pair is validated before the edge list is touched, so a bad endpoint leaves the
    /// graph unchanged.
    pub fn add_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut pending: Vec<Edge> = Vec::new();
        for (u, v) in edges {
            pending.push(self.check_edge(u, v)?);
        }

        let before = self.edges.len();
        for edge in pending {
            if !self.edges.contains(&edge) {
                self.edges.push(edge);
            }
        }
        if self.edges.len() != before {
            self.rebuild();
        }
        Ok(())
    }

    /// Removes the edge `(u, v)` in either direction. Returns `false` if it was absent.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> bool {
        let edge = canonical(u, v);
        let Some(idx) = self.edges.iter().position(|&e| e == edge) else {
            return false;
        };
        self.edges.remove(idx);
        self.rebuild();
        true
    }

    /// Removes `vertex` with all incident edges and shifts every higher index down by one.
    pub fn remove_vertex(&mut self, vertex: usize) -> bool {
        if !self.has_vertex(vertex) {
            return false;
        }

        let before = self.edges.len();
        self.edges.retain(|&(u, v)| u != vertex && v != vertex);
        let dropped = before - self.edges.len();

        // Shifting both ends by the same rule keeps every pair ordered as (min, max).
        for (u, v) in &mut self.edges {
            if *u > vertex {
                *u -= 1;
            }
            if *v > vertex {
                *v -= 1;
            }
        }

        self.vertex_data.remove(vertex);
        self.rebuild();
        tracing::debug!(vertex, dropped_edges = dropped, "removed vertex");
        true
    }

    pub fn set_vertex_data(&mut self, vertex: usize, data: T) -> Result<()> {
        self.check_vertex(vertex)?;
        self.vertex_data[vertex] = data;
        Ok(())
    }

    pub fn get_vertex_data(&self, vertex: usize) -> Result<&T> {
        self.check_vertex(vertex)?;
        Ok(&self.vertex_data[vertex])
    }

    /// Drops every vertex and edge.
    pub fn clear(&mut self) {
        tracing::debug!(
            vertex_count = self.vertex_count(),
            edge_count = self.edge_count(),
            "clearing graph"
        );
        self.vertex_data.clear();
        self.edges.clear();
        self.adj = Adjacency::default();
    }

    /// Copies the payloads out and orders them with the in-place merge sort.
    pub fn sorted_vertex_data(&self) -> Vec<T>
    where
        T: Clone + PartialOrd,
    {
        let mut data = self.vertex_data.clone();
        wirth_sort::sort(&mut data);
        data
    }

    /// Removes the vertex at a forward vertex cursor's position and returns a cursor at the
    /// same position, which now refers to the following vertex (or the end).
    pub fn remove_vertex_at(&mut self, position: usize) -> Result<VertexCursor<'_, T>> {
        if !self.has_vertex(position) {
            return Err(Error::CursorOutOfRange {
                position: position as isize,
                len: self.vertex_count(),
            });
        }
        self.remove_vertex(position);
        Ok(VertexCursor::new(self, position))
    }

    /// Removes the edge at a forward edge cursor's position and returns a cursor at the same
    /// position.
    pub fn remove_edge_at(&mut self, position: usize) -> Result<EdgeCursor<'_, T>> {
        let Some(&(u, v)) = self.edges.get(position) else {
            return Err(Error::CursorOutOfRange {
                position: position as isize,
                len: self.edge_count(),
            });
        };
        self.remove_edge(u, v);
        Ok(EdgeCursor::new(self, position))
    }

    // Cursor factories. The vertex-scoped ones fail for unknown vertices.

    pub fn vertices_begin(&self) -> VertexCursor<'_, T> {
        VertexCursor::new(self, 0)
    }

    pub fn vertices_end(&self) -> VertexCursor<'_, T> {
        VertexCursor::new(self, self.vertex_count())
    }

    pub fn vertices_rbegin(&self) -> ReverseVertexCursor<'_, T> {
        ReverseVertexCursor::new(self, self.vertex_count() as isize - 1)
    }

    pub fn vertices_rend(&self) -> ReverseVertexCursor<'_, T> {
        ReverseVertexCursor::new(self, -1)
    }

    pub fn edges_begin(&self) -> EdgeCursor<'_, T> {
        EdgeCursor::new(self, 0)
    }

    pub fn edges_end(&self) -> EdgeCursor<'_, T> {
        EdgeCursor::new(self, self.edge_count())
    }

    pub fn edges_rbegin(&self) -> ReverseEdgeCursor<'_, T> {
        ReverseEdgeCursor::new(self, self.edge_count() as isize - 1)
    }

    pub fn edges_rend(&self) -> ReverseEdgeCursor<'_, T> {
        ReverseEdgeCursor::new(self, -1)
    }

    pub fn neighbors_begin(&self, vertex: usize) -> Result<NeighborCursor<'_, T>> {
        self.check_vertex(vertex)?;
        Ok(NeighborCursor::new(self, vertex, 0))
    }

    pub fn neighbors_end(&self, vertex: usize) -> Result<NeighborCursor<'_, T>> {
        self.check_vertex(vertex)?;
        Ok(NeighborCursor::new(self, vertex, self.adj.degree(vertex)))
    }

    pub fn neighbors_rbegin(&self, vertex: usize) -> Result<ReverseNeighborCursor<'_, T>> {
        self.check_vertex(vertex)?;
        let last = self.adj.degree(vertex) as isize - 1;
        Ok(ReverseNeighborCursor::new(self, vertex, last))
    }

    pub fn neighbors_rend(&self, vertex: usize) -> Result<ReverseNeighborCursor<'_, T>> {
        self.check_vertex(vertex)?;
        Ok(ReverseNeighborCursor::new(self, vertex, -1))
    }

    pub fn vertex_edges_begin(&self, vertex: usize) -> Result<IncidentEdgeCursor<'_, T>> {
        self.check_vertex(vertex)?;
        Ok(IncidentEdgeCursor::new(self, vertex, 0))
    }

    pub fn vertex_edges_end(&self, vertex: usize) -> Result<IncidentEdgeCursor<'_, T>> {
        self.check_vertex(vertex)?;
        Ok(IncidentEdgeCursor::new(self, vertex, self.adj.degree(vertex)))
    }

    pub fn vertex_edges_rbegin(
        &self,
        vertex: usize,
    ) -> Result<ReverseIncidentEdgeCursor<'_, T>> {
        self.check_vertex(vertex)?;
        let last = self.adj.degree(vertex) as isize - 1;
        Ok(ReverseIncidentEdgeCursor::new(self, vertex, last))
    }

    pub fn vertex_edges_rend(&self, vertex: usize) -> Result<ReverseIncidentEdgeCursor<'_, T>> {
        self.check_vertex(vertex)?;
        Ok(ReverseIncidentEdgeCursor::new(self, vertex, -1))
    }
}

/// Graphs are equal when vertex counts, payloads and the edge lists (in insertion order)
/// all match. Options are not compared.
impl<T: PartialEq> PartialEq for CsrGraph<T> {
    fn eq(&self, other: &Self) -> bool {
        self.vertex_count() == other.vertex_count()
            && self.edges == other.edges
            && self.vertex_data == other.vertex_data
    }
}

/// Orders by vertex count, then by edge count. Unequal graphs with the same counts are
/// incomparable.
impl<T: PartialEq> PartialOrd for CsrGraph<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        let lhs = (self.vertex_count(), self.edge_count());
        let rhs = (other.vertex_count(), other.edge_count());
        match lhs.cmp(&rhs) {
            Ordering::Equal => None,
            ord => Some(ord),
        }
    }
}

impl<T: fmt::Display> fmt::Display for CsrGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "CsrGraph(vertices={}, edges={})",
            self.vertex_count(),
            self.edge_count()
        )?;
        for (v, data) in self.vertex_data.iter().enumerate() {
            writeln!(f, "Vertex {v} (data: {data}): {:?}", self.adj.neighbors(v))?;
        }
        Ok(())
    }
}
