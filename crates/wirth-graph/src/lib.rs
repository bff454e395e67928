#![forbid(unsafe_code)]

//! A compact, array-backed undirected graph.
//!
//! [`CsrGraph`] stores vertices as dense indices with one payload each, keeps the edge list
//! as `(min, max)` pairs in insertion order, and derives a CSR adjacency cache (offsets plus
//! a flattened neighbor list) from it. The cache is rebuilt after every structural edit so
//! neighbor enumeration is a plain slice walk.
//!
//! Four cursor families read from the graph, each with a forward and a reverse variant:
//! vertices, edges, the neighbors of one vertex, and the edges incident to one vertex.

pub mod cursor;
pub mod error;
pub mod graph;

pub use cursor::{
    EdgeCursor, IncidentEdgeCursor, NeighborCursor, ReverseEdgeCursor, ReverseIncidentEdgeCursor,
    ReverseNeighborCursor, ReverseVertexCursor, VertexCursor,
};
pub use error::{Error, Result};
pub use graph::{CsrGraph, Edge, GraphOptions, canonical};
