//! Graph configuration options.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphOptions {
    /// Accept `add_edge(v, v)`. A self-loop puts `v` twice into its own neighbor range.
    pub allow_self_loops: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            allow_self_loops: true,
        }
    }
}
