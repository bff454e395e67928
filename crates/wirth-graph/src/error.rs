#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("vertex index out of range: {vertex} (vertex count is {vertex_count})")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("cursor position out of range: {position} (sequence length is {len})")]
    CursorOutOfRange { position: isize, len: usize },

    #[error("self-loops are disabled: cannot connect vertex {vertex} to itself")]
    SelfLoop { vertex: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
