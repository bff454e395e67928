#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("sort range {start}..={end} is out of bounds for a slice of length {len}")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
