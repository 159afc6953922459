use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Precondition violations. All of them are detected before the sequence is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("range end {end} is out of bounds for sequence of length {len}")]
    RangeOutOfBounds { end: usize, len: usize },

    #[error("range starts at {start} but ends at {end}")]
    MalformedRange { start: usize, end: usize },

    #[error("value {value} at index {index} is not one of 0, 1 or 2")]
    Unclassified { index: usize, value: i32 },

    #[error("rank {rank} is out of range for a range of length {len}")]
    RankOutOfRange { rank: usize, len: usize },
}
