//! Errors reported by the public sampling entry points.

use thiserror::Error;

/// Invalid input to a sampling call.
///
/// All variants are detected before any sequence is generated, so an error
/// never comes with partial results.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The alphabet contains no symbols, so no sequence can be drawn from it.
    #[error("Alphabet may not be empty")]
    InvalidAlphabet,

    /// Zero samples were requested for a length class.
    #[error("At least one sample per length is required, got {0}")]
    InsufficientSamples(usize),

    /// The requested sequence length is not positive.
    #[error("Sequence length must be positive, got {0}")]
    InvalidLength(usize),

    /// Matrix data does not match its declared shape.
    #[error("Matrix shape {rows}x{cols} does not match its {len} values")]
    InvalidShape { rows: usize, cols: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
