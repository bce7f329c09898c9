//! Error types for the transform and the peer benchmarks

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors produced while generating or transforming a sequence.
///
/// Both variants abort the whole operation: no partially transformed data is
/// ever handed back to the caller.
#[derive(Error, Debug)]
pub enum FftError {
    /// The sequence length is zero or not a power of two
    #[error("invalid transform size {len}: length must be a non-zero power of two")]
    InvalidSize { len: usize },

    /// A temporary or output buffer could not be reserved
    #[error("failed to allocate a buffer of {len} complex samples")]
    Allocation {
        len: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Errors produced by the matrix multiply benchmark
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// The inner dimensions of the operands do not agree
    #[error("cannot multiply a {left}x{left} matrix by a {right}x{right} matrix")]
    DimensionMismatch { left: usize, right: usize },
}
