//! Error types.
//!
//! Two families, matching the two stages a route query goes through:
//! - [`MatrixError`]: the input could not be turned into a [`CostMatrix`](crate::matrix::CostMatrix).
//! - [`SolveError`]: a well-formed matrix has no answer a solver can report.

use thiserror::Error;

/// Malformed input, raised before any solver runs.
#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("diagonal cell for port {port} must be a finite cost")]
    UnreachableDiagonal { port: usize },

    #[error("invalid cost token {token:?} at row {row}, column {column}")]
    InvalidToken {
        row: usize,
        column: usize,
        token: String,
    },

    #[error("failed to read matrix input: {0}")]
    Io(#[from] std::io::Error),
}

/// A solver could not produce a minimum cost for an otherwise valid matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Every forward route to `destination` passes through an unreachable move.
    #[error("no forward route reaches port {destination}")]
    Infeasible { destination: usize },

    /// `destination` is reachable, but every route to it costs more than `u64::MAX`.
    #[error("cost overflow on move {origin} -> {destination}")]
    CostOverflow { origin: usize, destination: usize },
}
