//! Error types for aco-tsp.
//!
//! Instance and parameter validation fails fast with a typed error
//! before any solver state is built; a solve never runs against a
//! corrupted or partially-initialized pheromone field.

use thiserror::Error;

/// Result type alias for solver operations.
pub type AcoResult<T> = Result<T, AcoError>;

/// Errors a solve can be rejected with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    /// Distance matrix is not square, or has fewer than 2 cities.
    #[error("invalid dimension: expected a square matrix with at least 2 cities, got {rows} rows, row {bad_row} has {bad_len} columns")]
    InvalidDimension {
        /// Number of rows in the submitted matrix.
        rows: usize,
        /// First row whose width disagrees with the row count.
        bad_row: usize,
        /// Width of that row.
        bad_len: usize,
    },

    /// An off-diagonal distance is negative, non-finite, or zero.
    ///
    /// Zero distances between distinct cities are rejected because the
    /// inverse-distance desirability term is undefined for them.
    #[error("invalid distance at ({i}, {j}): {value} (off-diagonal entries must be finite and strictly positive)")]
    InvalidDistance {
        /// Row index of the offending entry.
        i: usize,
        /// Column index of the offending entry.
        j: usize,
        /// The offending value.
        value: f64,
    },

    /// A heuristic parameter is out of range.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter {
        /// Parameter name (`alpha`, `beta`, or `rho`).
        name: &'static str,
        /// The offending value.
        value: f64,
    },
}
