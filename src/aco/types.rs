//! Problem instance and tour representation.

use crate::error::{AcoError, AcoResult};

/// An immutable, validated TSP instance: a complete graph given as an
/// n×n distance matrix.
///
/// The matrix is stored row-major in a single flat allocation. Only
/// off-diagonal entries are meaningful; the diagonal is ignored.
/// Construction rejects non-square input, fewer than 2 cities, and any
/// off-diagonal entry that is negative, non-finite, or zero (a zero
/// distance between distinct cities would make the inverse-distance
/// desirability term undefined).
#[derive(Debug, Clone)]
pub struct TspInstance {
    n: usize,
    distances: Vec<f64>,
}

impl TspInstance {
    /// Builds an instance from a square matrix of row vectors.
    pub fn new(rows: Vec<Vec<f64>>) -> AcoResult<Self> {
        let n = rows.len();
        if n < 2 {
            return Err(AcoError::InvalidDimension {
                rows: n,
                bad_row: 0,
                bad_len: rows.first().map_or(0, Vec::len),
            });
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(AcoError::InvalidDimension {
                    rows: n,
                    bad_row: i,
                    bad_len: row.len(),
                });
            }
        }

        let mut distances = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if i != j && (!value.is_finite() || value <= 0.0) {
                    return Err(AcoError::InvalidDistance { i, j, value });
                }
                distances.push(value);
            }
        }

        Ok(Self { n, distances })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always false: construction requires at least 2 cities.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Distance from city `i` to city `j`.
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.distances[i * self.n + j]
    }

    /// Total length of a path, summing consecutive-pair distances.
    pub fn path_length(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.distance(w[0], w[1])).sum()
    }
}

/// A closed tour: a permutation of `0..n` with the start city repeated
/// at the end, plus its total length.
#[derive(Debug, Clone)]
pub struct Tour {
    /// Visiting order, length n+1, first element equals last.
    pub path: Vec<usize>,
    /// Sum of edge distances along `path`, including the closing edge.
    pub length: f64,
}
