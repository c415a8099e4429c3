//! Approximate traveling salesman solver based on Ant Colony
//! Optimization.
//!
//! The core is a sequential ACO loop: one simulated ant per iteration
//! constructs a candidate tour by roulette-wheel edge selection over
//! `trail^alpha * (1/distance)^beta` weights, then the pheromone field
//! is evaporated and reinforced with the tour's edges, and the best
//! tour found is tracked across a fixed iteration budget.
//!
//! Layers:
//!
//! - [`aco`]: the solver — validated [`aco::TspInstance`], builder-style
//!   [`aco::AcoConfig`], and [`aco::AcoRunner`] driving the loop.
//! - [`session`]: the JSON message contract for one request/reply
//!   exchange; the surrounding transport is an external collaborator.
//!
//! # Examples
//!
//! ```
//! use aco_tsp::solve;
//!
//! let matrix = vec![
//!     vec![0.0, 1.0, 2.0],
//!     vec![1.0, 0.0, 1.0],
//!     vec![2.0, 1.0, 0.0],
//! ];
//! let path = solve(matrix, 1.0, 2.0, 0.1).unwrap();
//! assert_eq!(path.len(), 4);
//! assert_eq!(path.first(), path.last());
//! ```

pub mod aco;
pub mod error;
pub mod session;

pub use error::{AcoError, AcoResult};

use aco::{AcoConfig, AcoRunner, TspInstance};

/// Solves one TSP instance and returns the closed visiting order.
///
/// This is the core's single externally callable operation: it blocks
/// until the full iteration budget (the [`AcoConfig`] default) has run
/// and yields an n+1-length path, a permutation of `0..n` with the
/// start city repeated at the end. Fails fast with a typed error on an
/// invalid matrix or out-of-range parameters; no partial solve is
/// performed.
pub fn solve(matrix: Vec<Vec<f64>>, alpha: f64, beta: f64, rho: f64) -> AcoResult<Vec<usize>> {
    let instance = TspInstance::new(matrix)?;
    let config = AcoConfig::default()
        .with_alpha(alpha)
        .with_beta(beta)
        .with_rho(rho);
    let solution = AcoRunner::run(&instance, &config)?;
    Ok(solution.best.path)
}
