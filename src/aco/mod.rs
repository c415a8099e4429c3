//! Ant Colony Optimization (ACO) for the traveling salesman problem.
//!
//! A probabilistic construction metaheuristic inspired by ant
//! foraging. Each iteration one simulated ant builds a complete tour
//! edge by edge, choosing the next city with probability proportional
//! to `trail^alpha * (1/distance)^beta`. The pheromone trail is then
//! evaporated everywhere and reinforced along the tour just built, so
//! edges that appear in short tours accumulate desirability over time.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Gambardella (1997), "Ant Colony System: A Cooperative
//!   Learning Approach to the Traveling Salesman Problem"

mod config;
mod pheromone;
mod runner;
mod types;

pub use config::AcoConfig;
pub use pheromone::{EdgeUsage, PheromoneField};
pub use runner::{AcoRunner, AcoSolution};
pub use types::{Tour, TspInstance};
