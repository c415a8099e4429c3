//! ACO execution loop.

use super::config::AcoConfig;
use super::pheromone::{EdgeUsage, PheromoneField};
use super::types::{Tour, TspInstance};
use crate::error::AcoResult;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of an ant colony run.
#[derive(Debug, Clone)]
pub struct AcoSolution {
    /// The best tour found: a closed path of n+1 city indices.
    pub best: Tour,

    /// Number of iterations executed (always `config.iterations`).
    pub iterations: usize,

    /// Best length sampled at regular intervals for history tracking.
    pub length_history: Vec<f64>,
}

/// Executes the ant colony optimization loop.
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the solver to completion and returns the best tour found.
    ///
    /// One simulated ant constructs one candidate tour per iteration;
    /// the pheromone field is then evaporated and reinforced with that
    /// tour's edges, and the best record is replaced on strict
    /// improvement only. The loop always runs the full configured
    /// iteration count; there is no convergence-based early exit and
    /// no partial result.
    ///
    /// The random source is created once here and threaded through
    /// every construction, so a fixed `config.seed` reproduces the
    /// whole solve.
    pub fn run(instance: &TspInstance, config: &AcoConfig) -> AcoResult<AcoSolution> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut field = PheromoneField::new(instance.len());
        let mut best: Option<Tour> = None;

        let history_interval = 100;
        let mut length_history = Vec::new();

        for iteration in 0..config.iterations {
            let (tour, usage) = construct_tour(instance, config, &field, &mut rng);
            field.update(config.rho, &usage, instance);

            if best.as_ref().is_none_or(|b| tour.length < b.length) {
                best = Some(tour);
            }

            if (iteration + 1).is_multiple_of(history_interval) {
                if let Some(ref b) = best {
                    length_history.push(b.length);
                }
            }
        }

        // iterations >= 1 is enforced by validate(), so a best exists.
        let best = best.expect("at least one iteration ran");

        if length_history
            .last()
            .is_none_or(|&last| (last - best.length).abs() > 1e-15)
        {
            length_history.push(best.length);
        }

        Ok(AcoSolution {
            best,
            iterations: config.iterations,
            length_history,
        })
    }
}

/// Builds one candidate tour from the current pheromone field.
///
/// Starts at a uniformly random city, then performs n−1 roulette-wheel
/// selections: each unvisited `j` is weighted
/// `trail(i, j)^alpha * (1 / distance(i, j))^beta`, cumulative sums are
/// accumulated in ascending city order, and the first candidate whose
/// cumulative weight strictly exceeds the roll is taken. When the total
/// weight is zero the roll is zero and the first candidate wins. The
/// cycle is closed back to the start city before returning.
///
/// No side effects beyond the returned tour and edge-usage matrix.
fn construct_tour<R: Rng>(
    instance: &TspInstance,
    config: &AcoConfig,
    field: &PheromoneField,
    rng: &mut R,
) -> (Tour, EdgeUsage) {
    let n = instance.len();
    let mut path = Vec::with_capacity(n + 1);
    let mut visited = vec![false; n];
    let mut usage = EdgeUsage::new(n);
    let mut length = 0.0;

    let start = rng.random_range(0..n);
    let mut current = start;
    visited[current] = true;
    path.push(current);

    for _ in 0..n - 1 {
        let mut total = 0.0;
        let mut cumulative: Vec<(usize, f64)> = Vec::new();
        for j in 0..n {
            if visited[j] {
                continue;
            }
            let weight = field.get(current, j).powf(config.alpha)
                * (1.0 / instance.distance(current, j)).powf(config.beta);
            total += weight;
            cumulative.push((j, total));
        }

        let roll = rng.random_range(0.0..1.0) * total;

        // A zeroed field leaves every cumulative sum equal to the roll
        // at 0, so the tie-break rule hands the win to the first
        // candidate. The last-candidate fallback only covers
        // floating-point shortfall near the top of the range.
        let mut next = if total == 0.0 {
            cumulative[0].0
        } else {
            cumulative[cumulative.len() - 1].0
        };
        for &(city, cum) in &cumulative {
            if cum > roll {
                next = city;
                break;
            }
        }

        usage.mark(current, next);
        length += instance.distance(current, next);
        current = next;
        visited[current] = true;
        path.push(current);
    }

    usage.mark(current, start);
    length += instance.distance(current, start);
    path.push(start);

    (Tour { path, length }, usage)
}
