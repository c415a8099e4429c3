//! Pheromone trail matrix and its update rule.

use crate::aco::types::TspInstance;

/// Mutable n×n pheromone trail, flattened row-major.
///
/// Initialized uniformly to 1.0 and scoped to a single solve: each
/// iteration applies one in-place [`update`](PheromoneField::update)
/// pass, first evaporating every entry and then reinforcing the edges
/// of the iteration's tour. The evaporate-then-reinforce order is part
/// of the update semantics; reversing it changes steady-state trail
/// magnitudes.
#[derive(Debug, Clone)]
pub struct PheromoneField {
    n: usize,
    trail: Vec<f64>,
}

impl PheromoneField {
    /// Creates a uniform field of 1.0 for `n` cities.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            trail: vec![1.0; n * n],
        }
    }

    /// Trail level on the directed edge `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.trail[i * self.n + j]
    }

    /// Evaporates the whole field by `(1 - rho)`, then adds
    /// `1 / distance(i, j)` to every edge marked in `usage`.
    ///
    /// Reinforcement is global and single-tour: the deposit goes
    /// straight onto the field, with no per-ant normalization.
    pub fn update(&mut self, rho: f64, usage: &EdgeUsage, instance: &TspInstance) {
        for i in 0..self.n {
            for j in 0..self.n {
                let cell = &mut self.trail[i * self.n + j];
                *cell *= 1.0 - rho;
                if usage.get(i, j) {
                    *cell += 1.0 / instance.distance(i, j);
                }
            }
        }
    }
}

/// Transient n×n marker for the directed edges one tour traversed.
///
/// Built fresh by each tour construction and discarded after the
/// pheromone update that consumes it.
#[derive(Debug, Clone)]
pub struct EdgeUsage {
    n: usize,
    used: Vec<bool>,
}

impl EdgeUsage {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            used: vec![false; n * n],
        }
    }

    #[inline]
    pub fn mark(&mut self, i: usize, j: usize) {
        self.used[i * self.n + j] = true;
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.used[i * self.n + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_city_instance() -> TspInstance {
        TspInstance::new(vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 1.0],
            vec![2.0, 1.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_field_initialized_uniform() {
        let field = PheromoneField::new(4);
        for i in 0..4 {
            for j in 0..4 {
                assert!((field.get(i, j) - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_update_evaporates_unused_edges() {
        let instance = three_city_instance();
        let mut field = PheromoneField::new(3);
        let usage = EdgeUsage::new(3);

        field.update(0.25, &usage, &instance);

        for i in 0..3 {
            for j in 0..3 {
                assert!((field.get(i, j) - 0.75).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_update_reinforces_used_edges_after_evaporation() {
        let instance = three_city_instance();
        let mut field = PheromoneField::new(3);
        let mut usage = EdgeUsage::new(3);
        usage.mark(0, 2);

        field.update(0.5, &usage, &instance);

        // 1.0 * (1 - 0.5) + 1 / 2.0, not (1.0 + 1/2.0) * (1 - 0.5)
        assert!((field.get(0, 2) - 1.0).abs() < 1e-12);
        assert!((field.get(2, 0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_update_rho_one_zeroes_unused_trail() {
        let instance = three_city_instance();
        let mut field = PheromoneField::new(3);
        let mut usage = EdgeUsage::new(3);
        usage.mark(1, 2);

        field.update(1.0, &usage, &instance);

        assert!((field.get(1, 2) - 1.0).abs() < 1e-12);
        assert!(field.get(0, 1).abs() < 1e-12);
    }
}
