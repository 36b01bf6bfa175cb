//! Power iteration
//!
//! Repeated matrix-vector multiplication converging to the dominant
//! eigenvector of a row-stochastic (or damped) matrix. The input matrices
//! are not guaranteed strictly stochastic in edge cases (degree-zero rows),
//! so a safety iteration bound protects against non-convergence.

use ndarray::{Array1, Array2};

/// Power iteration over a row-stochastic matrix.
#[derive(Debug, Clone)]
pub struct PowerIteration {
    /// Convergence threshold on the L2 norm of the probability delta.
    pub epsilon: f64,
    /// Safety bound on the number of iterations.
    pub max_iterations: usize,
}

impl Default for PowerIteration {
    fn default() -> Self {
        Self {
            epsilon: 1e-4,
            max_iterations: 100,
        }
    }
}

impl PowerIteration {
    /// Create a power iteration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the convergence threshold.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the safety iteration bound.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Run power iteration on a matrix.
    ///
    /// Starts from the uniform probability vector and repeats `p' = Mᵗ p`
    /// until the L2 norm of `p' - p` drops to `epsilon`. Returns the result
    /// even if convergence wasn't achieved, with `converged = false`.
    pub fn run(&self, matrix: &Array2<f64>) -> PowerIterationResult {
        let n = matrix.nrows();
        if n == 0 {
            return PowerIterationResult::new(vec![], 0, 0.0, true);
        }

        let transposed = matrix.t();
        let mut p = Array1::from_elem(n, 1.0 / n as f64);
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.epsilon {
            iterations += 1;

            let next = transposed.dot(&p);
            delta = (&next - &p).mapv(|x| x * x).sum().sqrt();
            p = next;
        }

        let converged = delta <= self.epsilon;
        if !converged {
            tracing::debug!(iterations, delta, "power iteration stopped at safety bound");
        }

        PowerIterationResult::new(p.to_vec(), iterations, delta, converged)
    }
}

/// Result of a power iteration run.
#[derive(Debug, Clone)]
pub struct PowerIterationResult {
    /// Stationary scores for each node (indexed by row).
    pub scores: Vec<f64>,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Final convergence delta.
    pub delta: f64,
    /// Whether the iteration converged before the safety bound.
    pub converged: bool,
}

impl PowerIterationResult {
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn uniform_stochastic(n: usize) -> Array2<f64> {
        Array2::from_elem((n, n), 1.0 / n as f64)
    }

    #[test]
    fn test_uniform_matrix_keeps_uniform_vector() {
        let matrix = uniform_stochastic(4);
        let result = PowerIteration::new().run(&matrix);

        assert!(result.converged);
        for &score in &result.scores {
            assert_relative_eq!(score, 0.25, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_stationary_distribution_sums_to_one() {
        let matrix = array![[0.5, 0.5, 0.0], [0.25, 0.5, 0.25], [0.0, 0.5, 0.5]];
        let result = PowerIteration::new().with_epsilon(1e-8).run(&matrix);

        assert!(result.converged);
        let sum: f64 = result.scores.iter().sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let matrix = array![[0.2, 0.8], [0.6, 0.4]];
        let runner = PowerIteration::new().with_epsilon(1e-10);

        let first = runner.run(&matrix);
        let second = runner.run(&matrix);
        assert_eq!(first.scores, second.scores);
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = Array2::zeros((0, 0));
        let result = PowerIteration::new().run(&matrix);

        assert!(result.converged);
        assert!(result.scores.is_empty());
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_safety_bound_returns_partial() {
        // epsilon 0 is unreachable in floating point for this matrix
        let matrix = array![[0.5, 0.5], [0.6, 0.4]];
        let result = PowerIteration::new()
            .with_epsilon(0.0)
            .with_max_iterations(5)
            .run(&matrix);

        assert_eq!(result.iterations, 5);
        assert!(!result.converged);
        assert_eq!(result.scores.len(), 2);
    }
}
