//! Jacobi fixed-point iteration with plateau detection.

use log::{debug, info, warn};
use serde::Serialize;

use super::rounding::to_fixed;
use super::{
    CONFIRMATION_ITERATIONS, CONVERGENCE_DECIMALS, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
    PLATEAU_WINDOW,
};
use crate::system::{Matrix, Vector};
use crate::DIMENSION;

/// One recorded iterate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IterationRecord {
    /// 1-based iteration number
    pub index: usize,
    /// Iterate computed at this step
    pub values: Vector,
}

/// Outcome of a Jacobi run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveResult {
    /// Iterate at convergence detection, or the last iterate otherwise
    pub solution: Vector,
    /// Every recorded iterate, confirmation iterations included
    pub history: Vec<IterationRecord>,
    /// Whether a plateau was detected
    pub converged: bool,
    /// Iteration at which the plateau was detected
    pub detected_at: Option<usize>,
}

/// Jacobi solver for a diagonal-checked system.
#[derive(Debug, Clone)]
pub struct JacobiSolver {
    /// Hard cap on computed iterations (confirmations included)
    pub max_iterations: usize,
    /// Reserved for a distance-based criterion; not consulted by the plateau rule
    pub tolerance: f64,
}

impl Default for JacobiSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl JacobiSolver {
    /// Create a solver with default settings.
    pub fn new() -> Self {
        Self::with_config(DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE)
    }

    /// Create a solver with custom settings.
    pub fn with_config(max_iterations: usize, tolerance: f64) -> Self {
        Self {
            max_iterations,
            tolerance,
        }
    }

    /// Solve `A x = b` starting from the zero vector.
    ///
    /// Every diagonal entry of `matrix` must be non-zero; callers check this
    /// with [`crate::system::validate_system`] before solving.
    pub fn solve(&self, matrix: &Matrix, constants: &Vector) -> SolveResult {
        debug!(
            "Jacobi: A = {:?}, b = {:?}, tolerance = {}, max iterations = {}",
            matrix, constants, self.tolerance, self.max_iterations
        );

        let mut x = [0.0; DIMENSION];
        let mut history: Vec<IterationRecord> = Vec::new();

        for k in 0..self.max_iterations {
            let x_new = jacobi_step(matrix, constants, &x);
            debug!("Iteration {}: {}", k + 1, format_vector(&x_new));
            history.push(IterationRecord {
                index: k + 1,
                values: x_new,
            });

            if k + 1 >= PLATEAU_WINDOW && is_plateau(&history[history.len() - PLATEAU_WINDOW..]) {
                info!("Convergence detected at iteration {}", k + 1);

                let mut x_confirm = x_new;
                for extra in 1..=CONFIRMATION_ITERATIONS {
                    let index = k + 1 + extra;
                    if index > self.max_iterations {
                        break;
                    }
                    x_confirm = jacobi_step(matrix, constants, &x_confirm);
                    debug!(
                        "Iteration {}: {} (confirmation {}/{})",
                        index,
                        format_vector(&x_confirm),
                        extra,
                        CONFIRMATION_ITERATIONS
                    );
                    history.push(IterationRecord {
                        index,
                        values: x_confirm,
                    });
                }

                return SolveResult {
                    solution: x_new,
                    history,
                    converged: true,
                    detected_at: Some(k + 1),
                };
            }

            x = x_new;
        }

        warn!(
            "No convergence after {} iterations",
            self.max_iterations
        );

        SolveResult {
            solution: x,
            history,
            converged: false,
            detected_at: None,
        }
    }
}

/// One Jacobi update: `x_new[i] = (b[i] - sum_{j != i} A[i][j] x[j]) / A[i][i]`.
pub fn jacobi_step(matrix: &Matrix, constants: &Vector, x: &Vector) -> Vector {
    std::array::from_fn(|i| {
        let sum: f64 = (0..DIMENSION)
            .filter(|&j| j != i)
            .map(|j| matrix[i][j] * x[j])
            .sum();
        (constants[i] - sum) / matrix[i][i]
    })
}

/// Check whether a window of records agrees in every component once each
/// value is formatted to [`CONVERGENCE_DECIMALS`] places.
///
/// Non-finite values never form a plateau.
pub fn is_plateau(window: &[IterationRecord]) -> bool {
    let Some((first, rest)) = window.split_first() else {
        return false;
    };
    (0..DIMENSION).all(|i| {
        if window.iter().any(|r| !r.values[i].is_finite()) {
            return false;
        }
        let reference = to_fixed(first.values[i], CONVERGENCE_DECIMALS);
        rest.iter()
            .all(|r| to_fixed(r.values[i], CONVERGENCE_DECIMALS) == reference)
    })
}

fn format_vector(values: &Vector) -> String {
    let parts: Vec<String> = values
        .iter()
        .map(|v| to_fixed(*v, CONVERGENCE_DECIMALS))
        .collect();
    parts.join(", ")
}
