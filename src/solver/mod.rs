//! Jacobi solver.
//!
//! This module provides the numerical engine.
//!
//! ## Jacobi Iteration
//!
//! For a system `A x = b` with non-zero diagonal, each iteration computes
//! every unknown from its own row using the previous iterate:
//!
//! ```text
//! x_new[i] = (b[i] - sum_{j != i} A[i][j] * x[j]) / A[i][i]
//! ```
//!
//! Iteration is guaranteed to converge when A is diagonally dominant, so a
//! non-dominant system is first searched for a dominant row order.
//!
//! ## Plateau Detection
//!
//! Convergence is declared once the last [`PLATEAU_WINDOW`] iterates agree
//! in every component when formatted to [`CONVERGENCE_DECIMALS`] places.
//! [`CONFIRMATION_ITERATIONS`] further iterates are then recorded (within
//! the iteration budget) and the iterate at detection is returned.

mod dominance;
mod jacobi;
mod pipeline;
mod reorder;
mod rounding;

pub use dominance::is_diagonally_dominant;
pub use jacobi::{is_plateau, jacobi_step, IterationRecord, JacobiSolver, SolveResult};
pub use pipeline::{Solver, SolverConfig};
pub use reorder::{permutations, reorder, Reordering, MAX_PERMUTATION_DIMENSION};
pub use rounding::to_fixed;

/// Default (reserved) convergence tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Default maximum number of Jacobi iterations.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Decimal places compared by the plateau rule.
pub const CONVERGENCE_DECIMALS: usize = 4;

/// Number of consecutive iterates that must agree.
pub const PLATEAU_WINDOW: usize = 4;

/// Iterations recorded after convergence is detected.
pub const CONFIRMATION_ITERATIONS: usize = 3;
