//! # Jacobi Core
//!
//! A parser and iterative solver for 3x3 systems of linear equations.
//!
//! This library provides:
//! - A parser turning equations such as `2x + 3y - z = 5` into a coefficient
//!   matrix and a right-hand-side vector
//! - A diagonal dominance check and a row-permutation search that reorders
//!   the system to make Jacobi iteration converge
//! - A Jacobi solver with plateau-based convergence detection that records
//!   every iterate
//! - Reporting helpers: result summaries, an iteration table, CSV and JSON
//!   export
//!
//! ## Architecture
//!
//! - [`equation`] - Parser for textual linear equations
//! - [`system`] - Linear system representation and validation
//! - [`solver`] - Dominance check, row reordering and Jacobi iteration
//! - [`report`] - Solve reports and the iteration table
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! jacobi -e "x - 2y - 3z = -1" -e "2x + y + z = 6" -e "x + 3y - 2z = 13"
//! jacobi system.txt --max-iterations 200 --export iterations.csv
//! ```
//!
//! ### Library
//!
//! ```
//! use jacobi_core::{Solver, EXAMPLE_SYSTEM};
//!
//! let report = Solver::new().solve_equations(&EXAMPLE_SYSTEM).unwrap();
//! assert!(report.converged);
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmJacobiSolver } from 'jacobi_core';
//!
//! const solver = new WasmJacobiSolver("x - 2y - 3z = -1", "2x + y + z = 6", "x + 3y - 2z = 13");
//! console.log(solver.solution(), solver.converged);
//! ```
//!
//! ## Convergence Rule
//!
//! Starting from the zero vector, each iteration computes
//! `x_new[i] = (b[i] - sum_{j != i} A[i][j] * x[j]) / A[i][i]`.
//! Convergence is declared once the last four iterates agree component-wise
//! when formatted to 4 decimal places. Three confirmation iterations are then
//! recorded and the iterate at detection is returned as the solution.

pub mod equation;
pub mod error;
pub mod report;
pub mod solver;
pub mod system;

// Re-export main types for convenience
pub use error::{JacobiError, Result};
pub use report::{IterationTable, SolveReport};
pub use solver::{Solver, SolverConfig};
pub use system::LinearSystem;

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmJacobiSolver;

/// Number of equations and unknowns in a system.
pub const DIMENSION: usize = 3;

/// Built-in example system, solved by `x = 2, y = 3, z = -1`.
pub const EXAMPLE_SYSTEM: [&str; DIMENSION] = [
    "x - 2y - 3z = -1",
    "2x + y + z = 6",
    "x + 3y - 2z = 13",
];
