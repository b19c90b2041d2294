//! Solve reports for presentation layers.
//!
//! A [`SolveReport`] packages everything a front end needs: the solution,
//! the convergence and dominance flags, the variable labels, the row order
//! used and the full iteration history. [`IterationTable`] turns the history
//! into a text table or a CSV export.

mod table;

pub use table::{IterationTable, DISPLAY_ITERATION_LIMIT};

use std::fmt;

use serde::Serialize;

use crate::error::{JacobiError, Result};
use crate::solver::{to_fixed, IterationRecord, SolveResult, CONVERGENCE_DECIMALS};
use crate::system::{Permutation, VariableSet, Vector};

/// Result of solving a system, ready for display or export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveReport {
    /// Variable labels in column order
    pub variables: VariableSet,
    /// Solution vector
    pub solution: Vector,
    /// Whether a plateau was detected
    pub converged: bool,
    /// Whether the solved matrix was diagonally dominant
    pub dominant: bool,
    /// Row order applied before solving, if rows were reordered
    pub permutation: Option<Permutation>,
    /// Iteration at which convergence was detected
    pub detected_at: Option<usize>,
    /// Configured (reserved) tolerance
    pub tolerance: f64,
    /// Every recorded iterate
    pub history: Vec<IterationRecord>,
}

impl SolveReport {
    /// Package a solver result with its presentation metadata.
    pub fn assemble(
        result: SolveResult,
        variables: VariableSet,
        dominant: bool,
        permutation: Option<Permutation>,
        tolerance: f64,
    ) -> Self {
        Self {
            variables,
            solution: result.solution,
            converged: result.converged,
            dominant,
            permutation,
            detected_at: result.detected_at,
            tolerance,
            history: result.history,
        }
    }

    /// Number of recorded iterations.
    pub fn iterations(&self) -> usize {
        self.history.len()
    }

    /// `(label, value)` pairs of the solution.
    pub fn labelled_solution(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.variables
            .names()
            .iter()
            .map(String::as_str)
            .zip(self.solution.iter().copied())
    }

    /// The iteration history as a table.
    pub fn table(&self) -> IterationTable<'_> {
        IterationTable::new(&self.variables, &self.history)
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| JacobiError::export(format!("failed to serialize report: {}", e)))
    }
}

impl fmt::Display for SolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Approximate solution:")?;
        for (name, value) in self.labelled_solution() {
            writeln!(f, "  {} ≈ {}", name, to_fixed(value, CONVERGENCE_DECIMALS))?;
        }

        if self.converged {
            match self.detected_at {
                Some(k) => writeln!(
                    f,
                    "Converged at iteration {} ({} iterations recorded)",
                    k,
                    self.iterations()
                )?,
                None => writeln!(f, "Converged ({} iterations recorded)", self.iterations())?,
            }
        } else {
            writeln!(
                f,
                "Did not converge after {} iterations",
                self.iterations()
            )?;
        }

        if let Some(permutation) = &self.permutation {
            writeln!(f, "Rows reordered to {}", permutation)?;
        }
        write!(
            f,
            "Diagonally dominant: {}",
            if self.dominant { "yes" } else { "no" }
        )
    }
}
