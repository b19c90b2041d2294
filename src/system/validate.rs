//! System validation.

use crate::error::{JacobiError, Result};

use super::LinearSystem;

/// Diagonal entries with a smaller magnitude are treated as zero.
pub const ZERO_DIAGONAL_THRESHOLD: f64 = 1e-10;

/// Validate a system for Jacobi iteration.
///
/// Checks, in row order, that no diagonal coefficient is (near-)zero. The
/// first offending row is reported with its variable and 1-based equation.
pub fn validate_system(system: &LinearSystem) -> Result<()> {
    for (i, value) in system.diagonal().iter().enumerate() {
        if value.abs() < ZERO_DIAGONAL_THRESHOLD {
            let variable = system
                .variables
                .get(i)
                .map(str::to_string)
                .unwrap_or_else(|| format!("x{}", i + 1));
            return Err(JacobiError::zero_diagonal(variable, i + 1));
        }
    }

    Ok(())
}
