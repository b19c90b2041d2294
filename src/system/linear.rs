//! Linear system structure.

use log::debug;
use serde::Serialize;

use super::types::{Matrix, Permutation, VariableSet, Vector};
use crate::equation::ParsedEquation;
use crate::error::{JacobiError, Result};
use crate::DIMENSION;

/// A linear system `A x = b` ready for solving.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearSystem {
    /// Coefficient matrix A, columns aligned with `variables`
    pub matrix: Matrix,
    /// Right-hand side b, same row order as `matrix`
    pub constants: Vector,
    /// Variable names in column order
    pub variables: VariableSet,
}

impl LinearSystem {
    /// Create a system from an assembled matrix and vector.
    pub fn new(matrix: Matrix, constants: Vector, variables: VariableSet) -> Result<Self> {
        if variables.len() != DIMENSION {
            return Err(JacobiError::dimension(format!(
                "expected {} variables, got {}",
                DIMENSION,
                variables.len()
            )));
        }
        Ok(Self {
            matrix,
            constants,
            variables,
        })
    }

    /// Build a system from parsed equations sharing one variable set.
    pub fn from_equations(equations: Vec<ParsedEquation>, variables: VariableSet) -> Result<Self> {
        if equations.len() != DIMENSION {
            return Err(JacobiError::dimension(format!(
                "expected {} equations, got {}",
                DIMENSION,
                equations.len()
            )));
        }

        let mut matrix = [[0.0; DIMENSION]; DIMENSION];
        let mut constants = [0.0; DIMENSION];

        for (i, eq) in equations.into_iter().enumerate() {
            matrix[i] = eq.coefficients.as_slice().try_into().map_err(|_| {
                JacobiError::dimension(format!(
                    "row {} has {} coefficients, expected {}",
                    i + 1,
                    eq.coefficients.len(),
                    DIMENSION
                ))
            })?;
            constants[i] = eq.constant;
        }

        debug!("Matrix A: {:?}", matrix);
        debug!("Vector b: {:?}", constants);

        Self::new(matrix, constants, variables)
    }

    /// A copy of the system with its rows reordered.
    ///
    /// Columns (and therefore the variable order) are unchanged.
    pub fn permuted(&self, permutation: &Permutation) -> Self {
        Self {
            matrix: permutation.apply(&self.matrix),
            constants: permutation.apply(&self.constants),
            variables: self.variables.clone(),
        }
    }

    /// Diagonal entries `A[i][i]`.
    pub fn diagonal(&self) -> Vector {
        std::array::from_fn(|i| self.matrix[i][i])
    }
}
