//! Parsed representation of a single equation.

use crate::system::VariableSet;

/// One equation after parsing: a coefficient row and its constant.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEquation {
    /// Coefficients aligned with `variables`
    pub coefficients: Vec<f64>,
    /// Right-hand side constant
    pub constant: f64,
    /// Variable ordering the coefficients refer to
    pub variables: VariableSet,
}

impl ParsedEquation {
    /// Coefficient of a named variable, or 0 when the name is unknown.
    pub fn coefficient_of(&self, name: &str) -> f64 {
        self.variables
            .index_of(name)
            .and_then(|i| self.coefficients.get(i).copied())
            .unwrap_or(0.0)
    }
}
