//! Parser for linear equations.

use log::debug;

use super::ast::ParsedEquation;
use super::lexer::{detect_variables, parse_constant, scan_terms, strip_whitespace};
use crate::error::{JacobiError, Result};
use crate::system::VariableSet;

/// Parser turning `<linear-expression>=<constant>` text into coefficients.
#[derive(Debug, Clone, Copy)]
pub struct EquationParser {
    dimension: usize,
}

impl EquationParser {
    /// Create a parser for systems with `dimension` unknowns.
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    /// Number of unknowns per equation.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Parse an equation, choosing the variable ordering from its own text.
    ///
    /// `equation` is the 1-based index used in error messages.
    pub fn parse(&self, text: &str, equation: usize) -> Result<ParsedEquation> {
        let cleaned = strip_whitespace(text);
        let (lhs, rhs) = split_sides(&cleaned, equation)?;

        let detected = detect_variables(lhs);
        debug!("Equation {}: detected variables {:?}", equation, detected);
        let variables = VariableSet::resolve(detected, self.dimension);

        build(lhs, rhs, variables, equation)
    }

    /// Parse an equation against an already established variable ordering.
    pub fn parse_with(
        &self,
        text: &str,
        variables: &VariableSet,
        equation: usize,
    ) -> Result<ParsedEquation> {
        let cleaned = strip_whitespace(text);
        let (lhs, rhs) = split_sides(&cleaned, equation)?;
        build(lhs, rhs, variables.clone(), equation)
    }
}

fn build(lhs: &str, rhs: &str, variables: VariableSet, equation: usize) -> Result<ParsedEquation> {
    let coefficients = extract_coefficients(lhs, &variables);
    let constant = parse_constant(rhs).ok_or_else(|| {
        JacobiError::format(
            equation,
            format!("the constant term '{}' must be a number", rhs),
        )
    })?;

    debug!(
        "Equation {}: coefficients {:?} for {}, constant {}",
        equation, coefficients, variables, constant
    );

    Ok(ParsedEquation {
        coefficients,
        constant,
        variables,
    })
}

/// Split whitespace-free equation text into its expression and constant sides.
pub fn split_sides(text: &str, equation: usize) -> Result<(&str, &str)> {
    let mut sides = text.split('=');
    let (lhs, rhs) = match (sides.next(), sides.next(), sides.next()) {
        (Some(lhs), Some(rhs), None) => (lhs, rhs),
        (_, None, _) => {
            return Err(JacobiError::format(
                equation,
                "the equation must contain the '=' sign",
            ));
        }
        _ => {
            return Err(JacobiError::format(
                equation,
                "the equation must contain exactly one '=' sign",
            ));
        }
    };

    if lhs.is_empty() || rhs.is_empty() {
        return Err(JacobiError::format(
            equation,
            "both sides of '=' must be non-empty",
        ));
    }

    Ok((lhs, rhs))
}

/// Sum the coefficients of each known variable in an expression.
///
/// Repeated variables accumulate; terms naming unknown variables are ignored.
pub fn extract_coefficients(expression: &str, variables: &VariableSet) -> Vec<f64> {
    let mut coefficients = vec![0.0; variables.len()];
    for term in scan_terms(expression) {
        if let Some(i) = variables.index_of(&term.variable) {
            coefficients[i] += term.coefficient();
        }
    }
    coefficients
}
