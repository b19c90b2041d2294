//! Parser for textual linear equations.
//!
//! Each equation is written as a linear expression, an `=` sign and a
//! numeric constant. Whitespace is insignificant.
//!
//! # Grammar Overview
//!
//! ```text
//! equation    = expression '=' constant
//! expression  = [sign] term { sign term }
//! term        = [numeral] variable | numeral
//! sign        = '+' | '-'
//! numeral     = digit* ['.'] digit*
//! variable    = letter+ digit*
//! constant    = real number (e.g. "-1", "2.5", "1e3")
//! ```
//!
//! A term without a numeral has coefficient 1. A variable may appear more
//! than once in an expression; its coefficients are summed. Bare numerals on
//! the expression side are ignored rather than moved to the constant side.
//!
//! # Variable Ordering
//!
//! The variable ordering of a system is taken from its first equation: when
//! it names exactly three distinct variables they are used in sorted order,
//! otherwise the canonical names `x1, x2, x3` are used. The remaining
//! equations are read against that same ordering.
//!
//! # System Files
//!
//! A system file holds one equation per line. Blank lines and lines starting
//! with `#` or `;` are ignored.
//!
//! ```text
//! # Example system
//! x - 2y - 3z = -1
//! 2x + y + z = 6
//! x + 3y - 2z = 13
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::ParsedEquation;
pub use lexer::{
    detect_variables, parse_constant, parse_magnitude, scan_terms, strip_whitespace, Term,
    TERM_PATTERN, VARIABLE_PATTERN,
};
pub use parser::{extract_coefficients, split_sides, EquationParser};

use log::debug;

use crate::error::{JacobiError, Result};
use crate::system::LinearSystem;
use crate::DIMENSION;

/// Parse one equation of a system with `dimension` unknowns.
pub fn parse_equation(text: &str, dimension: usize) -> Result<ParsedEquation> {
    EquationParser::new(dimension).parse(text, 1)
}

/// Parse a full system of equations into a [`LinearSystem`].
pub fn parse_system<S: AsRef<str>>(equations: &[S]) -> Result<LinearSystem> {
    if equations.len() != DIMENSION {
        return Err(JacobiError::dimension(format!(
            "expected {} equations, got {}",
            DIMENSION,
            equations.len()
        )));
    }

    let parser = EquationParser::new(DIMENSION);
    let mut parsed = Vec::with_capacity(DIMENSION);
    let mut variables = None;

    for (i, text) in equations.iter().enumerate() {
        let text = text.as_ref().trim();
        let equation = i + 1;

        if text.is_empty() {
            return Err(JacobiError::format(
                equation,
                format!("please enter equation {}", equation),
            ));
        }

        debug!("Parsing equation {}: {}", equation, text);

        let eq = match &variables {
            None => {
                let eq = parser.parse(text, equation)?;
                debug!("Variables set to {}", eq.variables);
                variables = Some(eq.variables.clone());
                eq
            }
            Some(vars) => parser.parse_with(text, vars, equation)?,
        };
        parsed.push(eq);
    }

    let variables = variables.ok_or_else(|| JacobiError::dimension("system has no equations"))?;
    LinearSystem::from_equations(parsed, variables)
}

/// Extract the equation lines of a system file.
pub fn read_equations(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with(';'))
        .map(str::to_string)
        .collect()
}

/// Parse a system written one equation per line.
pub fn parse(input: &str) -> Result<LinearSystem> {
    parse_system(&read_equations(input))
}

/// Parse a system file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<LinearSystem> {
    parse(&read_file(path)?)
}

/// Read a system file into its equation lines.
#[cfg(feature = "cli")]
pub fn read_file(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| JacobiError::FileRead {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EXAMPLE_SYSTEM;

    #[test]
    fn test_parse_example_system() {
        let system = parse_system(&EXAMPLE_SYSTEM).unwrap();
        assert_eq!(system.variables.names(), &["x", "y", "z"]);
        assert_eq!(
            system.matrix,
            [[1.0, -2.0, -3.0], [2.0, 1.0, 1.0], [1.0, 3.0, -2.0]]
        );
        assert_eq!(system.constants, [-1.0, 6.0, 13.0]);
    }

    #[test]
    fn test_later_equations_use_first_ordering() {
        let system = parse_system(&["a+b+c=1", "c=2", "2b-a=3"]).unwrap();
        assert_eq!(system.variables.names(), &["a", "b", "c"]);
        assert_eq!(system.matrix[1], [0.0, 0.0, 1.0]);
        assert_eq!(system.matrix[2], [-1.0, 2.0, 0.0]);
    }

    #[test]
    fn test_empty_equation_is_reported() {
        let err = parse_system(&["x+y+z=1", "  ", "x=1"]).unwrap_err();
        assert_eq!(err.to_string(), "Error in equation 2: please enter equation 2");
    }

    #[test]
    fn test_format_error_carries_equation_index() {
        let err = parse_system(&["x+y+z=1", "x+y+z=2", "x+y+z"]).unwrap_err();
        assert!(matches!(err, JacobiError::Format { equation: 3, .. }));
    }

    #[test]
    fn test_wrong_equation_count() {
        let err = parse_system(&["x+y+z=1", "x=1"]).unwrap_err();
        assert!(matches!(err, JacobiError::Dimension { .. }));
    }

    #[test]
    fn test_parse_file_contents() {
        let input = "# example\n\nx - 2y - 3z = -1\n; comment\n2x + y + z = 6\nx + 3y - 2z = 13\n";
        let system = parse(input).unwrap();
        assert_eq!(system.constants, [-1.0, 6.0, 13.0]);
    }

    #[test]
    fn test_parse_equation_contract() {
        let eq = parse_equation("2x+3y-z=5", 3).unwrap();
        assert_eq!(eq.coefficients, vec![2.0, 3.0, -1.0]);
        assert_eq!(eq.constant, 5.0);
        assert_eq!(eq.variables.names(), &["x", "y", "z"]);
    }
}
