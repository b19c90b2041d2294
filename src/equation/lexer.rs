//! Term scanner for linear expressions.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

/// Pattern matched by variable names: letters followed by optional digits.
pub const VARIABLE_PATTERN: &str = r"[a-zA-Z]+[0-9]*";

/// Pattern matched by a signed term: sign, optional numeral, variable name.
pub const TERM_PATTERN: &str = r"([+-])([0-9]*\.?[0-9]*)([a-zA-Z]+[0-9]*)";

fn variable_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VARIABLE_PATTERN).expect("variable pattern is valid"))
}

fn term_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TERM_PATTERN).expect("term pattern is valid"))
}

/// A signed term `(+|-)[numeral]variable` found in an expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    /// +1.0 or -1.0
    pub sign: f64,
    /// Coefficient magnitude (1.0 when no numeral is written)
    pub magnitude: f64,
    /// Variable name
    pub variable: String,
    /// Byte offset of the sign in the scanned expression
    pub offset: usize,
}

impl Term {
    /// Signed coefficient contributed by this term.
    pub fn coefficient(&self) -> f64 {
        self.sign * self.magnitude
    }
}

/// Remove every whitespace character.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Prefix the expression with `+` unless it already starts with a sign.
pub fn normalize_sign(expression: &str) -> Cow<'_, str> {
    if expression.starts_with('+') || expression.starts_with('-') {
        Cow::Borrowed(expression)
    } else {
        Cow::Owned(format!("+{}", expression))
    }
}

/// Collect the distinct variable names of an expression in first-seen order.
pub fn detect_variables(expression: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for m in variable_regex().find_iter(expression) {
        if !names.iter().any(|n| n == m.as_str()) {
            names.push(m.as_str().to_string());
        }
    }
    names
}

/// Scan an expression left to right for signed terms.
///
/// The expression must be free of whitespace. Text that does not form a
/// `(sign)(numeral)(variable)` term, such as a bare number, is skipped.
pub fn scan_terms(expression: &str) -> Vec<Term> {
    let expression = normalize_sign(expression);
    term_regex()
        .captures_iter(&expression)
        .filter_map(|caps| {
            let sign = caps.get(1)?;
            let numeral = caps.get(2).map_or("", |m| m.as_str());
            let variable = caps.get(3)?;
            Some(Term {
                sign: if sign.as_str() == "-" { -1.0 } else { 1.0 },
                magnitude: parse_magnitude(numeral),
                variable: variable.as_str().to_string(),
                offset: sign.start(),
            })
        })
        .collect()
}

/// Parse a term numeral; an empty or unparseable numeral counts as 1.
pub fn parse_magnitude(numeral: &str) -> f64 {
    if numeral.is_empty() {
        return 1.0;
    }
    numeral.parse::<f64>().unwrap_or(1.0)
}

/// Parse the constant side of an equation.
///
/// Returns `None` unless the whole text is a finite real number.
pub fn parse_constant(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_whitespace() {
        assert_eq!(strip_whitespace(" 2x +\t3y - z = 5 "), "2x+3y-z=5");
    }

    #[test]
    fn test_detect_variables_first_seen_order() {
        assert_eq!(detect_variables("z+2x-y+3x"), vec!["z", "x", "y"]);
        assert_eq!(detect_variables("x1+x2-x3"), vec!["x1", "x2", "x3"]);
        assert!(detect_variables("2+3").is_empty());
    }

    #[test]
    fn test_scan_terms() {
        let terms = scan_terms("2x+3y-z");
        assert_eq!(terms.len(), 3);
        assert_eq!(terms[0].variable, "x");
        assert_eq!(terms[0].coefficient(), 2.0);
        assert_eq!(terms[1].coefficient(), 3.0);
        assert_eq!(terms[2].variable, "z");
        assert_eq!(terms[2].coefficient(), -1.0);
    }

    #[test]
    fn test_scan_skips_bare_numbers() {
        let terms = scan_terms("x+3+2.5y");
        assert_eq!(terms.len(), 2);
        assert_eq!(terms[1].variable, "y");
        assert_eq!(terms[1].coefficient(), 2.5);
    }

    #[test]
    fn test_unparseable_numeral_defaults_to_one() {
        assert_eq!(parse_magnitude(""), 1.0);
        assert_eq!(parse_magnitude("."), 1.0);
        assert_eq!(parse_magnitude("0.5"), 0.5);
        let terms = scan_terms("-.y");
        assert_eq!(terms[0].coefficient(), -1.0);
    }

    #[test]
    fn test_parse_constant() {
        assert_eq!(parse_constant("-1"), Some(-1.0));
        assert_eq!(parse_constant("2.5"), Some(2.5));
        assert_eq!(parse_constant("1e3"), Some(1000.0));
        assert_eq!(parse_constant("abc"), None);
        assert_eq!(parse_constant("5x"), None);
        assert_eq!(parse_constant("inf"), None);
        assert_eq!(parse_constant(""), None);
    }
}
