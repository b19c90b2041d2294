//! Core types for linear system representation.

use std::fmt;

use serde::Serialize;

use crate::DIMENSION;

/// A vector with one entry per unknown.
pub type Vector = [f64; DIMENSION];

/// A square coefficient matrix, stored as rows.
pub type Matrix = [[f64; DIMENSION]; DIMENSION];

/// Ordered, distinct variable names shared by every equation of a system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VariableSet(Vec<String>);

impl VariableSet {
    /// Create a variable set from names in column order.
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    /// The canonical fallback names `x1, x2, ..., xn`.
    pub fn canonical(dimension: usize) -> Self {
        Self((1..=dimension).map(|i| format!("x{}", i)).collect())
    }

    /// Choose the variable ordering from the names detected in an equation.
    ///
    /// When exactly `dimension` distinct names were detected they are used in
    /// sorted order; otherwise the canonical names are used.
    pub fn resolve(mut detected: Vec<String>, dimension: usize) -> Self {
        if detected.len() == dimension {
            detected.sort();
            Self(detected)
        } else {
            Self::canonical(dimension)
        }
    }

    /// Column index of a variable name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|v| v == name)
    }

    /// Name of the variable in the given column.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// All names in column order.
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for VariableSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// A row ordering: entry `i` is the original row placed at position `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    /// The identity ordering of `n` rows.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    pub(crate) fn from_indices(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// Original row indices in their new order.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Check whether rows keep their original positions.
    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(i, &row)| i == row)
    }

    /// Reorder a full set of rows.
    pub fn apply<T: Copy>(&self, rows: &[T; DIMENSION]) -> [T; DIMENSION] {
        std::array::from_fn(|i| rows[self.0[i]])
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = self.0.iter().map(|r| (r + 1).to_string()).collect();
        write!(f, "({})", rows.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_sorts_detected_names() {
        let vars = VariableSet::resolve(names(&["z", "x", "y"]), 3);
        assert_eq!(vars.names(), &["x", "y", "z"]);
    }

    #[test]
    fn test_resolve_falls_back_to_canonical() {
        let vars = VariableSet::resolve(names(&["y", "z"]), 3);
        assert_eq!(vars.names(), &["x1", "x2", "x3"]);
        assert_eq!(vars.to_string(), "[x1, x2, x3]");
    }

    #[test]
    fn test_permutation_apply() {
        let perm = Permutation::from_indices(vec![1, 2, 0]);
        assert_eq!(perm.apply(&[10.0, 20.0, 30.0]), [20.0, 30.0, 10.0]);
        assert!(!perm.is_identity());
        assert!(Permutation::identity(3).is_identity());
        assert_eq!(perm.to_string(), "(2 3 1)");
    }
}
