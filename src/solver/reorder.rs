//! Row reordering towards diagonal dominance.
//!
//! Every row permutation is tried in a fixed order and the first one whose
//! matrix is diagonally dominant wins. The search is exhaustive, so it is
//! only offered for small systems (see [`MAX_PERMUTATION_DIMENSION`]).

use log::{debug, info};

use super::dominance::is_diagonally_dominant;
use crate::error::{JacobiError, Result};
use crate::system::{Matrix, Permutation, Vector};
use crate::DIMENSION;

/// Largest row count for which all permutations are enumerated (8! = 40320).
pub const MAX_PERMUTATION_DIMENSION: usize = 8;

/// Outcome of a reordering attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct Reordering {
    /// The (possibly reordered) matrix
    pub matrix: Matrix,
    /// The right-hand side in the same row order
    pub vector: Vector,
    /// Whether a dominant permutation was found
    pub reordered: bool,
    /// The permutation applied, if any
    pub permutation: Option<Permutation>,
}

/// All permutations of `0..n`.
///
/// Generated by fixing each index in turn as the head and recursing on the
/// remaining indices, which yields lexicographic order.
pub fn permutations(n: usize) -> Result<Vec<Permutation>> {
    if n > MAX_PERMUTATION_DIMENSION {
        return Err(JacobiError::dimension(format!(
            "row permutation search supports at most {} rows, got {}",
            MAX_PERMUTATION_DIMENSION, n
        )));
    }
    let indices: Vec<usize> = (0..n).collect();
    Ok(permute(&indices)
        .into_iter()
        .map(Permutation::from_indices)
        .collect())
}

fn permute(items: &[usize]) -> Vec<Vec<usize>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }

    let mut result = Vec::new();
    for (i, &head) in items.iter().enumerate() {
        let rest: Vec<usize> = items[..i].iter().chain(&items[i + 1..]).copied().collect();
        for mut tail in permute(&rest) {
            tail.insert(0, head);
            result.push(tail);
        }
    }
    result
}

/// Find the first row permutation that makes the system diagonally dominant.
///
/// When no permutation is dominant the input is returned unchanged with
/// `reordered = false`.
pub fn reorder(matrix: &Matrix, vector: &Vector) -> Result<Reordering> {
    for permutation in permutations(DIMENSION)? {
        let candidate = permutation.apply(matrix);
        debug!("Trying row order {}", permutation);

        if is_diagonally_dominant(&candidate) {
            info!("Rows reordered to {} for diagonal dominance", permutation);
            return Ok(Reordering {
                matrix: candidate,
                vector: permutation.apply(vector),
                reordered: true,
                permutation: Some(permutation),
            });
        }
    }

    Ok(Reordering {
        matrix: *matrix,
        vector: *vector,
        reordered: false,
        permutation: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutation_order() {
        let perms: Vec<Vec<usize>> = permutations(3)
            .unwrap()
            .iter()
            .map(|p| p.indices().to_vec())
            .collect();
        assert_eq!(
            perms,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn test_permutation_count_is_bounded() {
        assert_eq!(permutations(4).unwrap().len(), 24);
        assert!(permutations(MAX_PERMUTATION_DIMENSION + 1).is_err());
    }

    #[test]
    fn test_reorder_finds_dominant_rows() {
        let matrix = [[1.0, 4.0, 1.0], [1.0, 1.0, 3.0], [2.0, 1.0, 1.0]];
        let result = reorder(&matrix, &[1.0, 2.0, 3.0]).unwrap();
        assert!(result.reordered);
        assert_eq!(result.permutation.unwrap().indices(), &[2, 0, 1]);
        assert_eq!(
            result.matrix,
            [[2.0, 1.0, 1.0], [1.0, 4.0, 1.0], [1.0, 1.0, 3.0]]
        );
        assert_eq!(result.vector, [3.0, 1.0, 2.0]);
        assert!(is_diagonally_dominant(&result.matrix));
    }

    #[test]
    fn test_reorder_example_system_picks_first_match() {
        let matrix = [[1.0, -2.0, -3.0], [2.0, 1.0, 1.0], [1.0, 3.0, -2.0]];
        let result = reorder(&matrix, &[-1.0, 6.0, 13.0]).unwrap();
        assert_eq!(result.permutation.unwrap().indices(), &[1, 2, 0]);
        assert_eq!(result.vector, [6.0, 13.0, -1.0]);
    }

    #[test]
    fn test_reorder_without_dominant_permutation() {
        let matrix = [[1.0, 2.0, 2.0], [2.0, 1.0, 2.0], [2.0, 2.0, 1.0]];
        let vector = [5.0, 5.0, 5.0];
        let result = reorder(&matrix, &vector).unwrap();
        assert!(!result.reordered);
        assert!(result.permutation.is_none());
        assert_eq!(result.matrix, matrix);
        assert_eq!(result.vector, vector);
    }
}
