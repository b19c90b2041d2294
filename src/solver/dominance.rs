//! Diagonal dominance check.

/// Check whether a square matrix is (weakly) diagonally dominant by rows.
///
/// Every row must satisfy `|A[i][i]| >= sum_{j != i} |A[i][j]|`; equality
/// counts as dominant.
pub fn is_diagonally_dominant<R: AsRef<[f64]>>(matrix: &[R]) -> bool {
    matrix.iter().enumerate().all(|(i, row)| {
        let row = row.as_ref();
        let Some(diagonal) = row.get(i) else {
            return false;
        };
        let off_diagonal: f64 = row
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, a)| a.abs())
            .sum();
        diagonal.abs() >= off_diagonal
    })
}
