//! Main solver interface.

use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::equation;
use crate::error::{JacobiError, Result};
use crate::report::SolveReport;
use crate::system::{validate_system, LinearSystem};

use super::dominance::is_diagonally_dominant;
use super::jacobi::JacobiSolver;
use super::reorder::reorder;
use super::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};

/// Configuration for the solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Hard cap on the number of Jacobi iterations.
    pub max_iterations: usize,
    /// Reserved for a distance-based convergence criterion.
    ///
    /// Validated and reported, but convergence is decided by the 4-decimal
    /// plateau rule alone.
    pub tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the (reserved) tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Check that the configuration values are usable.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(JacobiError::invalid_config(format!(
                "tolerance must be a finite non-negative number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// Load a configuration from a JSON file; missing keys take defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| JacobiError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Self =
            serde_json::from_str(&content).map_err(|e| JacobiError::ConfigParse {
                path: path.display().to_string(),
                source: e,
            })?;
        config.validate()?;
        Ok(config)
    }
}

/// Parses, checks, reorders and solves linear systems.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Create a solver with default configuration.
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    /// Create a solver with custom configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Parse and solve a system given as equation strings.
    pub fn solve_equations<S: AsRef<str>>(&self, equations: &[S]) -> Result<SolveReport> {
        self.config.validate()?;
        let system = equation::parse_system(equations)?;
        self.solve_system(&system)
    }

    /// Solve an already parsed system.
    ///
    /// The diagonal is checked in the parsed row order first. Rows are then
    /// reordered when the matrix is not diagonally dominant and a dominant
    /// permutation exists.
    pub fn solve_system(&self, system: &LinearSystem) -> Result<SolveReport> {
        self.config.validate()?;
        validate_system(system)?;

        let mut permutation = None;
        let mut matrix = system.matrix;
        let mut constants = system.constants;

        if !is_diagonally_dominant(&matrix) {
            let reordering = reorder(&matrix, &constants)?;
            if reordering.reordered {
                matrix = reordering.matrix;
                constants = reordering.vector;
                permutation = reordering.permutation;
            }
        }

        let dominant = is_diagonally_dominant(&matrix);
        if !dominant {
            warn!("No row order makes the system diagonally dominant; convergence is not guaranteed");
        }

        let jacobi = JacobiSolver::with_config(self.config.max_iterations, self.config.tolerance);
        let result = jacobi.solve(&matrix, &constants);

        if result.converged {
            info!(
                "Converged after {} recorded iterations",
                result.history.len()
            );
        }

        Ok(SolveReport::assemble(
            result,
            system.variables.clone(),
            dominant,
            permutation,
            self.config.tolerance,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::rounding::to_fixed;
    use crate::system::VariableSet;
    use crate::EXAMPLE_SYSTEM;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_example_system_converges() {
        let report = Solver::with_config(SolverConfig::new().with_max_iterations(100))
            .solve_equations(&EXAMPLE_SYSTEM)
            .unwrap();

        assert!(report.converged);
        assert!(report.dominant);
        assert_eq!(report.permutation.as_ref().unwrap().indices(), &[1, 2, 0]);
        assert_eq!(report.variables.names(), &["x", "y", "z"]);

        let expected = ["2.0000", "3.0000", "-1.0000"];
        for (value, text) in report.solution.iter().zip(expected) {
            assert_eq!(to_fixed(*value, 4), text);
        }
        assert_abs_diff_eq!(report.solution[0], 2.0, epsilon = 1e-4);
        assert_abs_diff_eq!(report.solution[1], 3.0, epsilon = 1e-4);
        assert_abs_diff_eq!(report.solution[2], -1.0, epsilon = 1e-4);

        assert_eq!(report.detected_at, Some(42));
        assert_eq!(report.history.len(), 45);
    }

    #[test]
    fn test_terminates_within_budget_plus_confirmations() {
        for max in [4, 10, 43, 44, 100] {
            let report = Solver::with_config(SolverConfig::new().with_max_iterations(max))
                .solve_equations(&EXAMPLE_SYSTEM)
                .unwrap();
            assert!(report.history.len() <= max + 3);
        }
    }

    #[test]
    fn test_small_budget_does_not_converge() {
        let report = Solver::with_config(SolverConfig::new().with_max_iterations(20))
            .solve_equations(&EXAMPLE_SYSTEM)
            .unwrap();
        assert!(!report.converged);
        assert_eq!(report.history.len(), 20);
    }

    #[test]
    fn test_no_dominant_permutation() {
        let report = Solver::with_config(SolverConfig::new().with_max_iterations(30))
            .solve_equations(&["x+2y+2z=5", "2x+y+2z=5", "2x+2y+z=5"])
            .unwrap();
        assert!(!report.dominant);
        assert!(report.permutation.is_none());
        assert!(!report.converged);
        assert_eq!(report.history.len(), 30);
    }

    #[test]
    fn test_already_dominant_system_keeps_order() {
        let report = Solver::new()
            .solve_equations(&["4x+y+z=6", "x+3y+z=5", "x+y+2z=4"])
            .unwrap();
        assert!(report.dominant);
        assert!(report.permutation.is_none());
        assert!(report.converged);
    }

    #[test]
    fn test_zero_diagonal_fails_before_iterating() {
        let err = Solver::new()
            .solve_equations(&["0x+y+z=5", "x+y+z=6", "x-y+2z=1"])
            .unwrap_err();
        match err {
            JacobiError::ZeroDiagonal { variable, equation } => {
                assert_eq!(variable, "x");
                assert_eq!(equation, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_variables_in_first_equation() {
        // Only two names in the first equation: canonical names are used and
        // nothing matches them.
        let err = Solver::new()
            .solve_equations(&["y+z=5", "x+y+z=6", "x-y+2z=1"])
            .unwrap_err();
        assert!(matches!(err, JacobiError::ZeroDiagonal { equation: 1, .. }));
        assert!(err.to_string().contains("x1"));
    }

    #[test]
    fn test_solve_system_directly() {
        let system = LinearSystem::new(
            [[4.0, 1.0, 1.0], [1.0, 3.0, 1.0], [1.0, 1.0, 2.0]],
            [6.0, 5.0, 4.0],
            VariableSet::canonical(3),
        )
        .unwrap();
        let report = Solver::new().solve_system(&system).unwrap();
        assert!(report.converged);
        assert_eq!(report.history.len(), 35);
    }

    #[test]
    fn test_invalid_tolerance() {
        let err = Solver::with_config(SolverConfig::new().with_tolerance(f64::NAN))
            .solve_equations(&EXAMPLE_SYSTEM)
            .unwrap_err();
        assert!(matches!(err, JacobiError::InvalidConfig { .. }));
        assert!(SolverConfig::new().with_tolerance(-1.0).validate().is_err());
        assert!(SolverConfig::new().with_tolerance(0.0).validate().is_ok());
    }

    #[test]
    fn test_config_from_json() {
        let config: SolverConfig = serde_json::from_str(r#"{"max_iterations": 250}"#).unwrap();
        assert_eq!(config.max_iterations, 250);
        assert_eq!(config.tolerance, DEFAULT_TOLERANCE);

        let path = std::env::temp_dir().join("jacobi_core_config_test.json");
        std::fs::write(&path, r#"{"tolerance": 0.001, "max_iterations": 12}"#).unwrap();
        let config = SolverConfig::from_file(&path).unwrap();
        assert_eq!(config, SolverConfig::new().with_max_iterations(12).with_tolerance(0.001));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_config_file_errors() {
        let missing = std::env::temp_dir().join("jacobi_core_missing_config.json");
        assert!(matches!(
            SolverConfig::from_file(&missing),
            Err(JacobiError::FileRead { .. })
        ));

        let path = std::env::temp_dir().join("jacobi_core_bad_config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            SolverConfig::from_file(&path),
            Err(JacobiError::ConfigParse { .. })
        ));
        std::fs::remove_file(&path).ok();
    }
}
