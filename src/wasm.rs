//! WASM bindings for Jacobi Core.
//!
//! This module provides JavaScript-friendly bindings for use in web pages.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmJacobiSolver } from 'jacobi_core';
//!
//! await init();
//!
//! const solver = WasmJacobiSolver.with_config(
//!   "x - 2y - 3z = -1",
//!   "2x + y + z = 6",
//!   "x + 3y - 2z = 13",
//!   100,
//!   1e-4,
//! );
//!
//! for (let i = 0; i < 3; i++) {
//!   console.log(`${solver.variable_label(i)} = ${solver.solution()[i]}`);
//! }
//! document.getElementById('table').textContent = solver.table_text();
//! ```

use wasm_bindgen::prelude::*;

use crate::error::JacobiError;
use crate::report::SolveReport;
use crate::solver::{Solver, SolverConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(error: JacobiError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// WASM-compatible Jacobi solver.
///
/// Solving happens in the constructor; the accessors expose the report.
#[wasm_bindgen]
pub struct WasmJacobiSolver {
    report: SolveReport,
}

#[wasm_bindgen]
impl WasmJacobiSolver {
    /// Solve a system of three equations with default configuration.
    ///
    /// # Returns
    /// A solved `WasmJacobiSolver` or an error message naming the faulty
    /// equation or variable.
    #[wasm_bindgen(constructor)]
    pub fn new(eq1: &str, eq2: &str, eq3: &str) -> Result<WasmJacobiSolver, JsValue> {
        Self::with_config(eq1, eq2, eq3, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE)
    }

    /// Solve a system of three equations with custom configuration.
    ///
    /// # Arguments
    /// * `max_iterations` - Hard cap on iterations (default: 100)
    /// * `tolerance` - Reserved tolerance (default: 1e-4)
    #[wasm_bindgen]
    pub fn with_config(
        eq1: &str,
        eq2: &str,
        eq3: &str,
        max_iterations: usize,
        tolerance: f64,
    ) -> Result<WasmJacobiSolver, JsValue> {
        let config = SolverConfig::new()
            .with_max_iterations(max_iterations)
            .with_tolerance(tolerance);
        let report = Solver::with_config(config)
            .solve_equations(&[eq1, eq2, eq3])
            .map_err(to_js)?;

        Ok(WasmJacobiSolver { report })
    }

    /// Solution vector in variable order.
    #[wasm_bindgen]
    pub fn solution(&self) -> Vec<f64> {
        self.report.solution.to_vec()
    }

    /// Whether a plateau was detected.
    #[wasm_bindgen(getter)]
    pub fn converged(&self) -> bool {
        self.report.converged
    }

    /// Whether the solved matrix was diagonally dominant.
    #[wasm_bindgen(getter)]
    pub fn dominant(&self) -> bool {
        self.report.dominant
    }

    /// Number of recorded iterations.
    #[wasm_bindgen(getter)]
    pub fn iterations(&self) -> usize {
        self.report.iterations()
    }

    /// Label of the variable in the given column.
    #[wasm_bindgen]
    pub fn variable_label(&self, index: usize) -> Option<String> {
        self.report.variables.get(index).map(str::to_string)
    }

    /// Human-readable summary of the result.
    #[wasm_bindgen]
    pub fn summary(&self) -> String {
        self.report.to_string()
    }

    /// Iteration table capped for display.
    #[wasm_bindgen]
    pub fn table_text(&self) -> String {
        self.report.table().render_display()
    }

    /// Complete iteration table as CSV.
    #[wasm_bindgen]
    pub fn table_csv(&self) -> Result<String, JsValue> {
        self.report.table().to_csv_string().map_err(to_js)
    }

    /// Full report as JSON.
    #[wasm_bindgen]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.report.to_json().map_err(to_js)
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Validate a single equation without solving.
///
/// Returns `undefined` when the equation parses, otherwise the error message.
#[wasm_bindgen]
pub fn check_equation(equation: &str) -> Option<String> {
    crate::equation::parse_equation(equation, crate::DIMENSION)
        .err()
        .map(|e| e.to_string())
}
