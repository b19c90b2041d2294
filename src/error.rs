//! Error types for the Jacobi solver.
//!
//! This module provides a unified error type [`JacobiError`] that covers
//! all error conditions that can occur during equation parsing, system
//! validation, configuration loading, and report export.

use thiserror::Error;

/// Result type alias using [`JacobiError`].
pub type Result<T> = std::result::Result<T, JacobiError>;

/// Unified error type for all Jacobi operations.
#[derive(Error, Debug)]
pub enum JacobiError {
    // ============ Equation Parsing Errors ============
    /// Malformed equation text (missing '=', empty side, bad constant)
    #[error("Error in equation {equation}: {message}")]
    Format { equation: usize, message: String },

    // ============ System Validation Errors ============
    /// Wrong number of equations, rows or columns
    #[error("Dimension error: {message}")]
    Dimension { message: String },

    /// A diagonal coefficient is (near-)zero
    #[error(
        "The coefficient of {variable} in equation {equation} is zero. \
         The Jacobi method requires non-zero diagonal entries"
    )]
    ZeroDiagonal { variable: String, equation: usize },

    // ============ Configuration Errors ============
    /// Invalid solver configuration value
    #[error("Invalid solver configuration: {message}")]
    InvalidConfig { message: String },

    /// Error decoding a JSON configuration file
    #[error("Failed to parse configuration file '{path}': {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    // ============ I/O Errors ============
    /// Error reading an equation or configuration file
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing the iteration table or report
    #[error("Export error: {message}")]
    Export { message: String },
}

impl JacobiError {
    /// Create a format error for the given 1-based equation index
    pub fn format(equation: usize, message: impl Into<String>) -> Self {
        Self::Format {
            equation,
            message: message.into(),
        }
    }

    /// Create a dimension error
    pub fn dimension(message: impl Into<String>) -> Self {
        Self::Dimension {
            message: message.into(),
        }
    }

    /// Create a zero-diagonal error for the given 1-based equation index
    pub fn zero_diagonal(variable: impl Into<String>, equation: usize) -> Self {
        Self::ZeroDiagonal {
            variable: variable.into(),
            equation,
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an export error
    pub fn export(message: impl Into<String>) -> Self {
        Self::Export {
            message: message.into(),
        }
    }
}
