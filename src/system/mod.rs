//! Linear system representation and validation.
//!
//! This module provides the internal representation of a system after
//! parsing. The [`LinearSystem`] struct holds the coefficient matrix, the
//! right-hand side and the shared variable ordering in a form suitable for
//! solving.

mod linear;
mod types;
mod validate;

pub use linear::LinearSystem;
pub use types::*;
pub use validate::{validate_system, ZERO_DIAGONAL_THRESHOLD};
