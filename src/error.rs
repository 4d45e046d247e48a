//! # Error Types
//!
//! This module defines the error type shared by every stage of the engine.
//! All failures are immediate and synchronous: an operator or stage returns
//! the error to its caller instead of logging it.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use mustrings::error::{GeneticError, Result};
//!
//! fn checked_rate(rate: f64) -> Result<f64> {
//!     if rate.is_finite() && rate >= 0.0 {
//!         Ok(rate)
//!     } else {
//!         Err(GeneticError::InvalidParameter(format!("bad rate {}", rate)))
//!     }
//! }
//!
//! assert!(checked_rate(9.0).is_ok());
//! assert!(checked_rate(-1.0).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while evolving a population.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// A selection draw was requested over an empty population.
    #[error("Invalid population: cannot select an index from an empty population")]
    InvalidPopulation,

    /// A rate, probability, variate or count is negative, non-finite or out of range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A candidate store failed to pop, push or clear.
    #[error("Store error: {0}")]
    Store(String),
}

/// A specialized Result type for evolution operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Checks that `value` is a finite probability in `[0, 1]`.
pub(crate) fn check_probability(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(GeneticError::InvalidParameter(format!(
            "{} must be a finite probability in [0, 1], got {}",
            name, value
        )))
    }
}
