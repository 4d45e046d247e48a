//! # Rate
//!
//! Birth and death rates are functions of the generation index. Both are
//! constant by default, but a schedule closure can make them adaptive.
//!
//! ```rust
//! use mustrings::evolution::Rate;
//!
//! let constant = Rate::Constant(9.0);
//! assert_eq!(constant.draws(42).unwrap(), 9);
//!
//! let tapering = Rate::schedule(|generation| 10.0 / (1.0 + generation as f64));
//! assert_eq!(tapering.draws(0).unwrap(), 10);
//! assert_eq!(tapering.draws(3).unwrap(), 3);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::{GeneticError, Result};

/// A generation-indexed sampling count.
#[derive(Clone)]
pub enum Rate {
    Constant(f64),
    Schedule(Arc<dyn Fn(u64) -> f64 + Send + Sync>),
}

impl Rate {
    pub fn schedule<F>(f: F) -> Self
    where
        F: Fn(u64) -> f64 + Send + Sync + 'static,
    {
        Self::Schedule(Arc::new(f))
    }

    /// Raw rate value for `generation`.
    pub fn value(&self, generation: u64) -> f64 {
        match self {
            Self::Constant(value) => *value,
            Self::Schedule(f) => f(generation),
        }
    }

    /// Number of draws the rate calls for at `generation`.
    ///
    /// Fractional rates round up.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidParameter` for a negative or non-finite rate.
    pub fn draws(&self, generation: u64) -> Result<usize> {
        let value = self.value(generation);
        if !value.is_finite() || value < 0.0 {
            return Err(GeneticError::InvalidParameter(format!(
                "rate at generation {} must be finite and non-negative, got {}",
                generation, value
            )));
        }
        Ok(value.ceil() as usize)
    }
}

impl fmt::Debug for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Self::Schedule(_) => f.write_str("Schedule(..)"),
        }
    }
}

impl From<f64> for Rate {
    fn from(value: f64) -> Self {
        Self::Constant(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractional_rate_rounds_up() {
        assert_eq!(Rate::Constant(2.5).draws(0).unwrap(), 3);
        assert_eq!(Rate::Constant(0.0).draws(0).unwrap(), 0);
    }

    #[test]
    fn test_invalid_rates() {
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Rate::Constant(bad).draws(0),
                Err(GeneticError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_schedule_sees_generation() {
        let rate = Rate::schedule(|generation| if generation < 5 { 1.0 } else { -1.0 });
        assert!(rate.draws(4).is_ok());
        assert!(rate.draws(5).is_err());
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Rate::Constant(9.0)), "Constant(9.0)");
        assert_eq!(format!("{:?}", Rate::schedule(|_| 1.0)), "Schedule(..)");
    }
}
