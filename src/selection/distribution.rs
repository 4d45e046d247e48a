//! # Selection Distribution
//!
//! Maps a uniform draw `u` to an index into a population ranked fittest-first.
//! The same mapping picks reproduction partners and cull survivors.
//!
//! The default hyperbolic curve evaluates `c(u) = 1 - tanh(k * (1 - u))` with
//! `k = 5` and rescales it onto the ranking, so the index is
//! `round((c(u) - c(0)) / (c(1) - c(0)) * (n - 1))`. `u = 0` lands exactly on
//! the fittest member for any population size, `u -> 1` on the least fit, and
//! because `tanh` saturates quickly, roughly the lower half of the draws all
//! land within the first percent of the ranking.
//!
//! ```rust
//! use mustrings::selection::distribution::select;
//!
//! assert_eq!(select(10, 0.0).unwrap(), 0);
//! assert_eq!(select(10, 0.999_999).unwrap(), 9);
//! assert!(select(0, 0.5).is_err());
//! ```

use crate::{
    error::{GeneticError, Result},
    rng::UniformSource,
};

/// A parametrizable curve from `[0, 1)` onto ranked population indices.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionDistribution {
    /// `1 - tanh(steepness * (1 - u))`.
    Hyperbolic { steepness: f64 },
    /// `1 - logistic(1 - u)` with the logistic centred on `midpoint`.
    Logistic { steepness: f64, midpoint: f64 },
}

impl Default for SelectionDistribution {
    fn default() -> Self {
        Self::Hyperbolic { steepness: 5.0 }
    }
}

impl SelectionDistribution {
    pub fn hyperbolic(steepness: f64) -> Result<Self> {
        let distribution = Self::Hyperbolic { steepness };
        distribution.validate()?;
        Ok(distribution)
    }

    pub fn logistic(steepness: f64, midpoint: f64) -> Result<Self> {
        let distribution = Self::Logistic {
            steepness,
            midpoint,
        };
        distribution.validate()?;
        Ok(distribution)
    }

    /// Checks the curve parameters.
    pub fn validate(&self) -> Result<()> {
        let (steepness, midpoint) = match *self {
            Self::Hyperbolic { steepness } => (steepness, 0.0),
            Self::Logistic {
                steepness,
                midpoint,
            } => (steepness, midpoint),
        };
        if !steepness.is_finite() || steepness <= 0.0 {
            return Err(GeneticError::InvalidParameter(format!(
                "distribution steepness must be finite and positive, got {}",
                steepness
            )));
        }
        if !midpoint.is_finite() {
            return Err(GeneticError::InvalidParameter(format!(
                "distribution midpoint must be finite, got {}",
                midpoint
            )));
        }
        Ok(())
    }

    /// Relative rank in `[0, 1]` for the draw `u`, with `0 -> 0` and `1 -> 1`.
    fn position(&self, u: f64) -> f64 {
        let low = self.curve(0.0);
        let span = self.curve(1.0) - low;
        if !(span > 0.0) {
            return 0.0;
        }
        ((self.curve(u) - low) / span).clamp(0.0, 1.0)
    }

    fn curve(&self, u: f64) -> f64 {
        let flipped = 1.0 - u;
        match *self {
            Self::Hyperbolic { steepness } => 1.0 - (steepness * flipped).tanh(),
            Self::Logistic {
                steepness,
                midpoint,
            } => 1.0 - 1.0 / (1.0 + (-steepness * (flipped - midpoint)).exp()),
        }
    }

    /// Maps `u` to an index in `[0, population_size - 1]`.
    ///
    /// # Errors
    ///
    /// - `GeneticError::InvalidPopulation` if `population_size` is zero.
    /// - `GeneticError::InvalidParameter` if `u` is not finite or the curve
    ///   parameters are invalid.
    pub fn select(&self, population_size: usize, u: f64) -> Result<usize> {
        if population_size == 0 {
            return Err(GeneticError::InvalidPopulation);
        }
        if !u.is_finite() {
            return Err(GeneticError::InvalidParameter(format!(
                "selection draw must be finite, got {}",
                u
            )));
        }
        self.validate()?;

        let last = population_size - 1;
        let index = (self.position(u.clamp(0.0, 1.0)) * last as f64).round();
        Ok((index.max(0.0) as usize).min(last))
    }

    /// Draws `count` indices with replacement.
    ///
    /// No draw is made when `count` is zero, so an empty population is only
    /// rejected when at least one index is requested.
    pub fn select_randoms<R: UniformSource + ?Sized>(
        &self,
        population_size: usize,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<usize>> {
        (0..count)
            .map(|_| self.select(population_size, rng.next_uniform()))
            .collect()
    }
}

/// `select` on the default hyperbolic curve.
pub fn select(population_size: usize, u: f64) -> Result<usize> {
    SelectionDistribution::default().select(population_size, u)
}

/// `select_randoms` on the default hyperbolic curve.
pub fn select_randoms<R: UniformSource + ?Sized>(
    population_size: usize,
    count: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    SelectionDistribution::default().select_randoms(population_size, count, rng)
}
