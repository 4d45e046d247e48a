//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the configuration of the generation
//! scheduler: birth and death rates, the mutation operator, the selection
//! distribution, logging verbosity and the population size above which
//! fitness scoring runs in parallel.
//!
//! ## Example
//!
//! ```rust
//! use mustrings::evolution::{EvolutionOptions, LogLevel, Rate};
//!
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_birth_rate().draws(0).unwrap(), 10);
//! assert_eq!(default_options.get_death_rate().draws(0).unwrap(), 9);
//!
//! let options = EvolutionOptions::builder()
//!     .birth_rate(Rate::Constant(2.0))
//!     .death_rate(Rate::Constant(5.0))
//!     .log_level(LogLevel::Minimal)
//!     .build();
//! assert_eq!(options.get_birth_rate().draws(0).unwrap(), 2);
//! ```
//!
//! ## LogLevel
//!
//! - `Verbose`: one `trace!` event per ranked candidate on top of `Minimal`.
//! - `Minimal`: one `debug!` event per generation.
//! - `None`: no per-generation events.

use super::rate::Rate;
use crate::{error::Result, operators::Mutation, selection::SelectionDistribution};

pub const DEFAULT_BIRTH_RATE: f64 = 10.0;
pub const DEFAULT_DEATH_RATE: f64 = 9.0;
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogLevel {
    Verbose,
    Minimal,
    #[default]
    None,
}

#[derive(Debug, Clone)]
pub struct EvolutionOptions {
    birth_rate: Rate,
    death_rate: Rate,
    mutation: Mutation,
    distribution: SelectionDistribution,
    log_level: LogLevel,
    /// Minimum population size scored in parallel
    parallel_threshold: usize,
}

impl EvolutionOptions {
    pub fn new(birth_rate: Rate, death_rate: Rate, log_level: LogLevel) -> Self {
        Self {
            birth_rate,
            death_rate,
            log_level,
            ..Self::default()
        }
    }

    /// Checks the operator settings that do not depend on the generation.
    pub fn validate(&self) -> Result<()> {
        self.mutation.validate()?;
        self.distribution.validate()
    }

    pub fn get_birth_rate(&self) -> &Rate {
        &self.birth_rate
    }

    pub fn get_death_rate(&self) -> &Rate {
        &self.death_rate
    }

    pub fn get_mutation(&self) -> &Mutation {
        &self.mutation
    }

    pub fn get_distribution(&self) -> &SelectionDistribution {
        &self.distribution
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    /// Returns the minimum population size scored in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Sets the birth rate.
    pub fn set_birth_rate(&mut self, birth_rate: Rate) {
        self.birth_rate = birth_rate;
    }

    /// Sets the death rate.
    pub fn set_death_rate(&mut self, death_rate: Rate) {
        self.death_rate = death_rate;
    }

    pub fn set_mutation(&mut self, mutation: Mutation) {
        self.mutation = mutation;
    }

    pub fn set_distribution(&mut self, distribution: SelectionDistribution) {
        self.distribution = distribution;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Sets the parallel threshold.
    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            birth_rate: Rate::Constant(DEFAULT_BIRTH_RATE),
            death_rate: Rate::Constant(DEFAULT_DEATH_RATE),
            mutation: Mutation::default(),
            distribution: SelectionDistribution::default(),
            log_level: LogLevel::None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    birth_rate: Option<Rate>,
    death_rate: Option<Rate>,
    mutation: Option<Mutation>,
    distribution: Option<SelectionDistribution>,
    log_level: Option<LogLevel>,
    parallel_threshold: Option<usize>,
}

impl EvolutionOptionsBuilder {
    /// Sets the birth rate.
    pub fn birth_rate(mut self, value: impl Into<Rate>) -> Self {
        self.birth_rate = Some(value.into());
        self
    }

    /// Sets the death rate.
    pub fn death_rate(mut self, value: impl Into<Rate>) -> Self {
        self.death_rate = Some(value.into());
        self
    }

    pub fn mutation(mut self, value: Mutation) -> Self {
        self.mutation = Some(value);
        self
    }

    pub fn distribution(mut self, value: SelectionDistribution) -> Self {
        self.distribution = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Sets the parallel threshold.
    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        EvolutionOptions {
            birth_rate: self
                .birth_rate
                .unwrap_or(Rate::Constant(DEFAULT_BIRTH_RATE)),
            death_rate: self
                .death_rate
                .unwrap_or(Rate::Constant(DEFAULT_DEATH_RATE)),
            mutation: self.mutation.unwrap_or_default(),
            distribution: self.distribution.unwrap_or_default(),
            log_level: self.log_level.unwrap_or_default(),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(DEFAULT_PARALLEL_THRESHOLD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_match_default() {
        let built = EvolutionOptions::builder().build();
        let default = EvolutionOptions::default();

        assert_eq!(built.get_birth_rate().value(0), default.get_birth_rate().value(0));
        assert_eq!(built.get_death_rate().value(0), default.get_death_rate().value(0));
        assert_eq!(built.get_mutation(), default.get_mutation());
        assert_eq!(built.get_distribution(), default.get_distribution());
        assert_eq!(built.get_log_level(), &LogLevel::None);
        assert_eq!(built.get_parallel_threshold(), 1000);
    }

    #[test]
    fn test_setters() {
        let mut options = EvolutionOptions::new(
            Rate::Constant(1.0),
            Rate::Constant(2.0),
            LogLevel::Verbose,
        );
        options.set_parallel_threshold(10);
        options.set_death_rate(Rate::Constant(4.0));

        assert_eq!(options.get_birth_rate().value(0), 1.0);
        assert_eq!(options.get_death_rate().value(0), 4.0);
        assert_eq!(options.get_log_level(), &LogLevel::Verbose);
        assert_eq!(options.get_parallel_threshold(), 10);
    }

    #[test]
    fn test_validate_catches_bad_distribution() {
        let options = EvolutionOptions::builder()
            .distribution(SelectionDistribution::Hyperbolic { steepness: -1.0 })
            .build();
        assert!(options.validate().is_err());
        assert!(EvolutionOptions::default().validate().is_ok());
    }
}
