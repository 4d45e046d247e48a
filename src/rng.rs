//! # Uniform Variate Sources
//!
//! Every stochastic operation in the engine draws from a `UniformSource`
//! passed in by the caller, so a run can be replayed exactly.
//!
//! ## Example
//!
//! ```rust
//! use mustrings::rng::{RandomNumberGenerator, UniformSource};
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let u = rng.next_uniform();
//! assert!((0.0..1.0).contains(&u));
//! ```
//!
//! ## Replaying a fixed sequence
//!
//! ```rust
//! use mustrings::rng::{SequenceSource, UniformSource};
//!
//! let mut source = SequenceSource::new(vec![0.25, 0.75]).unwrap();
//! assert_eq!(source.next_uniform(), 0.25);
//! assert_eq!(source.next_uniform(), 0.75);
//! assert_eq!(source.next_uniform(), 0.25);
//! ```

use rand::{rngs::StdRng, thread_rng, Rng, SeedableRng};

use crate::error::{GeneticError, Result};

/// A source of uniform variates in `[0, 1)`.
pub trait UniformSource {
    /// Returns the next variate in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;
}

impl<T: UniformSource + ?Sized> UniformSource for &mut T {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// A thread-local random number generator that can be used without synchronization.
///
/// It uses the built-in `ThreadRng` from the `rand` crate, which is automatically
/// seeded from the system entropy and is thread-local.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadLocalRng;

impl UniformSource for ThreadLocalRng {
    fn next_uniform(&mut self) -> f64 {
        thread_rng().gen::<f64>()
    }
}

/// A wrapper around the `rand` crate's `StdRng`.
///
/// Cloning the generator clones its state, so both copies yield the same stream.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformSource for RandomNumberGenerator {
    fn next_uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of variates, starting over once the list is exhausted.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceSource {
    values: Vec<f64>,
    position: usize,
}

impl SequenceSource {
    /// Creates a source replaying `values` in order.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidParameter` if `values` is empty or any
    /// value lies outside `[0, 1)`.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(GeneticError::InvalidParameter(
                "a replay sequence needs at least one value".to_string(),
            ));
        }
        if let Some(bad) = values.iter().find(|v| !(0.0..1.0).contains(*v)) {
            return Err(GeneticError::InvalidParameter(format!(
                "replay values must lie in [0, 1), got {}",
                bad
            )));
        }

        Ok(Self {
            values,
            position: 0,
        })
    }

    /// Creates a source that always yields `value`.
    pub fn constant(value: f64) -> Result<Self> {
        Self::new(vec![value])
    }

    /// Number of variates handed out so far.
    pub fn consumed(&self) -> usize {
        self.position
    }
}

impl UniformSource for SequenceSource {
    fn next_uniform(&mut self) -> f64 {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_uniform_range() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        for _ in 0..1000 {
            let u = rng.next_uniform();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_clone() {
        let mut rng1 = RandomNumberGenerator::from_seed(42);
        let mut rng2 = rng1.clone();

        let nums1: Vec<f64> = (0..5).map(|_| rng1.next_uniform()).collect();
        let nums2: Vec<f64> = (0..5).map(|_| rng2.next_uniform()).collect();

        assert_eq!(nums1, nums2);
    }

    #[test]
    fn test_thread_local_rng() {
        let mut rng = ThreadLocalRng;
        let u = rng.next_uniform();
        assert!((0.0..1.0).contains(&u));
    }

    #[test]
    fn test_sequence_source_cycles() {
        let mut source = SequenceSource::new(vec![0.1, 0.2, 0.3]).unwrap();
        let drawn: Vec<f64> = (0..5).map(|_| source.next_uniform()).collect();

        assert_eq!(drawn, vec![0.1, 0.2, 0.3, 0.1, 0.2]);
        assert_eq!(source.consumed(), 5);
    }

    #[test]
    fn test_sequence_source_rejects_bad_values() {
        assert!(SequenceSource::new(Vec::new()).is_err());
        assert!(SequenceSource::new(vec![0.5, 1.0]).is_err());
        assert!(SequenceSource::new(vec![-0.1]).is_err());
        assert!(SequenceSource::constant(f64::NAN).is_err());
    }

    #[test]
    fn test_mut_reference_is_a_source() {
        fn draw<R: UniformSource>(mut rng: R) -> f64 {
            rng.next_uniform()
        }

        let mut source = SequenceSource::constant(0.5).unwrap();
        assert_eq!(draw(&mut source), 0.5);
        assert_eq!(source.consumed(), 1);
    }
}
