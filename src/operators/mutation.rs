//! # Mutation
//!
//! A candidate is mutated with probability `mutation_chance`. A mutated
//! candidate is rebuilt character by character: each character is dropped with
//! `drop_chance`, otherwise replaced by a random character with
//! `replace_chance`, otherwise kept. Random characters are then appended while
//! a draw falls below `growth_chance`.
//!
//! ```rust
//! use mustrings::candidate::Candidate;
//! use mustrings::operators::Mutation;
//! use mustrings::rng::RandomNumberGenerator;
//!
//! let frozen = Mutation::default().with_mutation_chance(0.0).unwrap();
//! let mut rng = RandomNumberGenerator::from_seed(5);
//! let candidate = Candidate::from("hello");
//! assert_eq!(frozen.mutate(&candidate, &mut rng), candidate);
//! ```

use crate::{
    candidate::{random_char, Candidate},
    error::{check_probability, GeneticError, Result},
    rng::UniformSource,
};

/// Probabilities driving the mutation operator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Mutation {
    mutation_chance: f64,
    drop_chance: f64,
    replace_chance: f64,
    growth_chance: f64,
}

impl Mutation {
    /// Creates a mutation operator.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidParameter` if any probability is not a
    /// finite value in `[0, 1]`. A `growth_chance` of exactly 1 would never
    /// terminate and is rejected too.
    pub fn new(
        mutation_chance: f64,
        drop_chance: f64,
        replace_chance: f64,
        growth_chance: f64,
    ) -> Result<Self> {
        let mutation = Self {
            mutation_chance,
            drop_chance,
            replace_chance,
            growth_chance,
        };
        mutation.validate()?;
        Ok(mutation)
    }

    pub fn with_mutation_chance(mut self, mutation_chance: f64) -> Result<Self> {
        self.mutation_chance = mutation_chance;
        self.validate()?;
        Ok(self)
    }

    /// Re-checks every probability, e.g. after deserialization.
    pub fn validate(&self) -> Result<()> {
        check_probability("mutation chance", self.mutation_chance)?;
        check_probability("drop chance", self.drop_chance)?;
        check_probability("replace chance", self.replace_chance)?;
        check_probability("growth chance", self.growth_chance)?;
        if self.growth_chance >= 1.0 {
            return Err(GeneticError::InvalidParameter(
                "growth chance must be below 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn mutation_chance(&self) -> f64 {
        self.mutation_chance
    }

    pub fn drop_chance(&self) -> f64 {
        self.drop_chance
    }

    pub fn replace_chance(&self) -> f64 {
        self.replace_chance
    }

    pub fn growth_chance(&self) -> f64 {
        self.growth_chance
    }

    /// Returns a possibly mutated copy of `candidate`.
    pub fn mutate<R: UniformSource + ?Sized>(
        &self,
        candidate: &Candidate,
        rng: &mut R,
    ) -> Candidate {
        if self.mutation_chance <= rng.next_uniform() {
            return candidate.clone();
        }

        let mut mutated = Vec::with_capacity(candidate.len());
        for &c in candidate.chars() {
            if self.drop_chance > rng.next_uniform() {
                continue;
            }
            if self.replace_chance > rng.next_uniform() {
                mutated.push(random_char(rng));
            } else {
                mutated.push(c);
            }
        }

        while self.growth_chance > rng.next_uniform() {
            mutated.push(random_char(rng));
        }

        Candidate::new(mutated)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Mutation {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Settings {
            mutation_chance: f64,
            drop_chance: f64,
            replace_chance: f64,
            growth_chance: f64,
        }

        let settings = Settings::deserialize(deserializer)?;
        Mutation::new(
            settings.mutation_chance,
            settings.drop_chance,
            settings.replace_chance,
            settings.growth_chance,
        )
        .map_err(serde::de::Error::custom)
    }
}

impl Default for Mutation {
    fn default() -> Self {
        Self {
            mutation_chance: 0.15,
            drop_chance: 0.05,
            replace_chance: 0.10,
            growth_chance: 0.95,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{RandomNumberGenerator, SequenceSource};

    #[test]
    fn test_zero_chance_is_identity() {
        let mutation = Mutation::default().with_mutation_chance(0.0).unwrap();
        let candidate = Candidate::from("unchanged");

        // Even a draw of exactly 0 must not trigger a mutation.
        let mut zeros = SequenceSource::constant(0.0).unwrap();
        assert_eq!(mutation.mutate(&candidate, &mut zeros), candidate);

        let mut rng = RandomNumberGenerator::from_seed(9);
        for _ in 0..100 {
            assert_eq!(mutation.mutate(&candidate, &mut rng), candidate);
        }
    }

    #[test]
    fn test_untriggered_mutation_consumes_one_draw() {
        let mutation = Mutation::default();
        let mut source = SequenceSource::constant(0.5).unwrap();
        let candidate = Candidate::from("abc");

        assert_eq!(mutation.mutate(&candidate, &mut source), candidate);
        assert_eq!(source.consumed(), 1);
    }

    #[test]
    fn test_drop_replace_keep_and_grow() {
        let mutation = Mutation::default();
        let mut source = SequenceSource::new(vec![
            0.1,  // mutate
            0.01, // drop 'a'
            0.5, 0.05, 0.2, // replace 'b' with char(51)
            0.5, 0.5, // keep 'c'
            0.9,  // grow
            0.4,  // appended char(102)
            0.99, // stop growing
        ])
        .unwrap();

        let mutated = mutation.mutate(&Candidate::from("abc"), &mut source);
        assert_eq!(mutated.to_string(), "3cf");
        assert_eq!(source.consumed(), 10);
    }

    #[test]
    fn test_tail_growth_expected_length() {
        let mutation = Mutation::new(1.0, 0.0, 0.0, 0.95).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(21);
        let runs = 4000;
        let total: usize = (0..runs)
            .map(|_| mutation.mutate(&Candidate::default(), &mut rng).len())
            .sum();
        let mean = total as f64 / runs as f64;

        // Geometric with continuation 0.95 has mean 19.
        assert!((16.0..22.0).contains(&mean), "mean tail length {}", mean);
    }

    #[test]
    fn test_invalid_probabilities() {
        assert!(Mutation::new(1.5, 0.05, 0.1, 0.95).is_err());
        assert!(Mutation::new(0.15, f64::NAN, 0.1, 0.95).is_err());
        assert!(Mutation::new(0.15, 0.05, -0.1, 0.95).is_err());
        assert!(Mutation::new(0.15, 0.05, 0.1, 1.0).is_err());
        assert!(Mutation::default().with_mutation_chance(f64::INFINITY).is_err());
    }
}
