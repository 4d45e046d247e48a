//! # Fitness
//!
//! Fitness is the number of positions at which a candidate matches a target,
//! counted over the overlapping prefix only. It is a raw count, not a ratio.
//!
//! ```rust
//! use mustrings::candidate::Candidate;
//! use mustrings::fitness::{fitness, Challenge, TargetChallenge};
//!
//! let target = Candidate::from("ABCD");
//! assert_eq!(fitness(&Candidate::from("AXCD"), &target), 3);
//!
//! let challenge = TargetChallenge::new(target);
//! assert_eq!(challenge.score(&Candidate::from("ABYD")), 3);
//! ```

use crate::candidate::Candidate;

/// Counts the positions in `min(len(candidate), len(target))` where both agree.
pub fn fitness(candidate: &Candidate, target: &Candidate) -> usize {
    candidate
        .chars()
        .iter()
        .zip(target.chars())
        .filter(|(a, b)| a == b)
        .count()
}

/// Scores candidates. Higher scores rank first.
pub trait Challenge: Send + Sync {
    fn score(&self, candidate: &Candidate) -> usize;
}

/// Scores candidates by positional match against an explicit target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetChallenge {
    target: Candidate,
}

impl TargetChallenge {
    pub fn new(target: impl Into<Candidate>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &Candidate {
        &self.target
    }
}

impl Challenge for TargetChallenge {
    fn score(&self, candidate: &Candidate) -> usize {
        fitness(candidate, &self.target)
    }
}
