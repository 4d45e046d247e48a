//! # Candidate
//!
//! A `Candidate` is one member of the population: a flat sequence of
//! characters compared position by position against a target. Candidates have
//! no identity beyond their value.
//!
//! ## Example
//!
//! ```rust
//! use mustrings::candidate::{random_candidate, Candidate};
//! use mustrings::rng::RandomNumberGenerator;
//!
//! let candidate = Candidate::from("ABCD");
//! assert_eq!(candidate.len(), 4);
//! assert_eq!(candidate.to_string(), "ABCD");
//!
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let fresh = random_candidate(&mut rng);
//! assert!(fresh.chars().iter().all(|c| (*c as u32) <= 255));
//! ```

use std::fmt;

use crate::rng::UniformSource;

/// Largest codepoint produced by random character generation.
pub const MAX_CODEPOINT: f64 = 255.0;

/// Continuation probability of `random_candidate`.
pub const SEED_CONTINUATION: f64 = 0.7;

/// An immutable string of characters evolved by the engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub struct Candidate {
    chars: Vec<char>,
}

impl Candidate {
    pub fn new(chars: Vec<char>) -> Self {
        Self { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn into_chars(self) -> Vec<char> {
        self.chars
    }
}

impl From<&str> for Candidate {
    fn from(value: &str) -> Self {
        Self::new(value.chars().collect())
    }
}

impl From<String> for Candidate {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Vec<char>> for Candidate {
    fn from(chars: Vec<char>) -> Self {
        Self::new(chars)
    }
}

impl From<Candidate> for String {
    fn from(candidate: Candidate) -> Self {
        candidate.chars.into_iter().collect()
    }
}

impl FromIterator<char> for Candidate {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| fmt::Write::write_char(f, *c))
    }
}

/// Draws a character with codepoint `round(u * 255)`.
///
/// Rounding gives the end codepoints 0 and 255 half the weight of the
/// interior ones.
pub fn random_char<R: UniformSource + ?Sized>(rng: &mut R) -> char {
    let codepoint = (rng.next_uniform() * MAX_CODEPOINT).round();
    char::from(codepoint.clamp(0.0, MAX_CODEPOINT) as u8)
}

/// Generates a fresh candidate, appending random characters while a draw
/// falls below `SEED_CONTINUATION`. Used to pad a population that has fewer
/// stored candidates than requested.
pub fn random_candidate<R: UniformSource + ?Sized>(rng: &mut R) -> Candidate {
    let mut chars = Vec::new();
    while SEED_CONTINUATION > rng.next_uniform() {
        chars.push(random_char(rng));
    }
    Candidate::new(chars)
}
