//! # Reproduction
//!
//! Every member of the (already culled) population acts once as a focal
//! parent. For each focal index `i`, `partners` indices are drawn through the
//! selection distribution and each draw `j` forms the pair
//! `(population[i], population[j])`. All pairs are collected first, then each
//! is crossed over, and the offspring are appended after the parents.
//!
//! The resulting population holds `n * (1 + partners)` members.

use crate::{
    candidate::Candidate, error::Result, operators::crossover, rng::UniformSource,
    selection::distribution::SelectionDistribution,
};

/// Appends `population.len() * partners` offspring to `population`.
///
/// # Errors
///
/// Propagates selection errors. An empty population yields no draws and is
/// returned unchanged.
///
/// ```rust
/// use mustrings::breeding::reproduce;
/// use mustrings::candidate::Candidate;
/// use mustrings::rng::RandomNumberGenerator;
/// use mustrings::selection::SelectionDistribution;
///
/// let parents = vec![Candidate::from("AAAA"), Candidate::from("BB")];
/// let mut rng = RandomNumberGenerator::from_seed(6);
/// let grown = reproduce(&SelectionDistribution::default(), 2, parents, &mut rng).unwrap();
/// assert_eq!(grown.len(), 6);
/// ```
pub fn reproduce<R: UniformSource + ?Sized>(
    distribution: &SelectionDistribution,
    partners: usize,
    population: Vec<Candidate>,
    rng: &mut R,
) -> Result<Vec<Candidate>> {
    let size = population.len();

    let mut pairs = Vec::with_capacity(size * partners);
    for focal in 0..size {
        for partner in distribution.select_randoms(size, partners, rng)? {
            pairs.push((focal, partner));
        }
    }

    let offspring: Vec<Candidate> = pairs
        .into_iter()
        .map(|(focal, partner)| crossover(&population[focal], &population[partner], rng))
        .collect();

    let mut grown = population;
    grown.extend(offspring);
    Ok(grown)
}
