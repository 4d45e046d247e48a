//! # Cull
//!
//! Shrinks a ranked population by sampling `count` indices through the
//! selection distribution and keeping exactly the members whose index was
//! drawn. Survivors keep their ranked order; duplicate draws collapse, so at
//! most `min(count, population.len())` members survive.

use crate::{
    candidate::Candidate, error::Result, rng::UniformSource,
    selection::distribution::SelectionDistribution,
};

/// Keeps the members of `population` whose index appears among `count` draws.
///
/// # Errors
///
/// Returns `GeneticError::InvalidPopulation` if `population` is empty and
/// `count` is non-zero.
///
/// ```rust
/// use mustrings::candidate::Candidate;
/// use mustrings::rng::RandomNumberGenerator;
/// use mustrings::selection::{cull, SelectionDistribution};
///
/// let population: Vec<Candidate> = ["a", "b", "c", "d", "e"]
///     .into_iter()
///     .map(Candidate::from)
///     .collect();
/// let mut rng = RandomNumberGenerator::from_seed(2);
/// let survivors = cull(&SelectionDistribution::default(), 9, population, &mut rng).unwrap();
/// assert!((1..=5).contains(&survivors.len()));
/// ```
pub fn cull<R: UniformSource + ?Sized>(
    distribution: &SelectionDistribution,
    count: usize,
    population: Vec<Candidate>,
    rng: &mut R,
) -> Result<Vec<Candidate>> {
    let drawn = distribution.select_randoms(population.len(), count, rng)?;

    let mut sampled = vec![false; population.len()];
    for index in drawn {
        sampled[index] = true;
    }

    Ok(population
        .into_iter()
        .zip(sampled)
        .filter_map(|(candidate, keep)| keep.then_some(candidate))
        .collect())
}
