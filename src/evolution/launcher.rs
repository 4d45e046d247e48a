use tracing::{debug, trace};

use super::{
    options::{EvolutionOptions, LogLevel},
    rate::Rate,
};
use crate::{
    breeding,
    candidate::Candidate,
    error::{GeneticError, Result},
    fitness::Challenge,
    rng::UniformSource,
    selection,
};
use rayon::prelude::*;

/// A candidate paired with its fitness for the duration of one ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ScoredCandidate {
    candidate: Candidate,
    score: usize,
}

/// Runs the generational pipeline: mutate, score, rank, cull, reproduce.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Chall: Challenge> {
    challenge: Chall,
    options: EvolutionOptions,
}

impl<Chall: Challenge> EvolutionLauncher<Chall> {
    /// Creates a new `EvolutionLauncher` scoring against `challenge`.
    pub fn new(challenge: Chall, options: EvolutionOptions) -> Self {
        Self { challenge, options }
    }

    pub fn challenge(&self) -> &Chall {
        &self.challenge
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    /// Mutates every candidate independently, in population order.
    pub fn mutate_all<R: UniformSource + ?Sized>(
        &self,
        population: &[Candidate],
        rng: &mut R,
    ) -> Vec<Candidate> {
        let mutation = self.options.get_mutation();
        population
            .iter()
            .map(|candidate| mutation.mutate(candidate, rng))
            .collect()
    }

    /// Scores every candidate and sorts them fittest-first.
    ///
    /// The sort is stable, so equally fit candidates keep their relative order.
    /// Populations of at least `parallel_threshold` members are scored with
    /// rayon.
    pub fn rank(&self, population: Vec<Candidate>) -> Vec<Candidate> {
        self.score_and_rank(population)
            .into_iter()
            .map(|scored| scored.candidate)
            .collect()
    }

    fn score_and_rank(&self, population: Vec<Candidate>) -> Vec<ScoredCandidate> {
        let score = |candidate: Candidate| ScoredCandidate {
            score: self.challenge.score(&candidate),
            candidate,
        };

        let mut scored: Vec<ScoredCandidate> =
            if population.len() >= self.options.get_parallel_threshold() {
                population.into_par_iter().map(score).collect()
            } else {
                population.into_iter().map(score).collect()
            };

        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }

    /// Cull stage with the death rate of `generation`.
    pub fn cull<R: UniformSource + ?Sized>(
        &self,
        generation: u64,
        population: Vec<Candidate>,
        rng: &mut R,
    ) -> Result<Vec<Candidate>> {
        let deaths = self.options.get_death_rate().draws(generation)?;
        selection::cull(self.options.get_distribution(), deaths, population, rng)
    }

    /// Reproduction stage with the birth rate of `generation`.
    pub fn reproduce<R: UniformSource + ?Sized>(
        &self,
        generation: u64,
        population: Vec<Candidate>,
        rng: &mut R,
    ) -> Result<Vec<Candidate>> {
        let births = self.options.get_birth_rate().draws(generation)?;
        breeding::reproduce(self.options.get_distribution(), births, population, rng)
    }

    /// Advances `population` by one generation.
    ///
    /// # Errors
    ///
    /// - `GeneticError::InvalidPopulation` if the population is empty while the
    ///   death rate requests draws.
    /// - `GeneticError::InvalidParameter` for an invalid rate or operator setting.
    ///   Operator settings are checked before any variate is drawn.
    pub fn advance_generation<R: UniformSource + ?Sized>(
        &self,
        generation: u64,
        population: Vec<Candidate>,
        rng: &mut R,
    ) -> Result<Vec<Candidate>> {
        self.options.validate()?;

        let mutated = self.mutate_all(&population, rng);
        let ranked = self.score_and_rank(mutated);
        let best_score = ranked.first().map(|scored| scored.score);

        if let LogLevel::Verbose = self.options.get_log_level() {
            for (rank, scored) in ranked.iter().enumerate() {
                trace!(generation, rank, score = scored.score, candidate = %scored.candidate);
            }
        }

        let ranked: Vec<Candidate> = ranked.into_iter().map(|scored| scored.candidate).collect();
        let ranked_size = ranked.len();

        let survivors = self.cull(generation, ranked, rng)?;
        let survivor_count = survivors.len();
        let next = self.reproduce(generation, survivors, rng)?;

        match self.options.get_log_level() {
            LogLevel::Minimal | LogLevel::Verbose => debug!(
                generation,
                ranked = ranked_size,
                survivors = survivor_count,
                population = next.len(),
                best_score,
                "advanced generation"
            ),
            LogLevel::None => {}
        }

        Ok(next)
    }

    /// Advances `population` by `count` generations, numbered from `start`.
    ///
    /// Every generation's birth and death rate is checked before the first
    /// one runs. Zero generations return the population unchanged.
    pub fn advance_generations<R: UniformSource + ?Sized>(
        &self,
        start: u64,
        count: u64,
        population: Vec<Candidate>,
        rng: &mut R,
    ) -> Result<Vec<Candidate>> {
        self.validate(start, count)?;

        let mut population = population;
        for generation in start..start + count {
            population = self.advance_generation(generation, population, rng)?;
        }
        Ok(population)
    }

    /// Checks the options and every rate `advance_generations(start, count, ..)`
    /// would use, without touching a population.
    ///
    /// Zero generations are always valid, since nothing would run.
    pub fn validate(&self, start: u64, count: u64) -> Result<()> {
        if count == 0 {
            return Ok(());
        }

        let end = start.checked_add(count).ok_or_else(|| {
            GeneticError::InvalidParameter(format!(
                "generation range {} + {} overflows",
                start, count
            ))
        })?;

        self.options.validate()?;
        for rate in [self.options.get_birth_rate(), self.options.get_death_rate()] {
            match rate {
                Rate::Constant(_) => {
                    rate.draws(start)?;
                }
                Rate::Schedule(_) => {
                    for generation in start..end {
                        rate.draws(generation)?;
                    }
                }
            }
        }
        Ok(())
    }
}
