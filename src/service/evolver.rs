use tracing::info;

use super::store::CandidateStore;
use crate::{
    candidate::{random_candidate, Candidate},
    error::{GeneticError, Result},
    evolution::EvolutionLauncher,
    fitness::Challenge,
    rng::UniformSource,
};

/// Parameters of one evolve call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EvolveRequest {
    /// Number of candidates taken from the store.
    pub elements: i64,
    /// Number of generations to advance.
    pub generations: i64,
}

impl Default for EvolveRequest {
    fn default() -> Self {
        Self {
            elements: 10,
            generations: 1,
        }
    }
}

impl EvolveRequest {
    pub fn new(elements: i64, generations: i64) -> Self {
        Self {
            elements,
            generations,
        }
    }

    /// Returns `(elements, generations)` once both are known to be non-negative.
    pub fn validate(&self) -> Result<(usize, u64)> {
        let elements = usize::try_from(self.elements).map_err(|_| {
            GeneticError::InvalidParameter(format!(
                "element count must be non-negative, got {}",
                self.elements
            ))
        })?;
        let generations = u64::try_from(self.generations).map_err(|_| {
            GeneticError::InvalidParameter(format!(
                "generation count must be non-negative, got {}",
                self.generations
            ))
        })?;
        Ok((elements, generations))
    }
}

/// Evolves candidates held in a `CandidateStore`.
///
/// ```rust
/// use mustrings::evolution::{EvolutionLauncher, EvolutionOptions};
/// use mustrings::fitness::TargetChallenge;
/// use mustrings::rng::RandomNumberGenerator;
/// use mustrings::service::{EvolveRequest, Evolver, MemoryStore};
///
/// let launcher = EvolutionLauncher::new(TargetChallenge::new("hello"), EvolutionOptions::default());
/// let mut evolver = Evolver::new(launcher, MemoryStore::new());
/// let mut rng = RandomNumberGenerator::from_seed(4);
///
/// let published = evolver.evolve(EvolveRequest::new(10, 1), &mut rng).unwrap();
/// assert_eq!(evolver.store().len(), published.len());
///
/// evolver.restart().unwrap();
/// assert!(evolver.store().is_empty());
/// ```
#[derive(Debug)]
pub struct Evolver<Chall: Challenge, Store: CandidateStore> {
    launcher: EvolutionLauncher<Chall>,
    store: Store,
}

impl<Chall: Challenge, Store: CandidateStore> Evolver<Chall, Store> {
    pub fn new(launcher: EvolutionLauncher<Chall>, store: Store) -> Self {
        Self { launcher, store }
    }

    pub fn launcher(&self) -> &EvolutionLauncher<Chall> {
        &self.launcher
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn into_store(self) -> Store {
        self.store
    }

    /// Pops `elements` stored candidates, filling every missing one with a
    /// fresh random candidate, advances them `generations` generations from
    /// generation 0 and pushes each result back to the store.
    ///
    /// The request, the options and every rate the run would use are
    /// validated before the store is touched. Candidates already popped are
    /// not restored if the store or the population itself fails later.
    pub fn evolve<R: UniformSource + ?Sized>(
        &mut self,
        request: EvolveRequest,
        rng: &mut R,
    ) -> Result<Vec<Candidate>> {
        let (elements, generations) = request.validate()?;
        self.launcher.validate(0, generations)?;

        let mut population = Vec::new();
        let mut padded = 0usize;
        for _ in 0..elements {
            match self.store.pop()? {
                Some(candidate) => population.push(candidate),
                None => {
                    padded += 1;
                    population.push(random_candidate(rng));
                }
            }
        }
        info!(elements, padded, generations, "evolving population");

        let evolved = self
            .launcher
            .advance_generations(0, generations, population, rng)?;

        for candidate in &evolved {
            self.store.push(candidate)?;
        }
        info!(published = evolved.len(), "published evolved population");

        Ok(evolved)
    }

    /// Clears every stored candidate.
    pub fn restart(&mut self) -> Result<()> {
        self.store.clear()?;
        info!("cleared candidate store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        evolution::{EvolutionOptions, Rate},
        fitness::TargetChallenge,
        rng::RandomNumberGenerator,
        service::store::MemoryStore,
    };

    fn evolver(store: MemoryStore) -> Evolver<TargetChallenge, MemoryStore> {
        let launcher = EvolutionLauncher::new(
            TargetChallenge::new("ABCD"),
            EvolutionOptions::default(),
        );
        Evolver::new(launcher, store)
    }

    #[test]
    fn test_zero_generations_republishes_popped_candidates() {
        let store: MemoryStore = ["one", "two", "three"]
            .into_iter()
            .map(Candidate::from)
            .collect();
        let mut evolver = evolver(store);
        let mut rng = RandomNumberGenerator::from_seed(1);

        let published = evolver.evolve(EvolveRequest::new(2, 0), &mut rng).unwrap();
        assert_eq!(published, vec![Candidate::from("one"), Candidate::from("two")]);

        let stored: Vec<String> = evolver.store().iter().map(|c| c.to_string()).collect();
        assert_eq!(stored, vec!["three", "one", "two"]);
    }

    #[test]
    fn test_missing_candidates_are_padded() {
        let mut evolver = evolver(MemoryStore::new());
        let mut rng = RandomNumberGenerator::from_seed(2);

        let published = evolver.evolve(EvolveRequest::new(4, 0), &mut rng).unwrap();
        assert_eq!(published.len(), 4);
        assert_eq!(evolver.store().len(), 4);
    }

    #[test]
    fn test_negative_request_leaves_store_untouched() {
        let store: MemoryStore = ["kept"].into_iter().map(Candidate::from).collect();
        let mut evolver = evolver(store);
        let mut rng = RandomNumberGenerator::from_seed(3);

        for request in [EvolveRequest::new(-1, 1), EvolveRequest::new(1, -1)] {
            let result = evolver.evolve(request, &mut rng);
            assert!(matches!(result, Err(GeneticError::InvalidParameter(_))));
        }
        assert_eq!(evolver.store().len(), 1);
    }

    #[test]
    fn test_one_generation_publishes_grown_population() {
        let mut evolver = evolver(MemoryStore::new());
        let mut rng = RandomNumberGenerator::from_seed(4);

        let published = evolver.evolve(EvolveRequest::default(), &mut rng).unwrap();
        // At most 9 distinct survivors, each joined by 10 offspring.
        assert!((11..=99).contains(&published.len()));
        assert_eq!(published.len() % 11, 0);
        assert_eq!(evolver.store().len(), published.len());
    }

    #[test]
    fn test_invalid_rate_leaves_store_untouched() {
        let store: MemoryStore = ["a", "b", "c"].into_iter().map(Candidate::from).collect();
        let options = EvolutionOptions::builder()
            .death_rate(Rate::Constant(-1.0))
            .build();
        let launcher = EvolutionLauncher::new(TargetChallenge::new("ABCD"), options);
        let mut evolver = Evolver::new(launcher, store);
        let mut rng = RandomNumberGenerator::from_seed(5);

        let result = evolver.evolve(EvolveRequest::new(3, 1), &mut rng);
        assert!(matches!(result, Err(GeneticError::InvalidParameter(_))));

        let stored: Vec<String> = evolver.store().iter().map(|c| c.to_string()).collect();
        assert_eq!(stored, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_huge_request_fails_without_allocating() {
        let store: MemoryStore = ["only"].into_iter().map(Candidate::from).collect();
        let options = EvolutionOptions::builder()
            .death_rate(Rate::Constant(-1.0))
            .build();
        let launcher = EvolutionLauncher::new(TargetChallenge::new("ABCD"), options);
        let mut evolver = Evolver::new(launcher, store);
        let mut rng = RandomNumberGenerator::from_seed(6);

        // Rejected before any pop or allocation sized by the request.
        let result = evolver.evolve(EvolveRequest::new(i64::MAX, 1), &mut rng);
        assert!(matches!(result, Err(GeneticError::InvalidParameter(_))));
        assert_eq!(evolver.store().len(), 1);
    }

    #[test]
    fn test_full_store_reports_store_error() {
        let mut evolver = evolver(MemoryStore::bounded(2));
        let mut rng = RandomNumberGenerator::from_seed(7);

        let result = evolver.evolve(EvolveRequest::new(3, 0), &mut rng);
        assert!(matches!(result, Err(GeneticError::Store(_))));
        assert_eq!(evolver.store().len(), 2);
    }
}
