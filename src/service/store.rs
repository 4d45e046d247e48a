use std::collections::VecDeque;

use crate::{
    candidate::Candidate,
    error::{GeneticError, Result},
};

/// A persisted list of candidates, popped from the front and pushed to the back.
pub trait CandidateStore {
    /// Removes and returns the first stored candidate, if any.
    fn pop(&mut self) -> Result<Option<Candidate>>;

    /// Appends `candidate` to the end of the list.
    fn push(&mut self, candidate: &Candidate) -> Result<()>;

    /// Removes every stored candidate.
    fn clear(&mut self) -> Result<()>;
}

/// An in-memory `CandidateStore`, optionally capped at a fixed number of
/// candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    candidates: VecDeque<Candidate>,
    limit: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that refuses pushes once it holds `limit` candidates.
    pub fn bounded(limit: usize) -> Self {
        Self {
            candidates: VecDeque::new(),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }
}

impl FromIterator<Candidate> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        Self {
            candidates: iter.into_iter().collect(),
            limit: None,
        }
    }
}

impl CandidateStore for MemoryStore {
    fn pop(&mut self) -> Result<Option<Candidate>> {
        Ok(self.candidates.pop_front())
    }

    fn push(&mut self, candidate: &Candidate) -> Result<()> {
        if let Some(limit) = self.limit {
            if self.candidates.len() >= limit {
                return Err(GeneticError::Store(format!(
                    "store is full at {} candidates",
                    limit
                )));
            }
        }
        self.candidates.push_back(candidate.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.candidates.clear();
        Ok(())
    }
}
