//! Genetic operators acting on single candidates or parent pairs.
pub mod crossover;
pub mod mutation;

pub use crossover::crossover;
pub use mutation::Mutation;
