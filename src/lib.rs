pub mod breeding;
pub mod candidate;
pub mod error;
pub mod evolution;
pub mod fitness;
pub mod operators;
pub mod rng;
pub mod selection;
pub mod service;

// Re-export commonly used types for convenience
pub use candidate::Candidate;
pub use error::{GeneticError, Result};
pub use evolution::{EvolutionLauncher, EvolutionOptions, Rate};
pub use fitness::{fitness, Challenge, TargetChallenge};
pub use rng::{RandomNumberGenerator, UniformSource};
