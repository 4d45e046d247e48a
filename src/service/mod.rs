//! # Service Boundary
//!
//! The engine itself performs no I/O. This module models the collaborators a
//! surrounding service provides: a persisted list of candidates and the
//! evolve/restart operations built on it.
pub mod evolver;
pub mod store;

pub use evolver::{EvolveRequest, Evolver};
pub use store::{CandidateStore, MemoryStore};
