//! Offspring generation.
pub mod reproduce;

pub use reproduce::reproduce;
