//! Rank-biased index sampling and the cull stage built on it.
pub mod cull;
pub mod distribution;

pub use cull::cull;
pub use distribution::{select, select_randoms, SelectionDistribution};
