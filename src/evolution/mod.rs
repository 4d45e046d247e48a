pub mod launcher;
pub mod options;
pub mod rate;

pub use launcher::EvolutionLauncher;
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
pub use rate::Rate;
