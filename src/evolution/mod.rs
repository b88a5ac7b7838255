pub mod builder;
pub mod challenge;
pub mod launcher;
pub mod options;
pub mod report;

pub use builder::EvolutionLauncherBuilder;
pub use challenge::Challenge;
pub use launcher::{EvolutionLauncher, EvolutionOutcome};
pub use options::{EvolutionOptions, LogLevel};
pub use report::GenerationStats;
