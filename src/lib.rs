pub mod constraints;
pub mod error;
pub mod evolution;
pub mod fitness;
pub mod genome;
pub mod hours;
pub mod ingest;
pub mod rng;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use evolution::{Challenge, EvolutionLauncher, EvolutionOptions, EvolutionOutcome};
pub use fitness::HoursChallenge;
pub use genome::{Genome, Population, ScoredGenome};
pub use hours::HoursMatrix;
