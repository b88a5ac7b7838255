//! # Breeding Operators
//!
//! The `CrossoverStrategy` and `MutationStrategy` traits define how new
//! genomes are produced from the parents chosen by a selection strategy.
//! The launcher applies them in order: cross the pair over, then mutate
//! each child.
pub mod crossover;
pub mod mutation;

use std::fmt::Debug;

use crate::{error::Result, genome::Genome, rng::RandomNumberGenerator};

/// Recombines two parents into two children.
pub trait CrossoverStrategy
where
    Self: Debug + Send + Sync,
{
    /// ## Errors
    ///
    /// Fails with `GeneticError::LengthMismatch` if the parents differ in length.
    fn crossover(
        &self,
        a: Genome,
        b: Genome,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Genome, Genome)>;
}

/// Perturbs a single genome.
pub trait MutationStrategy
where
    Self: Debug + Send + Sync,
{
    fn mutate(&self, genome: Genome, rng: &mut RandomNumberGenerator) -> Genome;
}

pub use crossover::SinglePointCrossover;
pub use mutation::BitFlipMutation;
