use crate::{error::Result, genome::Genome};

/// Scores a genome. Higher is better.
pub trait Challenge {
    /// Number of bits every genome scored by this challenge must have.
    fn genome_length(&self) -> usize;

    fn score(&self, genome: &Genome) -> Result<u64>;
}
