//! # SinglePointCrossover
//!
//! Cuts both parents at the same random point and swaps their tails.
use super::CrossoverStrategy;
use crate::{
    error::{GeneticError, Result},
    genome::Genome,
    rng::RandomNumberGenerator,
};

/// Single-point recombination of two equally long genomes.
#[derive(Debug, Clone, Default)]
pub struct SinglePointCrossover;

impl SinglePointCrossover {
    pub fn new() -> Self {
        Self
    }
}

impl CrossoverStrategy for SinglePointCrossover {
    /// Picks a cut `p` uniformly from `1..len` and returns
    /// `(a[..p] + b[p..], b[..p] + a[p..])`.
    ///
    /// Genomes shorter than two bits have no interior cut point and are
    /// returned unchanged.
    fn crossover(
        &self,
        a: Genome,
        b: Genome,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Genome, Genome)> {
        if a.len() != b.len() {
            return Err(GeneticError::LengthMismatch {
                expected: a.len(),
                actual: b.len(),
            });
        }

        let length = a.len();
        if length < 2 {
            return Ok((a, b));
        }

        let cut = rng.gen_range(1..length);
        Ok((a.splice(&b, cut), b.splice(&a, cut)))
    }
}
