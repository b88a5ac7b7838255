//! # BitFlipMutation
//!
//! Flips randomly chosen bits, one candidate position per trial.
use super::MutationStrategy;
use crate::{genome::Genome, rng::RandomNumberGenerator};

pub const DEFAULT_MUTATION_TRIALS: usize = 1;
pub const DEFAULT_FLIP_PROBABILITY: f64 = 0.5;

/// Stochastic bit-flip mutation.
///
/// Each of `trials` rounds picks an index uniformly (indices may repeat
/// across rounds) and flips it with probability `flip_probability`. A
/// repeated index can be flipped back.
#[derive(Debug, Clone, PartialEq)]
pub struct BitFlipMutation {
    trials: usize,
    flip_probability: f64,
}

impl BitFlipMutation {
    /// `flip_probability` is clamped into `[0, 1]`; NaN becomes `0`.
    pub fn new(trials: usize, flip_probability: f64) -> Self {
        let flip_probability = if flip_probability.is_nan() {
            0.0
        } else {
            flip_probability.clamp(0.0, 1.0)
        };
        Self {
            trials,
            flip_probability,
        }
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn flip_probability(&self) -> f64 {
        self.flip_probability
    }
}

impl Default for BitFlipMutation {
    fn default() -> Self {
        Self::new(DEFAULT_MUTATION_TRIALS, DEFAULT_FLIP_PROBABILITY)
    }
}

impl MutationStrategy for BitFlipMutation {
    fn mutate(&self, mut genome: Genome, rng: &mut RandomNumberGenerator) -> Genome {
        if genome.is_empty() {
            return genome;
        }

        for _ in 0..self.trials {
            let idx = rng.gen_index(genome.len());
            if rng.gen_bool(self.flip_probability) {
                genome.flip(idx);
            }
        }

        genome
    }
}
