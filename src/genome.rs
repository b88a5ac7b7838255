//! # Genome
//!
//! A `Genome` is a fixed-length selection vector over the candidate shifts:
//! bit `i` set means column `i` of the hours table is picked. This module
//! also hosts the random constructors and the ranking helpers the launcher
//! runs every generation.
//!
//! ## Example
//!
//! ```rust
//! use shiftga::genome::{generate_population, Genome};
//! use shiftga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let population = generate_population(10, 6, &mut rng);
//!
//! assert_eq!(population.len(), 10);
//! assert!(population.iter().all(|genome| genome.len() == 6));
//!
//! let genome = Genome::from_bits(vec![false, true, true, false]);
//! assert_eq!(genome.to_string(), "0110");
//! ```

use std::cmp::Reverse;
use std::fmt;

use crate::{error::Result, evolution::Challenge, rng::RandomNumberGenerator};

/// A binary selection vector, one bit per candidate slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genome {
    bits: Vec<bool>,
}

/// The genomes evaluated together in one generation.
pub type Population = Vec<Genome>;

impl Genome {
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Builds a genome of `length` bits with the given indices set.
    /// Indices outside the genome are ignored.
    pub fn with_selected(length: usize, selected: &[usize]) -> Self {
        let mut bits = vec![false; length];
        for &idx in selected.iter().filter(|&&idx| idx < length) {
            bits[idx] = true;
        }
        Self { bits }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Sets bit `idx` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range.
    pub fn set(&mut self, idx: usize, value: bool) {
        self.bits[idx] = value;
    }

    /// Inverts bit `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range.
    pub fn flip(&mut self, idx: usize) {
        self.bits[idx] = !self.bits[idx];
    }

    /// Number of selected slots (1-bits).
    pub fn selection_count(&self) -> usize {
        self.bits.iter().filter(|&&bit| bit).count()
    }

    /// Indices of the selected slots, ascending.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(idx, &bit)| bit.then_some(idx))
            .collect()
    }

    /// Joins `self[..cut]` with `other[cut..]`.
    pub(crate) fn splice(&self, other: &Self, cut: usize) -> Self {
        let mut bits = Vec::with_capacity(self.len());
        bits.extend_from_slice(&self.bits[..cut]);
        bits.extend_from_slice(&other.bits[cut..]);
        Self { bits }
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// A genome paired with the fitness it scored in one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredGenome {
    pub genome: Genome,
    pub score: u64,
}

/// Returns a genome of `length` independently drawn fair bits.
pub fn generate_genome(length: usize, rng: &mut RandomNumberGenerator) -> Genome {
    Genome {
        bits: (0..length).map(|_| rng.gen_bit()).collect(),
    }
}

/// Returns `size` independently generated genomes of `length` bits.
pub fn generate_population(
    size: usize,
    length: usize,
    rng: &mut RandomNumberGenerator,
) -> Population {
    (0..size).map(|_| generate_genome(length, rng)).collect()
}

/// Scores every genome and sorts the result by fitness, best first.
///
/// The sort is stable: genomes with equal fitness keep their relative order.
///
/// # Errors
///
/// Propagates the first scoring error, e.g. a genome whose length does not
/// match the challenge.
pub fn score_population<C>(population: &[Genome], challenge: &C) -> Result<Vec<ScoredGenome>>
where
    C: Challenge + ?Sized,
{
    let mut scored = population
        .iter()
        .map(|genome| {
            Ok(ScoredGenome {
                genome: genome.clone(),
                score: challenge.score(genome)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    scored.sort_by_key(|entry| Reverse(entry.score));
    Ok(scored)
}

/// Orders a population by descending fitness.
pub fn rank_population<C>(population: &[Genome], challenge: &C) -> Result<Population>
where
    C: Challenge + ?Sized,
{
    Ok(score_population(population, challenge)?
        .into_iter()
        .map(|entry| entry.genome)
        .collect())
}
