//! # HoursChallenge
//!
//! Scores a genome against the hours table: the fitness of a selection is
//! the sum of the truncated mean hours of every selected shift.
//!
//! ## Example
//!
//! ```rust
//! use shiftga::evolution::Challenge;
//! use shiftga::fitness::HoursChallenge;
//! use shiftga::genome::Genome;
//! use shiftga::hours::HoursMatrix;
//!
//! let hours = HoursMatrix::from_columns(vec![vec![10, 11], vec![20, 20], vec![30, 31]]).unwrap();
//! let challenge = HoursChallenge::new(hours);
//!
//! let genome = Genome::with_selected(3, &[0, 2]);
//! assert_eq!(challenge.score(&genome).unwrap(), 10 + 30);
//! ```

use tracing::warn;

use crate::{
    constraints::{CardinalityConstraint, Constraint},
    error::{GeneticError, Result},
    evolution::Challenge,
    genome::Genome,
    hours::HoursMatrix,
};

/// Fitness of a shift selection against historical hours.
#[derive(Debug, Clone)]
pub struct HoursChallenge {
    hours: HoursMatrix,
    /// When set, scoring a genome that breaks this constraint emits a
    /// warning. The score itself is unaffected.
    watch: Option<CardinalityConstraint>,
}

impl HoursChallenge {
    pub fn new(hours: HoursMatrix) -> Self {
        Self { hours, watch: None }
    }

    /// Emits a `warn` event whenever a scored genome selects more than
    /// `limit` slots, which means repair was skipped upstream.
    pub fn with_cardinality_watch(mut self, limit: usize) -> Self {
        self.watch = Some(CardinalityConstraint::new(limit));
        self
    }

    pub fn hours(&self) -> &HoursMatrix {
        &self.hours
    }
}

impl Challenge for HoursChallenge {
    fn genome_length(&self) -> usize {
        self.hours.num_columns()
    }

    fn score(&self, genome: &Genome) -> Result<u64> {
        if genome.len() != self.hours.num_columns() {
            return Err(GeneticError::LengthMismatch {
                expected: self.hours.num_columns(),
                actual: genome.len(),
            });
        }

        if let Some(watch) = &self.watch {
            for violation in watch.check(genome) {
                warn!(genome = %genome, "{}", violation);
            }
        }

        genome
            .selected_indices()
            .into_iter()
            .try_fold(0u64, |total, idx| {
                total.checked_add(self.hours.floored_mean(idx)).ok_or_else(|| {
                    GeneticError::FitnessCalculation(format!(
                        "Score of genome {} overflows u64",
                        genome
                    ))
                })
            })
    }
}
