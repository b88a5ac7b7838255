//! # Cardinality Constraint
//!
//! Caps how many slots a genome may select. Over-full genomes are repaired
//! by clearing randomly chosen selected bits until the cap holds.

use tracing::debug;

use crate::constraints::{Constraint, ConstraintViolation};
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;

/// Default maximum number of selected slots.
pub const DEFAULT_CARDINALITY_LIMIT: usize = 5;

/// Limits the number of 1-bits a genome may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardinalityConstraint {
    limit: usize,
}

impl CardinalityConstraint {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns a copy of `genome` with at most `limit` selected slots.
    ///
    /// Each step clears one bit drawn uniformly from the bits that are still
    /// set, so the repair takes exactly `selection_count - limit` steps. The
    /// result's selected slots are always a subset of the input's.
    pub fn enforce(&self, mut genome: Genome, rng: &mut RandomNumberGenerator) -> Genome {
        let mut selected = genome.selected_indices();
        if selected.len() <= self.limit {
            return genome;
        }

        let removals = selected.len() - self.limit;
        for _ in 0..removals {
            let pick = rng.gen_index(selected.len());
            genome.set(selected.swap_remove(pick), false);
        }

        debug!(removals, limit = self.limit, "repaired over-full genome");
        genome
    }
}

impl Default for CardinalityConstraint {
    fn default() -> Self {
        Self::new(DEFAULT_CARDINALITY_LIMIT)
    }
}

impl Constraint for CardinalityConstraint {
    fn check(&self, genome: &Genome) -> Vec<ConstraintViolation> {
        let count = genome.selection_count();
        if count <= self.limit {
            return Vec::new();
        }

        vec![ConstraintViolation::with_severity(
            "Cardinality",
            format!("{} slots selected, at most {} allowed", count, self.limit),
            (count - self.limit) as f64,
        )]
    }

    fn repair_with_rng(&self, genome: &mut Genome, rng: &mut RandomNumberGenerator) -> bool {
        *genome = self.enforce(std::mem::take(genome), rng);
        true
    }
}
