//! # Constraints Module
//!
//! Constraints describe requirements a genome must satisfy to be a valid
//! shift selection. A constraint can report violations and, more
//! importantly for the search, repair a genome in place so that every
//! genome entering a population is valid.
//!
//! ## Basic Usage
//!
//! ```rust
//! use shiftga::constraints::{CardinalityConstraint, Constraint};
//! use shiftga::genome::Genome;
//! use shiftga::rng::RandomNumberGenerator;
//!
//! let constraint = CardinalityConstraint::new(2);
//! let mut rng = RandomNumberGenerator::from_seed(4);
//!
//! let mut genome = Genome::with_selected(6, &[0, 1, 3, 5]);
//! assert_eq!(constraint.check(&genome).len(), 1);
//!
//! assert!(constraint.repair_with_rng(&mut genome, &mut rng));
//! assert!(constraint.is_satisfied(&genome));
//! assert_eq!(genome.selection_count(), 2);
//! ```

use std::fmt::{Debug, Display};

use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;

pub mod cardinality;

pub use cardinality::CardinalityConstraint;

/// Represents a violation of a constraint.
#[derive(Debug, Clone)]
pub struct ConstraintViolation {
    /// The name of the constraint that was violated
    constraint_name: String,
    /// A description of the violation
    description: String,
    /// An optional severity score (higher means more severe)
    severity: Option<f64>,
}

impl ConstraintViolation {
    /// Creates a new constraint violation with the given name and description.
    pub fn new<S: Into<String>, D: Into<String>>(constraint_name: S, description: D) -> Self {
        Self {
            constraint_name: constraint_name.into(),
            description: description.into(),
            severity: None,
        }
    }

    /// Creates a new constraint violation with the given name, description, and severity.
    pub fn with_severity<S: Into<String>, D: Into<String>>(
        constraint_name: S,
        description: D,
        severity: f64,
    ) -> Self {
        Self {
            constraint_name: constraint_name.into(),
            description: description.into(),
            severity: Some(severity),
        }
    }

    /// Returns the name of the constraint that was violated.
    pub fn constraint_name(&self) -> &str {
        &self.constraint_name
    }

    /// Returns the description of the violation.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the severity of the violation, if specified.
    pub fn severity(&self) -> Option<f64> {
        self.severity
    }
}

impl Display for ConstraintViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Constraint '{}' violated: {}{}",
            self.constraint_name(),
            self.description(),
            self.severity()
                .map(|s| format!(" (severity: {})", s))
                .unwrap_or_default()
        )
    }
}

/// Trait for constraints that can be applied to genomes.
pub trait Constraint: Debug + Send + Sync {
    /// Checks if the genome satisfies this constraint.
    ///
    /// Returns a vector of constraint violations. An empty vector indicates
    /// that the genome satisfies the constraint.
    fn check(&self, genome: &Genome) -> Vec<ConstraintViolation>;

    /// Attempts to repair the genome using a random number generator.
    ///
    /// Returns `true` if the genome satisfies the constraint afterwards.
    fn repair_with_rng(&self, genome: &mut Genome, rng: &mut RandomNumberGenerator) -> bool;

    /// Returns `true` if the genome has no violations.
    fn is_satisfied(&self, genome: &Genome) -> bool {
        self.check(genome).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_display() {
        let plain = ConstraintViolation::new("Cardinality", "7 slots selected");
        assert_eq!(
            plain.to_string(),
            "Constraint 'Cardinality' violated: 7 slots selected"
        );

        let weighted = ConstraintViolation::with_severity("Cardinality", "7 slots selected", 2.0);
        assert_eq!(weighted.severity(), Some(2.0));
        assert!(weighted.to_string().ends_with("(severity: 2)"));
    }
}
