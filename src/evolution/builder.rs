use crate::{
    constraints::Constraint,
    error::{GeneticError, Result},
    selection::SelectionStrategy,
    strategy::{CrossoverStrategy, MutationStrategy},
};

use super::{Challenge, EvolutionLauncher};

/// Fluent construction of an `EvolutionLauncher` with custom operators.
///
/// # Example
///
/// ```
/// use shiftga::constraints::CardinalityConstraint;
/// use shiftga::evolution::builder::EvolutionLauncherBuilder;
/// use shiftga::fitness::HoursChallenge;
/// use shiftga::hours::HoursMatrix;
/// use shiftga::selection::RouletteWheelSelection;
/// use shiftga::strategy::{BitFlipMutation, SinglePointCrossover};
///
/// let hours = HoursMatrix::from_columns(vec![vec![4], vec![8]]).unwrap();
/// let launcher = EvolutionLauncherBuilder::new()
///     .with_selection_strategy(RouletteWheelSelection::new())
///     .with_crossover_strategy(SinglePointCrossover::new())
///     .with_mutation_strategy(BitFlipMutation::new(2, 0.3))
///     .with_constraint(CardinalityConstraint::new(1))
///     .with_challenge(HoursChallenge::new(hours))
///     .build()
///     .unwrap();
/// # let _ = launcher;
/// ```
pub struct EvolutionLauncherBuilder<Chall, Sel, Cross, Mut, Cons>
where
    Chall: Challenge,
    Sel: SelectionStrategy,
    Cross: CrossoverStrategy,
    Mut: MutationStrategy,
    Cons: Constraint,
{
    selection_strategy: Option<Sel>,
    crossover_strategy: Option<Cross>,
    mutation_strategy: Option<Mut>,
    constraint: Option<Cons>,
    challenge: Option<Chall>,
}

impl<Chall, Sel, Cross, Mut, Cons> EvolutionLauncherBuilder<Chall, Sel, Cross, Mut, Cons>
where
    Chall: Challenge,
    Sel: SelectionStrategy,
    Cross: CrossoverStrategy,
    Mut: MutationStrategy,
    Cons: Constraint,
{
    pub fn new() -> Self {
        Self {
            selection_strategy: None,
            crossover_strategy: None,
            mutation_strategy: None,
            constraint: None,
            challenge: None,
        }
    }

    pub fn with_selection_strategy(mut self, selection_strategy: Sel) -> Self {
        self.selection_strategy = Some(selection_strategy);
        self
    }

    pub fn with_crossover_strategy(mut self, crossover_strategy: Cross) -> Self {
        self.crossover_strategy = Some(crossover_strategy);
        self
    }

    pub fn with_mutation_strategy(mut self, mutation_strategy: Mut) -> Self {
        self.mutation_strategy = Some(mutation_strategy);
        self
    }

    pub fn with_constraint(mut self, constraint: Cons) -> Self {
        self.constraint = Some(constraint);
        self
    }

    pub fn with_challenge(mut self, challenge: Chall) -> Self {
        self.challenge = Some(challenge);
        self
    }

    pub fn build(self) -> Result<EvolutionLauncher<Chall, Sel, Cross, Mut, Cons>> {
        let selection_strategy = self.selection_strategy.ok_or_else(|| {
            GeneticError::Configuration("Selection strategy not specified".to_string())
        })?;

        let crossover_strategy = self.crossover_strategy.ok_or_else(|| {
            GeneticError::Configuration("Crossover strategy not specified".to_string())
        })?;

        let mutation_strategy = self.mutation_strategy.ok_or_else(|| {
            GeneticError::Configuration("Mutation strategy not specified".to_string())
        })?;

        let constraint = self
            .constraint
            .ok_or_else(|| GeneticError::Configuration("Constraint not specified".to_string()))?;

        let challenge = self
            .challenge
            .ok_or_else(|| GeneticError::Configuration("Challenge not specified".to_string()))?;

        Ok(EvolutionLauncher::new(
            selection_strategy,
            crossover_strategy,
            mutation_strategy,
            constraint,
            challenge,
        ))
    }
}

impl<Chall, Sel, Cross, Mut, Cons> Default for EvolutionLauncherBuilder<Chall, Sel, Cross, Mut, Cons>
where
    Chall: Challenge,
    Sel: SelectionStrategy,
    Cross: CrossoverStrategy,
    Mut: MutationStrategy,
    Cons: Constraint,
{
    fn default() -> Self {
        Self::new()
    }
}
