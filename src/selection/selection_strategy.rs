use std::fmt::Debug;

use crate::error::Result;
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;

/// Trait for strategies that pick breeding parents from a ranked population.
///
/// # Examples
///
/// ```
/// use shiftga::genome::Genome;
/// use shiftga::rng::RandomNumberGenerator;
/// use shiftga::selection::{RouletteWheelSelection, SelectionStrategy};
/// use shiftga::error::Result;
///
/// fn main() -> Result<()> {
///     let population = vec![
///         Genome::with_selected(3, &[0]),
///         Genome::with_selected(3, &[1]),
///         Genome::with_selected(3, &[2]),
///     ];
///     let fitness = vec![10, 20, 30];
///     let mut rng = RandomNumberGenerator::from_seed(9);
///
///     let selection = RouletteWheelSelection::new();
///     let (a, b) = selection.select_pair(&population, &fitness, &mut rng)?;
///
///     assert!(population.contains(&a));
///     assert!(population.contains(&b));
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Draws two parents from `population`, independently and with
    /// replacement, so the same genome may come back twice.
    ///
    /// # Arguments
    ///
    /// * `population` - The current population.
    /// * `fitness` - The fitness of each genome, index-aligned with `population`.
    /// * `rng` - The run's random number generator.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The fitness vector length doesn't match the population length
    fn select_pair(
        &self,
        population: &[Genome],
        fitness: &[u64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Genome, Genome)>;
}
