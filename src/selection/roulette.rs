use tracing::warn;

use crate::error::{GeneticError, Result};
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects individuals through roulette wheel selection.
///
/// Roulette wheel selection (also known as fitness proportionate selection) selects
/// individuals with probability proportional to their fitness. When every
/// fitness is zero the wheel has no area, and the draw falls back to a
/// uniform pick over the population.
///
/// # Examples
///
/// ```
/// use shiftga::genome::Genome;
/// use shiftga::rng::RandomNumberGenerator;
/// use shiftga::selection::{RouletteWheelSelection, SelectionStrategy};
///
/// let population = vec![Genome::with_selected(2, &[0]), Genome::with_selected(2, &[1])];
/// let mut rng = RandomNumberGenerator::from_seed(1);
///
/// // Only the second genome has any weight.
/// let (a, b) = RouletteWheelSelection::new()
///     .select_pair(&population, &[0, 5], &mut rng)
///     .unwrap();
/// assert_eq!(a, population[1]);
/// assert_eq!(b, population[1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    pub fn new() -> Self {
        Self
    }

    /// Running totals of `fitness`. The last entry is the wheel's size.
    fn cumulative_weights(fitness: &[u64]) -> Vec<u64> {
        fitness
            .iter()
            .scan(0u64, |total, &weight| {
                *total = total.saturating_add(weight);
                Some(*total)
            })
            .collect()
    }

    /// Spins the wheel once and returns the selected index.
    ///
    /// A draw `r` in `0..total` lands on the first index whose running total
    /// exceeds `r`, so zero-weight entries are never picked.
    fn select_individual(cumulative: &[u64], rng: &mut RandomNumberGenerator) -> usize {
        match cumulative.last() {
            Some(&total) if total > 0 => {
                let r = rng.gen_range(0..total);
                cumulative.partition_point(|&running| running <= r)
            }
            _ => rng.gen_index(cumulative.len()),
        }
    }
}

impl SelectionStrategy for RouletteWheelSelection {
    fn select_pair(
        &self,
        population: &[Genome],
        fitness: &[u64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Genome, Genome)> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        if fitness.len() != population.len() {
            return Err(GeneticError::LengthMismatch {
                expected: population.len(),
                actual: fitness.len(),
            });
        }

        let cumulative = Self::cumulative_weights(fitness);
        if cumulative.last() == Some(&0) {
            warn!(
                population = population.len(),
                "all fitness values are zero, selecting parents uniformly"
            );
        }

        let first = Self::select_individual(&cumulative, rng);
        let second = Self::select_individual(&cumulative, rng);

        Ok((population[first].clone(), population[second].clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn population(size: usize) -> Vec<Genome> {
        (0..size).map(|idx| Genome::with_selected(size, &[idx])).collect()
    }

    fn index_of(population: &[Genome], genome: &Genome) -> usize {
        population.iter().position(|g| g == genome).unwrap()
    }

    #[test]
    fn test_cumulative_weights() {
        assert_eq!(
            RouletteWheelSelection::cumulative_weights(&[3, 0, 2, 5]),
            vec![3, 3, 5, 10]
        );
        assert!(RouletteWheelSelection::cumulative_weights(&[]).is_empty());
    }

    #[test]
    fn test_select_individual_skips_zero_weights() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let cumulative = RouletteWheelSelection::cumulative_weights(&[0, 4, 0, 1, 0]);

        for _ in 0..1000 {
            let idx = RouletteWheelSelection::select_individual(&cumulative, &mut rng);
            assert!(idx == 1 || idx == 3);
        }
    }

    #[test]
    fn test_equal_weights_give_uniform_marginals() {
        let population = population(4);
        let fitness = vec![5, 5, 5, 5];
        let mut rng = RandomNumberGenerator::from_seed(42);
        let selection = RouletteWheelSelection::new();

        let trials = 20_000;
        let mut counts = [0usize; 4];
        for _ in 0..trials {
            let (a, b) = selection
                .select_pair(&population, &fitness, &mut rng)
                .unwrap();
            counts[index_of(&population, &a)] += 1;
            counts[index_of(&population, &b)] += 1;
        }

        for count in counts {
            let share = count as f64 / (2 * trials) as f64;
            assert!((share - 0.25).abs() < 0.02, "share {} is not uniform", share);
        }
    }

    #[test]
    fn test_weights_bias_selection() {
        let population = population(2);
        let fitness = vec![1, 9];
        let mut rng = RandomNumberGenerator::from_seed(7);
        let selection = RouletteWheelSelection::new();

        let trials = 10_000;
        let mut heavy = 0usize;
        for _ in 0..trials {
            let (a, _) = selection
                .select_pair(&population, &fitness, &mut rng)
                .unwrap();
            if a == population[1] {
                heavy += 1;
            }
        }

        let share = heavy as f64 / trials as f64;
        assert!((share - 0.9).abs() < 0.02, "share {} is not proportional", share);
    }

    #[test]
    fn test_zero_fitness_falls_back_to_uniform() {
        let population = population(3);
        let fitness = vec![0, 0, 0];
        let mut rng = RandomNumberGenerator::from_seed(3);
        let selection = RouletteWheelSelection::new();

        let mut seen = [false; 3];
        for _ in 0..300 {
            let (a, b) = selection
                .select_pair(&population, &fitness, &mut rng)
                .unwrap();
            seen[index_of(&population, &a)] = true;
            seen[index_of(&population, &b)] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_empty_population() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let result = RouletteWheelSelection::new().select_pair(&[], &[], &mut rng);

        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }

    #[test]
    fn test_mismatched_lengths() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let result = RouletteWheelSelection::new().select_pair(&population(2), &[1], &mut rng);

        assert!(matches!(
            result,
            Err(GeneticError::LengthMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }
}
