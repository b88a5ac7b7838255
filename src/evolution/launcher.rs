use tracing::info;

use super::{challenge::Challenge, options::EvolutionOptions, report::GenerationStats};
use crate::{
    constraints::{CardinalityConstraint, Constraint},
    error::{GeneticError, OptionExt, Result},
    genome::{generate_population, score_population, Genome, Population, ScoredGenome},
    rng::RandomNumberGenerator,
    selection::{RouletteWheelSelection, SelectionStrategy},
    strategy::{BitFlipMutation, CrossoverStrategy, MutationStrategy, SinglePointCrossover},
};

/// Represents the result of an evolution: the last evaluated population,
/// best first, and the index of the generation it belongs to.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionOutcome {
    pub population: Vec<ScoredGenome>,
    pub generation: usize,
}

impl EvolutionOutcome {
    /// The highest-scoring genome of the final population.
    pub fn best(&self) -> Option<&ScoredGenome> {
        self.population.first()
    }
}

/// Manages the evolution process using the configured operators and challenge.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<
    Chall,
    Sel = RouletteWheelSelection,
    Cross = SinglePointCrossover,
    Mut = BitFlipMutation,
    Cons = CardinalityConstraint,
> where
    Chall: Challenge,
    Sel: SelectionStrategy,
    Cross: CrossoverStrategy,
    Mut: MutationStrategy,
    Cons: Constraint,
{
    selection: Sel,
    crossover: Cross,
    mutation: Mut,
    constraint: Cons,
    challenge: Chall,
}

impl<Chall> EvolutionLauncher<Chall>
where
    Chall: Challenge,
{
    /// Roulette selection, single-point crossover, and the bit-flip mutation
    /// and cardinality constraint described by `options`.
    pub fn standard(challenge: Chall, options: &EvolutionOptions) -> Self {
        Self::new(
            RouletteWheelSelection::new(),
            SinglePointCrossover::new(),
            BitFlipMutation::new(
                options.get_mutation_trials(),
                options.get_flip_probability(),
            ),
            CardinalityConstraint::new(options.get_cardinality_limit()),
            challenge,
        )
    }
}

impl<Chall, Sel, Cross, Mut, Cons> EvolutionLauncher<Chall, Sel, Cross, Mut, Cons>
where
    Chall: Challenge,
    Sel: SelectionStrategy,
    Cross: CrossoverStrategy,
    Mut: MutationStrategy,
    Cons: Constraint,
{
    pub fn new(
        selection: Sel,
        crossover: Cross,
        mutation: Mut,
        constraint: Cons,
        challenge: Chall,
    ) -> Self {
        Self {
            selection,
            crossover,
            mutation,
            constraint,
            challenge,
        }
    }

    pub fn challenge(&self) -> &Chall {
        &self.challenge
    }

    /// Evolves a random population until the best genome reaches the
    /// fitness limit or the generation limit is exhausted.
    ///
    /// Each generation is ranked, reported, and checked for termination.
    /// If the search continues, the top `elite_count` genomes are copied
    /// unchanged and the rest of the next population is bred by selection,
    /// crossover, mutation and repair, always refilling to exactly
    /// `population_size` genomes.
    ///
    /// # Returns
    ///
    /// The final ranked population with the generation index it was
    /// evaluated at: the first generation meeting the fitness limit, or
    /// `generation_limit - 1`.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options fail validation
    /// - A genome cannot be scored, e.g. because of a length mismatch
    /// - An operator fails or the constraint cannot repair a genome
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionOutcome> {
        options.validate()?;

        let mut population = generate_population(
            options.get_population_size(),
            self.challenge.genome_length(),
            rng,
        )
        .into_iter()
        .map(|genome| self.repair(genome, rng))
        .collect::<Result<Population>>()?;

        let mut generation = 0;
        loop {
            let ranked = score_population(&population, &self.challenge)?;
            GenerationStats::from_ranked(generation, &ranked)?.emit(options.get_log_level());

            let best_score = ranked
                .first()
                .map(|entry| entry.score)
                .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
            let limit_met = best_score >= options.get_fitness_limit();

            if limit_met || generation + 1 >= options.get_generation_limit() {
                info!(generation, best_score, limit_met, "evolution finished");
                return Ok(EvolutionOutcome {
                    population: ranked,
                    generation,
                });
            }

            population = self.breed(&ranked, options, rng)?;
            generation += 1;
        }
    }

    /// Builds the next population from a ranked one.
    fn breed(
        &self,
        ranked: &[ScoredGenome],
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population> {
        let size = options.get_population_size();
        let mut next: Population = Vec::with_capacity(size);
        next.extend(
            ranked
                .iter()
                .take(options.get_elite_count().min(size))
                .map(|entry| entry.genome.clone()),
        );

        let (parents, fitness): (Vec<Genome>, Vec<u64>) = ranked
            .iter()
            .map(|entry| (entry.genome.clone(), entry.score))
            .unzip();

        while next.len() < size {
            let (a, b) = self.selection.select_pair(&parents, &fitness, rng)?;
            let (a, b) = self.crossover.crossover(a, b, rng)?;

            for child in [a, b] {
                if next.len() == size {
                    break;
                }
                let child = self.mutation.mutate(child, rng);
                next.push(self.repair(child, rng)?);
            }
        }

        Ok(next)
    }

    fn repair(&self, mut genome: Genome, rng: &mut RandomNumberGenerator) -> Result<Genome> {
        if !self.constraint.repair_with_rng(&mut genome, rng) {
            return Err(GeneticError::Other(format!(
                "Constraint {:?} could not repair genome {}",
                self.constraint, genome
            )));
        }
        Ok(genome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::ConstraintViolation;

    /// Counts selected bits; the all-ones genome is best.
    #[derive(Debug, Clone)]
    struct OnesChallenge {
        length: usize,
    }

    impl Challenge for OnesChallenge {
        fn genome_length(&self) -> usize {
            self.length
        }

        fn score(&self, genome: &Genome) -> Result<u64> {
            Ok(genome.selection_count() as u64)
        }
    }

    #[derive(Debug)]
    struct Unrepairable;

    impl Constraint for Unrepairable {
        fn check(&self, _genome: &Genome) -> Vec<ConstraintViolation> {
            vec![ConstraintViolation::new("Unrepairable", "always violated")]
        }

        fn repair_with_rng(&self, _genome: &mut Genome, _rng: &mut RandomNumberGenerator) -> bool {
            false
        }
    }

    fn options(population_size: usize) -> EvolutionOptions {
        EvolutionOptions::builder()
            .population_size(population_size)
            .cardinality_limit(3)
            .generation_limit(20)
            .build()
    }

    #[test]
    fn test_population_size_is_pinned() {
        for size in [1, 2, 3, 7, 10] {
            let options = options(size);
            let launcher = EvolutionLauncher::standard(OnesChallenge { length: 6 }, &options);
            let mut rng = RandomNumberGenerator::from_seed(size as u64);

            let outcome = launcher.evolve(&options, &mut rng).unwrap();
            assert_eq!(outcome.population.len(), size);
        }
    }

    #[test]
    fn test_every_genome_respects_the_limit() {
        let options = options(10);
        let launcher = EvolutionLauncher::standard(OnesChallenge { length: 8 }, &options);
        let mut rng = RandomNumberGenerator::from_seed(17);

        let outcome = launcher.evolve(&options, &mut rng).unwrap();
        assert!(outcome
            .population
            .iter()
            .all(|entry| entry.genome.selection_count() <= 3));
    }

    #[test]
    fn test_stops_at_generation_limit() {
        let options = options(6);
        let launcher = EvolutionLauncher::standard(OnesChallenge { length: 8 }, &options);
        let mut rng = RandomNumberGenerator::from_seed(5);

        // The fitness limit defaults to u64::MAX and is never met.
        let outcome = launcher.evolve(&options, &mut rng).unwrap();
        assert_eq!(outcome.generation, 19);
    }

    #[test]
    fn test_stops_immediately_when_limit_is_trivial() {
        let mut options = options(4);
        options.set_fitness_limit(0);
        let launcher = EvolutionLauncher::standard(OnesChallenge { length: 8 }, &options);
        let mut rng = RandomNumberGenerator::from_seed(5);

        let outcome = launcher.evolve(&options, &mut rng).unwrap();
        assert_eq!(outcome.generation, 0);
    }

    #[test]
    fn test_population_is_ranked_best_first() {
        let options = options(8);
        let launcher = EvolutionLauncher::standard(OnesChallenge { length: 8 }, &options);
        let mut rng = RandomNumberGenerator::from_seed(9);

        let outcome = launcher.evolve(&options, &mut rng).unwrap();
        let scores: Vec<u64> = outcome.population.iter().map(|e| e.score).collect();
        assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
        assert_eq!(outcome.best().map(|e| e.score), scores.first().copied());
    }

    fn ranked_ones(length: usize, counts: &[usize]) -> Vec<ScoredGenome> {
        let population: Population = counts
            .iter()
            .map(|&count| Genome::with_selected(length, &(0..count).collect::<Vec<_>>()))
            .collect();
        score_population(&population, &OnesChallenge { length }).unwrap()
    }

    #[test]
    fn test_breed_carries_elites_unchanged() {
        let options = EvolutionOptions::builder()
            .population_size(6)
            .cardinality_limit(6)
            .elite_count(2)
            .build();
        let launcher = EvolutionLauncher::standard(OnesChallenge { length: 6 }, &options);
        let ranked = ranked_ones(6, &[1, 5, 0, 3, 6, 2]);
        let mut rng = RandomNumberGenerator::from_seed(11);

        let next = launcher.breed(&ranked, &options, &mut rng).unwrap();

        assert_eq!(next.len(), 6);
        assert_eq!(next[0], ranked[0].genome);
        assert_eq!(next[1], ranked[1].genome);
        assert_eq!(next[0].selection_count(), 6);
        assert_eq!(next[1].selection_count(), 5);
    }

    #[test]
    fn test_breed_caps_elites_at_population_size() {
        let options = EvolutionOptions::builder()
            .population_size(1)
            .cardinality_limit(6)
            .elite_count(2)
            .build();
        let launcher = EvolutionLauncher::standard(OnesChallenge { length: 6 }, &options);
        let ranked = ranked_ones(6, &[4, 2]);
        let mut rng = RandomNumberGenerator::from_seed(11);

        let next = launcher.breed(&ranked, &options, &mut rng).unwrap();

        assert_eq!(next, vec![ranked[0].genome.clone()]);
    }

    #[test]
    fn test_best_score_never_decreases() {
        let challenge = OnesChallenge { length: 12 };
        let mut previous = 0;

        for generation_limit in 1..40 {
            let options = EvolutionOptions::builder()
                .population_size(8)
                .cardinality_limit(7)
                .generation_limit(generation_limit)
                .build();
            let launcher = EvolutionLauncher::standard(challenge.clone(), &options);
            let mut rng = RandomNumberGenerator::from_seed(9);

            let outcome = launcher.evolve(&options, &mut rng).unwrap();
            let best = outcome.best().unwrap().score;

            assert_eq!(outcome.generation, generation_limit - 1);
            assert!(best >= previous, "best fell from {} to {}", previous, best);
            previous = best;
        }
    }

    #[test]
    fn test_invalid_options() {
        let options = EvolutionOptions::new(0, 5, 10, 10);
        let launcher = EvolutionLauncher::standard(OnesChallenge { length: 4 }, &options);
        let mut rng = RandomNumberGenerator::from_seed(1);

        match launcher.evolve(&options, &mut rng) {
            Err(GeneticError::Configuration(msg)) => {
                assert!(msg.contains("Population size cannot be zero"))
            }
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_unrepairable_constraint_fails() {
        let options = options(4);
        let launcher = EvolutionLauncher::new(
            RouletteWheelSelection::new(),
            SinglePointCrossover::new(),
            BitFlipMutation::default(),
            Unrepairable,
            OnesChallenge { length: 4 },
        );
        let mut rng = RandomNumberGenerator::from_seed(1);

        assert!(matches!(
            launcher.evolve(&options, &mut rng),
            Err(GeneticError::Other(_))
        ));
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let options = options(10);
        let launcher = EvolutionLauncher::standard(OnesChallenge { length: 12 }, &options);

        let first = launcher
            .evolve(&options, &mut RandomNumberGenerator::from_seed(77))
            .unwrap();
        let second = launcher
            .evolve(&options, &mut RandomNumberGenerator::from_seed(77))
            .unwrap();
        assert_eq!(first, second);
    }
}
