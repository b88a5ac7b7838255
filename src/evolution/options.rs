//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the parameters of one shift search:
//! population size, cardinality limit, termination thresholds, elitism and
//! mutation settings, and how much progress to log.
//!
//! ## Example
//!
//! ```rust
//! use shiftga::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(10, 5, 1310, 100);
//! assert_eq!(custom_options.get_fitness_limit(), 1310);
//!
//! // Or through the builder
//! let built = EvolutionOptions::builder()
//!     .population_size(20)
//!     .cardinality_limit(3)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//! assert!(built.validate().is_ok());
//! ```
//!
//! ## `LogLevel`
//!
//! - `Verbose`: one `info` event per generation plus a `debug` event with the
//!   whole population.
//! - `Minimal`: one `info` event per generation.
//! - `None`: no per-generation events.

use crate::constraints::cardinality::DEFAULT_CARDINALITY_LIMIT;
use crate::error::{GeneticError, Result};
use crate::strategy::mutation::{DEFAULT_FLIP_PROBABILITY, DEFAULT_MUTATION_TRIALS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogLevel {
    Verbose,
    Minimal,
    None,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionOptions {
    population_size: usize,
    cardinality_limit: usize,
    /// The search stops as soon as the best genome scores at least this much.
    fitness_limit: u64,
    /// Hard cap on the number of generations evaluated.
    generation_limit: usize,
    /// How many top-ranked genomes are copied unchanged into the next generation.
    elite_count: usize,
    mutation_trials: usize,
    flip_probability: f64,
    log_level: LogLevel,
}

impl EvolutionOptions {
    pub fn new(
        population_size: usize,
        cardinality_limit: usize,
        fitness_limit: u64,
        generation_limit: usize,
    ) -> Self {
        Self {
            population_size,
            cardinality_limit,
            fitness_limit,
            generation_limit,
            ..Self::default()
        }
    }

    /// Checks the options before any genome is created.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the population size or the
    /// generation limit is zero, or the flip probability is not in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        if self.generation_limit == 0 {
            return Err(GeneticError::Configuration(
                "Generation limit cannot be zero".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.flip_probability) {
            return Err(GeneticError::Configuration(format!(
                "Flip probability must lie in [0, 1], got {}",
                self.flip_probability
            )));
        }

        Ok(())
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_cardinality_limit(&self) -> usize {
        self.cardinality_limit
    }

    pub fn get_fitness_limit(&self) -> u64 {
        self.fitness_limit
    }

    pub fn get_generation_limit(&self) -> usize {
        self.generation_limit
    }

    pub fn get_elite_count(&self) -> usize {
        self.elite_count
    }

    pub fn get_mutation_trials(&self) -> usize {
        self.mutation_trials
    }

    pub fn get_flip_probability(&self) -> f64 {
        self.flip_probability
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the maximum number of selected slots.
    pub fn set_cardinality_limit(&mut self, cardinality_limit: usize) {
        self.cardinality_limit = cardinality_limit;
    }

    /// Sets the fitness at which the search stops early.
    pub fn set_fitness_limit(&mut self, fitness_limit: u64) {
        self.fitness_limit = fitness_limit;
    }

    /// Sets the generation cap.
    pub fn set_generation_limit(&mut self, generation_limit: usize) {
        self.generation_limit = generation_limit;
    }

    /// Sets the number of elites.
    pub fn set_elite_count(&mut self, elite_count: usize) {
        self.elite_count = elite_count;
    }

    /// Sets the number of mutation rounds per child.
    pub fn set_mutation_trials(&mut self, mutation_trials: usize) {
        self.mutation_trials = mutation_trials;
    }

    /// Sets the per-round flip probability.
    pub fn set_flip_probability(&mut self, flip_probability: f64) {
        self.flip_probability = flip_probability;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shiftga::evolution::options::{EvolutionOptions, LogLevel};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .population_size(50)
    ///     .cardinality_limit(4)
    ///     .fitness_limit(200)
    ///     .generation_limit(500)
    ///     .elite_count(2)
    ///     .mutation_trials(2)
    ///     .flip_probability(0.25)
    ///     .log_level(LogLevel::Verbose)
    ///     .build();
    ///
    /// assert_eq!(options.get_mutation_trials(), 2);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: 10,
            cardinality_limit: DEFAULT_CARDINALITY_LIMIT,
            fitness_limit: u64::MAX,
            generation_limit: 100,
            elite_count: 2,
            mutation_trials: DEFAULT_MUTATION_TRIALS,
            flip_probability: DEFAULT_FLIP_PROBABILITY,
            log_level: LogLevel::None,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
/// Unset fields take the `Default` values.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    cardinality_limit: Option<usize>,
    fitness_limit: Option<u64>,
    generation_limit: Option<usize>,
    elite_count: Option<usize>,
    mutation_trials: Option<usize>,
    flip_probability: Option<f64>,
    log_level: Option<LogLevel>,
}

impl EvolutionOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn cardinality_limit(mut self, value: usize) -> Self {
        self.cardinality_limit = Some(value);
        self
    }

    pub fn fitness_limit(mut self, value: u64) -> Self {
        self.fitness_limit = Some(value);
        self
    }

    pub fn generation_limit(mut self, value: usize) -> Self {
        self.generation_limit = Some(value);
        self
    }

    pub fn elite_count(mut self, value: usize) -> Self {
        self.elite_count = Some(value);
        self
    }

    pub fn mutation_trials(mut self, value: usize) -> Self {
        self.mutation_trials = Some(value);
        self
    }

    pub fn flip_probability(mut self, value: f64) -> Self {
        self.flip_probability = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let default = EvolutionOptions::default();
        EvolutionOptions {
            population_size: self.population_size.unwrap_or(default.population_size),
            cardinality_limit: self.cardinality_limit.unwrap_or(default.cardinality_limit),
            fitness_limit: self.fitness_limit.unwrap_or(default.fitness_limit),
            generation_limit: self.generation_limit.unwrap_or(default.generation_limit),
            elite_count: self.elite_count.unwrap_or(default.elite_count),
            mutation_trials: self.mutation_trials.unwrap_or(default.mutation_trials),
            flip_probability: self.flip_probability.unwrap_or(default.flip_probability),
            log_level: self.log_level.unwrap_or(default.log_level),
        }
    }
}
