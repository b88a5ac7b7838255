//! Per-generation statistics and their log output.

use std::fmt;

use tracing::{debug, info};

use super::options::LogLevel;
use crate::{
    error::{GeneticError, OptionExt, Result},
    genome::ScoredGenome,
};

/// Summary of one ranked generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationStats {
    pub generation: usize,
    pub population_size: usize,
    pub average_fitness: f64,
    pub best: ScoredGenome,
    pub worst: ScoredGenome,
    /// Every genome rendered as a bit string, best first.
    pub population: Vec<String>,
}

impl GenerationStats {
    /// Builds the summary from a population already sorted best first.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` for an empty slice.
    pub fn from_ranked(generation: usize, ranked: &[ScoredGenome]) -> Result<Self> {
        let best = ranked
            .first()
            .cloned()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        let worst = ranked
            .last()
            .cloned()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

        let total: u64 = ranked.iter().map(|entry| entry.score).sum();

        Ok(Self {
            generation,
            population_size: ranked.len(),
            average_fitness: total as f64 / ranked.len() as f64,
            best,
            worst,
            population: ranked.iter().map(|entry| entry.genome.to_string()).collect(),
        })
    }

    /// Emits the summary as `tracing` events at the given verbosity.
    pub fn emit(&self, log_level: &LogLevel) {
        match log_level {
            LogLevel::None => {}
            LogLevel::Minimal => self.emit_summary(),
            LogLevel::Verbose => {
                self.emit_summary();
                debug!(
                    generation = self.generation,
                    population = %self.population.join(", "),
                    "generation population"
                );
            }
        }
    }

    fn emit_summary(&self) {
        info!(
            generation = self.generation,
            average_fitness = self.average_fitness,
            best = %self.best.genome,
            best_score = self.best.score,
            worst = %self.worst.genome,
            worst_score = self.worst.score,
            "generation ranked"
        );
    }
}

impl fmt::Display for GenerationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GENERATION {:02}", self.generation)?;
        writeln!(f, "=============")?;
        writeln!(f, "Population: [{}]", self.population.join(", "))?;
        writeln!(f, "Avg. Fitness: {:.6}", self.average_fitness)?;
        writeln!(f, "Best: {} ({})", self.best.genome, self.best.score)?;
        write!(f, "Worst: {} ({})", self.worst.genome, self.worst.score)
    }
}
