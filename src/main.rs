use std::env;

use shiftga::{
    error::{GeneticError, OptionExt, Result},
    evolution::{EvolutionLauncher, EvolutionOptions, GenerationStats, LogLevel},
    fitness::HoursChallenge,
    ingest::load_hours,
    rng::RandomNumberGenerator,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "input_data.csv".to_string());
    let hours = load_hours(&path)?;

    let options = EvolutionOptions::builder()
        .population_size(10)
        .cardinality_limit(5)
        .fitness_limit(1310)
        .generation_limit(100)
        .log_level(LogLevel::Minimal)
        .build();

    let challenge = HoursChallenge::new(hours).with_cardinality_watch(options.get_cardinality_limit());
    let launcher = EvolutionLauncher::standard(challenge, &options);
    let mut rng = RandomNumberGenerator::new();

    let outcome = launcher.evolve(&options, &mut rng)?;
    let best = outcome
        .best()
        .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

    println!(
        "{}",
        GenerationStats::from_ranked(outcome.generation, &outcome.population)?
    );
    println!("{} {}", outcome.generation, best.genome);
    println!("Score: {}", best.score);
    println!(
        "Shifts: {}",
        launcher.challenge().hours().selected_names(&best.genome).join(", ")
    );

    Ok(())
}
