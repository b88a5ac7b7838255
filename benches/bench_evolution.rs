use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shiftga::{
    evolution::{EvolutionLauncher, EvolutionOptions},
    fitness::HoursChallenge,
    hours::HoursMatrix,
    rng::RandomNumberGenerator,
};

fn hours(slots: usize) -> HoursMatrix {
    let columns = (0..slots)
        .map(|slot| (0..30).map(|day| ((slot * 7 + day * 3) % 50) as u64).collect())
        .collect();
    HoursMatrix::from_columns(columns).unwrap()
}

fn bench_evolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolution");
    for slots in [8, 32, 128].iter() {
        let options = EvolutionOptions::new(50, 5, u64::MAX, 50);
        let launcher = EvolutionLauncher::standard(HoursChallenge::new(hours(*slots)), &options);

        group.bench_function(&format!("evolution_{}_slots", slots), |b| {
            b.iter(|| {
                let mut rng = RandomNumberGenerator::from_seed(7);
                let result = launcher.evolve(black_box(&options), black_box(&mut rng));
                assert!(result.is_ok());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_evolution);
criterion_main!(benches);
