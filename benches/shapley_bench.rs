use airport_shapley::{
    AirportGame, ApproximateSolver, ConfigurationGame, ConfigurationValueSolver, ExactSolver,
    Player, Players, ShapleySolver,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Plain airport game with strictly increasing runway requirements
fn generate_plain_game(n_players: usize) -> AirportGame {
    let players = (0..n_players)
        .map(|i| Player::with_cost(format!("P{}", i + 1), 10.0 + 7.5 * i as f64))
        .collect();
    AirportGame::new(Players::from_players(players)).unwrap()
}

/// Configuration game where airlines operate several movements and some code-share
fn generate_configuration_game(
    n_players: usize,
    n_tiers: usize,
    n_airlines: usize,
) -> ConfigurationGame {
    let players = (0..n_players)
        .map(|i| {
            let tier = 1 + (i * 7) % n_tiers;
            let mut airlines = vec![format!("AL{}", i % n_airlines)];
            if i % 5 == 0 {
                airlines.push(format!("AL{}", (i + 1) % n_airlines));
            }
            Player::with_tier(format!("M{}", i + 1), tier, airlines)
        })
        .collect();
    let steps: Vec<f64> = (1..=n_tiers).map(|t| 100.0 * t as f64).collect();
    ConfigurationGame::new(Players::from_players(players), &steps).unwrap()
}

/// Benchmark full permutation enumeration
fn benchmark_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact");

    let configs = vec![(4, 100), (6, 100), (8, 20), (9, 10)];

    for (n_players, sample_size) in configs {
        group.sample_size(sample_size);
        let game = generate_plain_game(n_players);

        group.bench_with_input(BenchmarkId::new("players", n_players), &n_players, |b, _| {
            b.iter(|| ExactSolver::new().solve(black_box(&game)))
        });
    }

    group.finish();
}

/// Benchmark Monte Carlo sampling across sample counts
fn benchmark_approximate(c: &mut Criterion) {
    let mut group = c.benchmark_group("approximate");
    group.sample_size(20);

    let game = generate_plain_game(30);
    for n_samples in [1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("samples", n_samples), &n_samples, |b, &n| {
            let solver = ApproximateSolver::new(n).seeded(42);
            b.iter(|| solver.solve(black_box(&game)))
        });
    }

    group.finish();
}

/// Benchmark the closed-form configuration value on large games
fn benchmark_configuration_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("configuration_value");

    for n_players in [10, 100, 1_000] {
        let game = generate_configuration_game(n_players, 8, 12);

        group.bench_with_input(BenchmarkId::new("players", n_players), &n_players, |b, _| {
            b.iter(|| ConfigurationValueSolver.solve(black_box(&game)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_exact,
    benchmark_approximate,
    benchmark_configuration_value
);
criterion_main!(benches);
