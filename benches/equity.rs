#[macro_use]
extern crate criterion;

use criterion::Criterion;
use rand::SeedableRng;
use rand::rngs::StdRng;
use river_equity::holdem::{MonteCarloEquity, RiverSpot, exact_equity};

fn exact_heads_up(c: &mut Criterion) {
    let spot: RiverSpot = "AsKs KhKd5c5d2s".parse().expect("Should parse the spot.");
    c.bench_function("Exact equity AsKs on KhKd5c5d2s", move |b| {
        b.iter(|| exact_equity(&spot))
    });
}

fn simulate_six_way_trial(c: &mut Criterion) {
    let spot: RiverSpot = "QhJh Th9c4d2s7h".parse().expect("Should parse the spot.");
    let mut sim = MonteCarloEquity::new(&spot, 5).expect("Should be able to create a sim.");
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("Simulate one trial against 5 opponents", move |b| {
        b.iter(|| sim.simulate(&mut rng))
    });
}

criterion_group!(benches, exact_heads_up, simulate_six_way_trial);
criterion_main!(benches);
