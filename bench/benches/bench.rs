#[macro_use]
extern crate criterion;
use criterion::{Criterion, SamplingMode};
use prime_catalog::algorithms::*;
use prime_catalog::{detail, Algorithm};
use rand::random;
use serde_json::json;

pub fn bench_sieves(c: &mut Criterion) {
    const LIMIT: i64 = 100_000;

    let mut group = c.benchmark_group("sieve (n = 100000)");
    group.bench_function("eratosthenes (with frames)", |b| {
        b.iter(|| SieveEratosthenes.run(&SieveParams { n: LIMIT }).result.len())
    });
    group.bench_function("atkin", |b| {
        b.iter(|| SieveAtkin.run(&SieveParams { n: LIMIT }).result.len())
    });
    group.bench_function("primes_up_to", |b| {
        b.iter(|| detail::primes_up_to(LIMIT as u64).len())
    });
    group.finish();
}

pub fn bench_probable_prime(c: &mut Criterion) {
    const N0: i64 = 1_000_000;
    const STEP: usize = 101;
    const N1: i64 = 8_000_000_000; // larger than u32
    const N2: i64 = N1 + N0;

    let numbers = || (1..N0).step_by(STEP).chain((N1..N2).step_by(STEP));
    let seed = random::<u64>();

    let mut group = c.benchmark_group("primality (u64)");
    group.bench_function("fermat", |b| {
        b.iter(|| {
            numbers()
                .filter(|&n| FermatTest.run(&ProbableParams::seeded(n, 5, seed)).result)
                .count()
        })
    });
    group.bench_function("miller-rabin", |b| {
        b.iter(|| {
            numbers()
                .filter(|&n| MillerRabin.run(&ProbableParams::seeded(n, 5, seed)).result)
                .count()
        })
    });
    group.bench_function("trial division", |b| {
        b.iter(|| {
            numbers()
                .filter(|&n| {
                    let params = TrialDivisionParams { n, return_factors: false };
                    TrialDivision.run(&params).result
                })
                .count()
        })
    });
    group.finish();
}

pub fn bench_lucas_lehmer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lucas-lehmer");
    group.sample_size(10).sampling_mode(SamplingMode::Flat);

    for p in [521i64, 1279, 2203] {
        group.bench_function(format!("M{}", p), |b| {
            b.iter(|| LucasLehmer.run(&LucasLehmerParams { p }).result)
        });
    }
    group.finish();
}

pub fn bench_registry(c: &mut Criterion) {
    let registry = prime_catalog::registry().expect("catalog loads");
    let params = json!({"n": 1_000_003, "rounds": 10, "seed": 7});

    c.bench_function("registry invoke miller_rabin", |b| {
        b.iter(|| registry.invoke("miller_rabin", &params).map(|v| v["result"] == true))
    });
}

criterion_group!(
    benches,
    bench_sieves,
    bench_probable_prime,
    bench_lucas_lehmer,
    bench_registry
);
criterion_main!(benches);
