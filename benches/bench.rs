use core::num::NonZeroU32;

use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};

use nth_primes::{
    Algorithm, Verification,
    hazmat::{AccumulatingPrimes, TrialDivisionPrimes, is_prime_trial_division},
    nth_prime,
};

fn bench_primality<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    // Largest prime below 2^20
    group.bench_function("Trial division check, 1048573", |b| {
        b.iter(|| is_prime_trial_division(1048573))
    });
}

fn bench_iterators<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.bench_function("Accumulating iterator, 1000 primes", |b| {
        b.iter(|| AccumulatingPrimes::new().take(1000).for_each(drop))
    });

    group.bench_function("Trial division iterator, 1000 primes", |b| {
        b.iter(|| TrialDivisionPrimes::new().take(1000).for_each(drop))
    });
}

fn bench_nth_prime<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    for n in [10u32, 100, 1000] {
        let index = NonZeroU32::new(n).expect("benchmark indices are non-zero");
        for algorithm in Algorithm::ALL {
            group.bench_function(format!("n-th prime ({}), n={n}", algorithm.name()), |b| {
                b.iter(|| nth_prime(algorithm, index))
            });
        }
    }
}

fn bench_verification<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let verification = Verification::new(1, 100).expect("valid range");
    group.bench_function("Verification, n=1..=100", |b| {
        b.iter(|| {
            let mut out = String::new();
            verification.run(&mut out).expect("the algorithms agree")
        })
    });
}

fn bench_nth_primes(c: &mut Criterion) {
    let mut group = c.benchmark_group("n-th prime");
    bench_primality(&mut group);
    bench_iterators(&mut group);
    bench_nth_prime(&mut group);
    bench_verification(&mut group);
    group.finish();
}

criterion_group!(benches, bench_nth_primes);
criterion_main!(benches);
