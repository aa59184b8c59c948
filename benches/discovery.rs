use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use isomorph_rs::{find_isomorphs, initial_groups, DiscoveryConfig};

/// Generate text with genuine recurring isomorph structure.
fn generate_structured(size: usize) -> Vec<u16> {
    // Each block repeats the shape ABABCC with fresh symbols, so patterns
    // recur without literal substrings recurring.
    let mut result = Vec::with_capacity(size);
    let mut next = 0u16;
    while result.len() < size {
        let (a, b, c) = (next, next + 1, next + 2);
        next += 3;
        result.extend_from_slice(&[a, b, a, b, c, c, next, next + 1]);
        next += 2;
    }
    result.truncate(size);
    result
}

/// Generate low-repetition data from a large alphabet.
fn generate_low_repetition(size: usize) -> Vec<u16> {
    let mut seed = 12345u64;
    (0..size)
        .map(|_| {
            // Simple LCG random
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            (seed % 256) as u16
        })
        .collect()
}

/// Generate uniform text over a 29-symbol alphabet, like a runic segment.
fn generate_runic_like(size: usize) -> Vec<u16> {
    let mut seed = 98765u64;
    (0..size)
        .map(|_| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((seed >> 33) % 29) as u16
        })
        .collect()
}

fn bench_structured(c: &mut Criterion) {
    let sizes = [128, 256, 512];
    let mut group = c.benchmark_group("structured");

    for size in sizes.iter() {
        let data = generate_structured(*size);
        group.bench_with_input(BenchmarkId::new("find_isomorphs", size), &data, |b, data| {
            b.iter(|| {
                let groups = find_isomorphs(black_box(data), &DiscoveryConfig::default());
                black_box(groups)
            });
        });
    }

    group.finish();
}

fn bench_low_repetition(c: &mut Criterion) {
    let sizes = [256, 1024, 4096];
    let mut group = c.benchmark_group("low_repetition");

    for size in sizes.iter() {
        let data = generate_low_repetition(*size);
        group.bench_with_input(BenchmarkId::new("find_isomorphs", size), &data, |b, data| {
            b.iter(|| {
                let groups = find_isomorphs(black_box(data), &DiscoveryConfig::default());
                black_box(groups)
            });
        });
    }

    group.finish();
}

fn bench_runic_like(c: &mut Criterion) {
    let sizes = [308, 729, 1021];
    let mut group = c.benchmark_group("runic_like");

    for size in sizes.iter() {
        let data = generate_runic_like(*size);

        group.bench_with_input(BenchmarkId::new("find_isomorphs", size), &data, |b, data| {
            b.iter(|| {
                let groups = find_isomorphs(black_box(data), &DiscoveryConfig::default());
                black_box(groups)
            });
        });

        group.bench_with_input(BenchmarkId::new("initial_groups", size), &data, |b, data| {
            b.iter(|| {
                let seeds = initial_groups(black_box(data), 6);
                black_box(seeds)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_structured, bench_low_repetition, bench_runic_like);
criterion_main!(benches);
