//! Benchmark suite for study-priority-algo
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use study_priority_algo::{PriorityEngine, TopicRecord};

fn random_snapshot(rng: &mut ChaCha8Rng, topics: usize) -> Vec<TopicRecord> {
    (0..topics)
        .map(|i| {
            TopicRecord::new(
                format!("Subject {}", i % 8),
                format!("Topic {i}"),
                rng.gen_range(0.0..=1.0),
                rng.gen_range(0.0..=1.0),
            )
        })
        .collect()
}

fn bench_compute(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let engine = PriorityEngine::default();
    let snapshot = random_snapshot(&mut rng, 1_000);

    c.bench_function("PriorityEngine::compute/1000", |b| {
        b.iter(|| engine.compute(black_box(&snapshot)))
    });
}

fn bench_compute_batch(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let engine = PriorityEngine::default();
    let snapshots: Vec<Vec<TopicRecord>> =
        (0..256).map(|_| random_snapshot(&mut rng, 200)).collect();

    c.bench_function("PriorityEngine::compute_batch/256x200", |b| {
        b.iter(|| engine.compute_batch(black_box(&snapshots)))
    });
}

criterion_group!(benches, bench_compute, bench_compute_batch);
criterion_main!(benches);
