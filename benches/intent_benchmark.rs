//! Performance benchmarks for intent evaluation
//!
//! Evaluation runs on every pointer move that crosses an item boundary, so
//! it should stay well under a microsecond.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use menu_aim::geometry::{derive_corners, ContentDirection, Point, Region};
use menu_aim::intent::{IntentEvaluator, IntentState};
use menu_aim::pointer::SampleBuffer;

fn region() -> Region {
    Region::new(0.0, 100.0, 50.0, 0.0)
}

/// Pointer path sweeping diagonally up-right across the menu
fn generate_trajectory(len: usize) -> Vec<Point> {
    (0..len)
        .map(|i| {
            let t = i as f64 / len as f64;
            Point::new(10.0 + 85.0 * t, 45.0 - 40.0 * t)
        })
        .collect()
}

/// Benchmark a single verdict for each direction
fn bench_should_switch(c: &mut Criterion) {
    let mut group = c.benchmark_group("should_switch");

    let mut samples = SampleBuffer::default();
    samples.push(Point::new(90.0, 10.0));
    samples.push(Point::new(95.0, 5.0));

    for direction in ContentDirection::ALL {
        let evaluator = IntentEvaluator::new(region(), 50.0, direction);
        group.bench_with_input(
            BenchmarkId::from_parameter(direction),
            &evaluator,
            |b, evaluator| {
                b.iter(|| {
                    let mut state = IntentState::default();
                    black_box(evaluator.should_switch(&mut state, true, black_box(&samples)))
                })
            },
        );
    }

    group.finish();
}

/// Benchmark evaluating every step of a trajectory
fn bench_trajectory(c: &mut Criterion) {
    let mut group = c.benchmark_group("trajectory");
    let evaluator = IntentEvaluator::new(region(), 50.0, ContentDirection::Right);

    for len in [10, 100, 1000].iter() {
        let path = generate_trajectory(*len);
        group.throughput(Throughput::Elements(*len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &path, |b, path| {
            b.iter(|| {
                let mut state = IntentState::default();
                let mut samples = SampleBuffer::default();
                let mut waits = 0usize;
                for point in path {
                    samples.push(*point);
                    if !evaluator.should_switch(&mut state, true, &samples).is_switch() {
                        waits += 1;
                    }
                }
                black_box(waits)
            })
        });
    }

    group.finish();
}

/// Benchmark corner derivation
fn bench_derive_corners(c: &mut Criterion) {
    c.bench_function("derive_corners", |b| {
        let region = region();
        b.iter(|| {
            for direction in ContentDirection::ALL {
                black_box(derive_corners(black_box(&region), 50.0, direction));
            }
        })
    });
}

criterion_group!(benches, bench_should_switch, bench_trajectory, bench_derive_corners);
criterion_main!(benches);
