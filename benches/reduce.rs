//! Criterion view of the comparison `reduce-bench` prints: every baseline
//! reduction and the partitioned reducer at a few worker counts.

use std::hint::black_box;

use chunked_reduce::bench::{DataGenerator, Operation, Policy};
use chunked_reduce::{Driver, SequentialExecutor, ThreadExecutor};
use chunked_reduce::ParallelReduce;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

criterion_group!(benches, policies, executors);
criterion_main!(benches);

const SIZE: usize = 1_000_000;

fn policies(c: &mut Criterion) {
    let sequence = DataGenerator::new(42).sequence(SIZE);

    for operation in [Operation::Light, Operation::Heavy] {
        let mut group = c.benchmark_group(format!("reduce_{}", operation));
        group.throughput(Throughput::Elements(SIZE as u64));

        let combine = operation.combine();
        let custom = [2, 4, 8].map(|workers| Policy::Custom { workers });

        for policy in Policy::BASELINES.iter().chain(custom.iter()) {
            group.bench_with_input(
                BenchmarkId::from_parameter(policy),
                &sequence,
                |b, sequence| {
                    b.iter(|| policy.run(black_box(sequence), 0, combine));
                },
            );
        }

        group.finish();
    }
}

// Fixed fan-out cost of the executors with the work itself kept small.
fn executors(c: &mut Criterion) {
    let sequence = DataGenerator::new(7).sequence(10_000);
    let mut group = c.benchmark_group("executor_overhead");

    group.bench_function("thread", |b| {
        b.iter(|| {
            sequence
                .par_reduce(0, i32::wrapping_add)
                .workers(4)
                .exec_with(ThreadExecutor::new())
        });
    });

    group.bench_function("sequential", |b| {
        b.iter(|| {
            sequence
                .par_reduce(0, i32::wrapping_add)
                .workers(4)
                .exec_with(SequentialExecutor)
        });
    });

    #[cfg(feature = "rayon-executor")]
    group.bench_function("rayon", |b| {
        b.iter(|| {
            sequence
                .par_reduce(0, i32::wrapping_add)
                .workers(4)
                .exec_with(chunked_reduce::RayonExecutor::new())
        });
    });

    group.finish();
}
