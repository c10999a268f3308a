// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_stage::sequencer::{LaneId, Sequencer, PARALLEL_COLUMNS, SEQUENTIAL_BLOCKS};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn sequencer_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequencer");
    let step = Duration::from_millis(500);

    group.bench_function("full_run_both_lanes", |b| {
        b.iter(|| {
            let mut sequencer = Sequencer::with_step(step);
            let start = Instant::now();
            sequencer.start(start);

            let mut now = start;
            for _ in 0..SEQUENTIAL_BLOCKS {
                now += step;
                sequencer.advance(LaneId::Sequential, now);
            }

            let mut now = start;
            for _ in 0..PARALLEL_COLUMNS {
                now += step;
                sequencer.advance(LaneId::Parallel, now);
            }

            let _ = black_box(sequencer.progress(LaneId::Sequential));
            let _ = black_box(sequencer.progress(LaneId::Parallel));
        });
    });

    group.finish();
}

criterion_group!(benches, sequencer_benchmark);
criterion_main!(benches);
