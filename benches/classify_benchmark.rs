// ========================================================================================
//
//                 FRAUDSCOPE THRESHOLD RECOMPUTATION BENCHMARK
//
// ========================================================================================
//
// Every move of the threshold control triggers a full classify + evaluate pass over the
// scored dataset. This benchmark measures that pass, and a full sweep of all control
// stops, for cohort sizes around and above the usual dataset size.
//
// ========================================================================================

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use fraudscope::classify::classify;
use fraudscope::confusion::evaluate;
use fraudscope::session::{ThresholdSetting, sweep};
use fraudscope::types::ScoredRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Cohort sizes to simulate. The first matches the scale of the reference dataset.
const COHORT_SIZES: [usize; 3] = [9_841, 100_000, 1_000_000];

fn synthetic_cohort(n: usize) -> Vec<ScoredRecord> {
    let mut rng = StdRng::seed_from_u64(0xF4A0D);
    (0..n)
        .map(|_| ScoredRecord::new(i64::from(rng.gen_bool(0.15)), rng.gen_range(0.0..1.0)))
        .collect()
}

fn bench_single_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_and_evaluate");
    for &n in &COHORT_SIZES {
        let records = synthetic_cohort(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &records, |b, records| {
            b.iter(|| {
                let predictions = classify(black_box(records), black_box(0.5)).unwrap();
                evaluate(&predictions).unwrap()
            })
        });
    }
    group.finish();
}

fn bench_full_sweep(c: &mut Criterion) {
    let thresholds: Vec<f64> = ThresholdSetting::stops()
        .into_iter()
        .map(ThresholdSetting::value)
        .collect();
    let records = synthetic_cohort(COHORT_SIZES[0]);
    c.bench_function("sweep_all_stops", |b| {
        b.iter(|| sweep(black_box(&records), &thresholds).unwrap())
    });
}

criterion_group!(benches, bench_single_threshold, bench_full_sweep);
criterion_main!(benches);
