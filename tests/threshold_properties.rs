use fraudscope::classify::{classify, count_flagged};
use fraudscope::confusion::{ConfusionMatrix, evaluate};
use fraudscope::session::{ThresholdSetting, evaluate_threshold, sweep};
use fraudscope::tier::{RiskTier, tier_for};
use fraudscope::types::{EvaluationError, ScoredRecord};
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A synthetic scored cohort: about 15% fraud, with fraud scored higher on average.
fn synthetic_records(n: usize, seed: u64) -> Vec<ScoredRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let fraud = rng.gen_bool(0.15);
            let probability: f64 = if fraud {
                rng.gen_range(0.3..1.0)
            } else {
                rng.gen_range(0.0..0.7)
            };
            ScoredRecord::new(i64::from(fraud), probability)
        })
        .collect()
}

fn fine_thresholds() -> Vec<f64> {
    (0..=100).map(|i| f64::from(i) / 100.0).collect()
}

#[test]
fn flagged_count_never_increases_with_threshold() {
    for seed in 0..5 {
        let records = synthetic_records(500, seed);
        let counts: Vec<usize> = fine_thresholds()
            .iter()
            .map(|&t| count_flagged(&records, t).unwrap())
            .collect();
        for ((t1, c1), (t2, c2)) in fine_thresholds().iter().zip(&counts).tuple_windows() {
            assert!(
                c1 >= c2,
                "seed {seed}: {c1} flagged at {t1} but {c2} flagged at {t2}"
            );
        }
    }
}

#[test]
fn matrix_cells_sum_to_record_count_at_every_threshold() {
    let records = synthetic_records(1_000, 42);
    for evaluation in sweep(&records, &fine_thresholds()).unwrap() {
        assert_eq!(evaluation.matrix.total(), records.len() as u64);
        assert_eq!(evaluation.flagged() as u64, evaluation.matrix.predicted_fraud());
    }
}

#[test]
fn actual_class_totals_do_not_depend_on_threshold() {
    let records = synthetic_records(300, 9);
    let fraud = records.iter().filter(|r| r.true_label == 1).count() as u64;
    for threshold in fine_thresholds() {
        let matrix = evaluate(&classify(&records, threshold).unwrap()).unwrap();
        assert_eq!(matrix.actual_fraud(), fraud);
        assert_eq!(matrix.to_grid().row(0).sum(), records.len() as u64 - fraud);
    }
}

#[test]
fn repeated_evaluation_is_bit_identical() {
    let records = synthetic_records(250, 7);
    let first = evaluate(&classify(&records, 0.45).unwrap()).unwrap();
    let second = evaluate(&classify(&records, 0.45).unwrap()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.rates().f1.to_bits(), second.rates().f1.to_bits());
}

#[test]
fn reference_scenario_at_half() {
    let records = [
        ScoredRecord::new(1, 0.9),
        ScoredRecord::new(0, 0.3),
        ScoredRecord::new(1, 0.4),
        ScoredRecord::new(0, 0.6),
    ];
    let evaluation = evaluate_threshold(&records, 0.5).unwrap();
    let predicted = evaluation
        .predictions
        .iter()
        .map(|p| p.predicted_label)
        .collect_vec();
    assert_eq!(predicted, vec![1, 0, 0, 1]);
    assert_eq!(
        evaluation.matrix,
        ConfusionMatrix {
            true_positive: 1,
            true_negative: 1,
            false_positive: 1,
            false_negative: 1,
        }
    );
}

#[test]
fn boundary_probability_is_flagged() {
    let predictions = classify(&[ScoredRecord::new(1, 0.5)], 0.5).unwrap();
    assert_eq!(predictions[0].predicted_label, 1);
}

#[test]
fn empty_dataset_gives_zero_matrix() {
    let evaluation = evaluate_threshold(&[], 0.5).unwrap();
    assert!(evaluation.predictions.is_empty());
    assert_eq!(evaluation.matrix, ConfusionMatrix::default());
}

#[test]
fn tier_boundaries_are_exact() {
    assert_eq!(tier_for(0.4), RiskTier::HighRecall);
    assert_eq!(tier_for(0.41), RiskTier::Balanced);
    assert_eq!(tier_for(0.6), RiskTier::Balanced);
    assert_eq!(tier_for(0.61), RiskTier::LowFalsePositive);
}

#[test]
fn every_control_stop_evaluates() {
    let records = synthetic_records(100, 3);
    let tiers = ThresholdSetting::stops()
        .into_iter()
        .map(|setting| {
            evaluate_threshold(&records, setting.value())
                .unwrap()
                .summary
                .tier
        })
        .dedup_with_count()
        .collect_vec();
    // 0.10..=0.40, 0.45..=0.60, 0.65..=0.90
    assert_eq!(
        tiers,
        vec![
            (7, RiskTier::HighRecall),
            (4, RiskTier::Balanced),
            (6, RiskTier::LowFalsePositive),
        ]
    );
}

#[test]
fn corrupt_label_is_reported_not_skipped() {
    let mut records = synthetic_records(20, 11);
    records[13].true_label = -1;
    match evaluate_threshold(&records, 0.5) {
        Err(EvaluationError::LabelOutOfRange {
            index, true_label, ..
        }) => {
            assert_eq!(index, 13);
            assert_eq!(true_label, -1);
        }
        other => panic!("Expected LabelOutOfRange, got {other:?}"),
    }
}
