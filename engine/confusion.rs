//! # Confusion Evaluator
//!
//! Tallies predicted/actual label pairs into a 2x2 confusion matrix and derives the usual
//! classification rates from it. Fraud (`1`) is the positive class.

use crate::types::{EvaluationError, FRAUD, LEGITIMATE, Prediction, is_binary_label};
use ndarray::{Array2, array};
use serde::{Deserialize, Serialize};

/// Outcome counts for one threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub true_positive: u64,
    pub true_negative: u64,
    pub false_positive: u64,
    pub false_negative: u64,
}

/// Rates derived from a [`ConfusionMatrix`]. A ratio with a zero denominator is reported as 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRates {
    pub recall: f64,
    pub precision: f64,
    pub false_positive_rate: f64,
    pub accuracy: f64,
    pub f1: f64,
}

/// Builds the confusion matrix for a prediction set.
///
/// Every pair must carry labels from `{0, 1}`; the first pair that does not is reported
/// with its position.
pub fn evaluate(pairs: &[Prediction]) -> Result<ConfusionMatrix, EvaluationError> {
    let mut matrix = ConfusionMatrix::default();

    for (index, pair) in pairs.iter().enumerate() {
        if !is_binary_label(pair.true_label) || !is_binary_label(pair.predicted_label) {
            return Err(EvaluationError::LabelOutOfRange {
                index,
                true_label: pair.true_label,
                predicted_label: pair.predicted_label,
            });
        }

        match (pair.true_label, pair.predicted_label) {
            (FRAUD, FRAUD) => matrix.true_positive += 1,
            (LEGITIMATE, LEGITIMATE) => matrix.true_negative += 1,
            (LEGITIMATE, FRAUD) => matrix.false_positive += 1,
            _ => matrix.false_negative += 1,
        }
    }

    Ok(matrix)
}

impl ConfusionMatrix {
    /// Sum of all four cells.
    pub fn total(&self) -> u64 {
        self.true_positive + self.true_negative + self.false_positive + self.false_negative
    }

    /// Records whose actual label is fraud.
    pub fn actual_fraud(&self) -> u64 {
        self.true_positive + self.false_negative
    }

    /// Records flagged as fraud.
    pub fn predicted_fraud(&self) -> u64 {
        self.true_positive + self.false_positive
    }

    /// The matrix laid out for heat-map rendering: rows are the actual label, columns the
    /// predicted label, both ordered `[0, 1]`.
    pub fn to_grid(&self) -> Array2<u64> {
        array![
            [self.true_negative, self.false_positive],
            [self.false_negative, self.true_positive]
        ]
    }

    pub fn rates(&self) -> ClassificationRates {
        let recall = ratio(self.true_positive, self.actual_fraud());
        let precision = ratio(self.true_positive, self.predicted_fraud());
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        ClassificationRates {
            recall,
            precision,
            false_positive_rate: ratio(
                self.false_positive,
                self.false_positive + self.true_negative,
            ),
            accuracy: ratio(self.true_positive + self.true_negative, self.total()),
            f1,
        }
    }
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
