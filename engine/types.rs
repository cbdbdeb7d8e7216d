// ========================================================================================
//                             High-Level Data Contracts
// ========================================================================================

// This file is ONLY for types that are SHARED BETWEEN FILES, not types that only are used in one file.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The label value for a legitimate account.
pub const LEGITIMATE: i64 = 0;
/// The label value for a fraudulent account.
pub const FRAUD: i64 = 1;

/// One previously scored account: its known outcome and the model's fraud probability.
///
/// `true_label` is kept as a raw integer so that corrupt labels survive loading and are
/// reported by the evaluator instead of being dropped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    pub true_label: i64,
    pub fraud_probability: f64,
}

impl ScoredRecord {
    pub fn new(true_label: i64, fraud_probability: f64) -> Self {
        Self {
            true_label,
            fraud_probability,
        }
    }
}

/// A record's known outcome paired with the label assigned under some threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Prediction {
    pub true_label: i64,
    pub predicted_label: i64,
}

/// Failures raised by the classifier and the confusion evaluator.
///
/// The core never recovers from these itself; they go straight back to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    #[error("Threshold {0} is outside the closed interval [0, 1].")]
    InvalidThreshold(f64),

    #[error(
        "Label out of range at position {index}: true label {true_label}, predicted label {predicted_label}. Only 0 and 1 are valid."
    )]
    LabelOutOfRange {
        index: usize,
        true_label: i64,
        predicted_label: i64,
    },
}

#[inline]
pub fn is_binary_label(label: i64) -> bool {
    label == LEGITIMATE || label == FRAUD
}
