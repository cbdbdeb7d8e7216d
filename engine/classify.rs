//! # Threshold Classifier
//!
//! Turns continuous fraud probabilities into binary predictions under a single cutoff.
//! A probability exactly equal to the cutoff counts as fraud. Probabilities outside
//! `[0, 1]` are compared as-is; nothing here clamps or rejects them.

use crate::types::{EvaluationError, FRAUD, LEGITIMATE, Prediction, ScoredRecord};

/// Checks that a threshold lies in the closed unit interval. NaN is rejected.
pub fn validate_threshold(threshold: f64) -> Result<f64, EvaluationError> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(EvaluationError::InvalidThreshold(threshold))
    }
}

/// Applies `threshold` to every record, preserving input order.
pub fn classify(
    records: &[ScoredRecord],
    threshold: f64,
) -> Result<Vec<Prediction>, EvaluationError> {
    let threshold = validate_threshold(threshold)?;

    let predictions: Vec<Prediction> = records
        .iter()
        .map(|record| Prediction {
            true_label: record.true_label,
            predicted_label: predict_label(record.fraud_probability, threshold),
        })
        .collect();

    log::debug!(
        "Classified {} records at threshold {threshold}",
        predictions.len()
    );
    Ok(predictions)
}

/// Number of records flagged as fraud at `threshold`.
pub fn count_flagged(records: &[ScoredRecord], threshold: f64) -> Result<usize, EvaluationError> {
    let threshold = validate_threshold(threshold)?;
    Ok(records
        .iter()
        .filter(|record| predict_label(record.fraud_probability, threshold) == FRAUD)
        .count())
}

#[inline]
fn predict_label(fraud_probability: f64, threshold: f64) -> i64 {
    // NaN compares false, so an unscored record is never flagged.
    if fraud_probability >= threshold {
        FRAUD
    } else {
        LEGITIMATE
    }
}
