//! # Evaluation Boundary
//!
//! The single entry point a rendering surface calls on every analyst interaction. All
//! analyst state arrives as explicit arguments; nothing is cached between calls, so every
//! evaluation is a full recomputation from the scored records.

use crate::classify::classify;
use crate::confusion::{ClassificationRates, ConfusionMatrix, evaluate};
use crate::tier::{TierSummary, summary_for};
use crate::types::{EvaluationError, Prediction, ScoredRecord};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Lowest value offered by the threshold control.
pub const SLIDER_MIN: f64 = 0.1;
/// Highest value offered by the threshold control.
pub const SLIDER_MAX: f64 = 0.9;
/// Starting value of the threshold control.
pub const SLIDER_DEFAULT: f64 = 0.5;
/// The control moves in twentieths.
const SLIDER_STEPS_PER_UNIT: f64 = 20.0;
const GRID_TOLERANCE: f64 = 1e-9;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingError {
    #[error("Threshold setting {0} is outside the control range [0.1, 0.9].")]
    OutOfRange(f64),
    #[error("Threshold setting {0} does not sit on the 0.05 step grid.")]
    OffGrid(f64),
}

/// A threshold value as offered by the analyst control: `[0.1, 0.9]` in steps of `0.05`.
///
/// Values are stored as the nearest multiple of 1/20 so that band boundaries such as `0.4`
/// and `0.6` compare exactly.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct ThresholdSetting(f64);

impl ThresholdSetting {
    pub fn new(value: f64) -> Result<Self, SettingError> {
        if !(SLIDER_MIN - GRID_TOLERANCE..=SLIDER_MAX + GRID_TOLERANCE).contains(&value) {
            return Err(SettingError::OutOfRange(value));
        }
        let steps = (value * SLIDER_STEPS_PER_UNIT).round();
        if (value * SLIDER_STEPS_PER_UNIT - steps).abs() > GRID_TOLERANCE * SLIDER_STEPS_PER_UNIT {
            return Err(SettingError::OffGrid(value));
        }
        Ok(Self(steps / SLIDER_STEPS_PER_UNIT))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Every position the control can take, lowest first.
    pub fn stops() -> Vec<Self> {
        let first = (SLIDER_MIN * SLIDER_STEPS_PER_UNIT).round() as u32;
        let last = (SLIDER_MAX * SLIDER_STEPS_PER_UNIT).round() as u32;
        (first..=last)
            .map(|step| Self(f64::from(step) / SLIDER_STEPS_PER_UNIT))
            .collect()
    }
}

impl Default for ThresholdSetting {
    fn default() -> Self {
        Self(SLIDER_DEFAULT)
    }
}

impl fmt::Display for ThresholdSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Everything the dashboard shows for one threshold.
#[derive(Debug, Clone, Serialize)]
pub struct ThresholdEvaluation {
    pub threshold: f64,
    pub predictions: Vec<Prediction>,
    pub matrix: ConfusionMatrix,
    pub summary: TierSummary,
}

impl ThresholdEvaluation {
    pub fn rates(&self) -> ClassificationRates {
        self.matrix.rates()
    }

    pub fn flagged(&self) -> usize {
        self.predictions
            .iter()
            .filter(|p| p.predicted_label == crate::types::FRAUD)
            .count()
    }
}

/// Classifies, tallies and tiers the records at one threshold.
pub fn evaluate_threshold(
    records: &[ScoredRecord],
    threshold: f64,
) -> Result<ThresholdEvaluation, EvaluationError> {
    let predictions = classify(records, threshold)?;
    let matrix = evaluate(&predictions)?;
    log::info!(
        "Threshold {threshold}: TP={} FN={} TN={} FP={}",
        matrix.true_positive,
        matrix.false_negative,
        matrix.true_negative,
        matrix.false_positive
    );

    Ok(ThresholdEvaluation {
        threshold,
        predictions,
        matrix,
        summary: summary_for(threshold),
    })
}

/// Evaluates each threshold independently, in the order given. Stops at the first failure.
pub fn sweep(
    records: &[ScoredRecord],
    thresholds: &[f64],
) -> Result<Vec<ThresholdEvaluation>, EvaluationError> {
    thresholds
        .iter()
        .map(|&threshold| evaluate_threshold(records, threshold))
        .collect()
}
