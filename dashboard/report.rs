use crate::confusion::{ClassificationRates, ConfusionMatrix};
use crate::dashboard::view::{DashboardView, MatrixPanel};
use crate::session::ThresholdEvaluation;
use crate::tier::RiskTier;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

// --- Public Data Structures ---
// The report is the human-readable TOML snapshot of one dashboard render.
// Tables (matrix, rates) must stay after the plain keys for the TOML layout.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub threshold: f64,
    pub tier: RiskTier,
    pub fraud_recall_trend: String,
    pub false_positive_trend: String,
    pub dataset: String,
    pub account: Option<String>,
    /// Set when the dataset could not be used; `matrix` and `rates` are then absent.
    pub dataset_warning: Option<String>,
    pub flagged: Option<u64>,
    pub matrix: Option<ConfusionMatrix>,
    pub rates: Option<ClassificationRates>,
}

/// One line of a threshold sweep, flattened for tabular output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepRow {
    pub threshold: f64,
    pub tier: RiskTier,
    pub true_positive: u64,
    pub false_negative: u64,
    pub true_negative: u64,
    pub false_positive: u64,
    pub flagged: u64,
    pub recall: f64,
    pub precision: f64,
    pub false_positive_rate: f64,
}

impl From<&ThresholdEvaluation> for SweepRow {
    fn from(evaluation: &ThresholdEvaluation) -> Self {
        let rates = evaluation.rates();
        Self {
            threshold: evaluation.threshold,
            tier: evaluation.summary.tier,
            true_positive: evaluation.matrix.true_positive,
            false_negative: evaluation.matrix.false_negative,
            true_negative: evaluation.matrix.true_negative,
            false_positive: evaluation.matrix.false_positive,
            flagged: evaluation.flagged() as u64,
            recall: rates.recall,
            precision: rates.precision,
            false_positive_rate: rates.false_positive_rate,
        }
    }
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to read or write report file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML report file: {0}")]
    TomlParseError(#[from] toml::de::Error),
    #[error("Failed to serialize report to TOML format: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

impl From<&DashboardView> for EvaluationReport {
    fn from(view: &DashboardView) -> Self {
        let (dataset_warning, flagged, matrix, rates) = match &view.panel {
            MatrixPanel::Ready(evaluation) => (
                None,
                Some(evaluation.flagged() as u64),
                Some(evaluation.matrix),
                Some(evaluation.rates()),
            ),
            MatrixPanel::Unavailable { banner, .. } => (Some(banner.clone()), None, None, None),
        };

        Self {
            threshold: view.setting.value(),
            tier: view.summary.tier,
            fraud_recall_trend: view.summary.fraud_recall_trend.to_string(),
            false_positive_trend: view.summary.false_positive_trend.to_string(),
            dataset: view.dataset_path.display().to_string(),
            account: view.account.map(|id| id.as_str().to_string()),
            dataset_warning,
            flagged,
            matrix,
            rates,
        }
    }
}

impl EvaluationReport {
    pub fn save(&self, path: &Path) -> Result<(), ReportError> {
        let toml_string = toml::to_string_pretty(self)?;
        let mut file = BufWriter::new(fs::File::create(path)?);
        file.write_all(toml_string.as_bytes())?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let toml_string = fs::read_to_string(path)?;
        Ok(toml::from_str(&toml_string)?)
    }
}
