//! # Dashboard View
//!
//! Assembles everything one render of the analyst dashboard needs. The tier panel depends
//! only on the threshold, so it is always produced. The confusion-matrix panel needs the
//! dataset: a dataset failure degrades that panel to a warning, while corrupt labels abort
//! the render.

use crate::dashboard::accounts::AccountId;
use crate::dataset::{DatasetError, ScoredDataset};
use crate::session::{ThresholdEvaluation, ThresholdSetting, evaluate_threshold};
use crate::tier::{TierSummary, summary_for};
use crate::types::EvaluationError;
use std::path::PathBuf;

/// The analyst's inputs for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardRequest {
    pub setting: ThresholdSetting,
    pub account: Option<AccountId>,
    pub dataset_path: PathBuf,
}

#[derive(Debug, Clone)]
pub enum MatrixPanel {
    Ready(ThresholdEvaluation),
    Unavailable { banner: String, detail: String },
}

#[derive(Debug, Clone)]
pub struct DashboardView {
    pub setting: ThresholdSetting,
    pub summary: TierSummary,
    pub account: Option<AccountId>,
    pub dataset_path: PathBuf,
    pub panel: MatrixPanel,
}

pub fn build_view(
    request: &DashboardRequest,
    dataset: &Result<ScoredDataset, DatasetError>,
) -> Result<DashboardView, EvaluationError> {
    let threshold = request.setting.value();

    let panel = match dataset {
        Ok(dataset) => MatrixPanel::Ready(evaluate_threshold(&dataset.records, threshold)?),
        Err(err) => {
            log::warn!("Skipping confusion matrix: {err}");
            MatrixPanel::Unavailable {
                banner: err.warning_banner(&request.dataset_path),
                detail: err.to_string(),
            }
        }
    };

    Ok(DashboardView {
        setting: request.setting,
        summary: summary_for(threshold),
        account: request.account,
        dataset_path: request.dataset_path.clone(),
        panel,
    })
}

impl DashboardView {
    pub fn evaluation(&self) -> Option<&ThresholdEvaluation> {
        match &self.panel {
            MatrixPanel::Ready(evaluation) => Some(evaluation),
            MatrixPanel::Unavailable { .. } => None,
        }
    }
}
