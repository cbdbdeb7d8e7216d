//! # Scored Dataset Loading
//!
//! This module is the only entry point for the scored predictions file. It reads the
//! comma-separated file, checks it against a fixed schema, and hands back plain
//! [`ScoredRecord`]s for the evaluation core.
//!
//! - Strict Schema: column names are not configurable. The file must carry `FLAG` (the
//!   known outcome, 0 or 1) and `fraud_prob` (the model's fraud probability). Any other
//!   columns are ignored.
//! - Recoverable Failures: every `DatasetError` means "no dataset for this render". The
//!   caller turns it into a warning banner and keeps the rest of the dashboard alive.
//! - Labels are loaded as integers without range checks. A `FLAG` of 2 is a data-quality
//!   problem that the confusion evaluator reports, not something to hide here.

use crate::types::ScoredRecord;
use polars::prelude::*;
use std::collections::HashSet;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const LABEL_COLUMN: &str = "FLAG";
pub const FRAUD_PROBABILITY_COLUMN: &str = "fraud_prob";
pub const DEFAULT_DATASET_PATH: &str = "predictions_with_probs.csv";

/// The scored accounts, in file order.
#[derive(Debug, Clone)]
pub struct ScoredDataset {
    pub path: PathBuf,
    pub records: Vec<ScoredRecord>,
}

impl ScoredDataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose probability falls outside `[0, 1]`. They are kept and thresholded as-is.
    pub fn out_of_range_probabilities(&self) -> usize {
        self.records
            .iter()
            .filter(|r| !(0.0..=1.0).contains(&r.fraud_probability))
            .count()
    }
}

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("The dataset file '{}' could not be opened: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error from the underlying Polars DataFrame library: {0}")]
    PolarsError(#[from] PolarsError),
    #[error(
        "The required column '{0}' was not found in the input file. Please check spelling and case."
    )]
    ColumnNotFound(String),
    #[error(
        "The required column '{column_name}' could not be converted to the expected type '{expected_type}'. (Found type: {found_type})"
    )]
    ColumnWrongType {
        column_name: String,
        expected_type: &'static str,
        found_type: String,
    },
    #[error(
        "Missing or null values were found in the required column '{0}'. Every scored account needs a value."
    )]
    MissingValuesFound(String),
    #[error("Non-finite values (NaN or Infinity) were found in the required column '{0}'.")]
    NonFiniteValuesFound(String),
    #[error("The 'FLAG' value {value} at data row {row} is not a whole number.")]
    NonIntegerLabel { row: usize, value: f64 },
}

impl DatasetError {
    /// The analyst-facing message shown in place of the confusion matrix.
    pub fn warning_banner(&self, path: &Path) -> String {
        match self {
            Self::Unavailable { .. } => format!(
                "Dynamic confusion matrix could not be generated. Ensure {} is uploaded.",
                path.display()
            ),
            _ => format!(
                "Dynamic confusion matrix could not be generated. {} must provide numeric '{LABEL_COLUMN}' and '{FRAUD_PROBABILITY_COLUMN}' columns.",
                path.display()
            ),
        }
    }
}

/// Loads the scored records from a comma-separated file with a header row.
pub fn load_scored_records(path: &Path) -> Result<ScoredDataset, DatasetError> {
    log::info!("Loading scored dataset from '{}'", path.display());

    let file = File::open(path).map_err(|source| DatasetError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let df = CsvReader::new(file)
        .with_options(CsvReadOptions::default().with_has_header(true))
        .finish()?;

    let columns_set: HashSet<String> = df
        .get_column_names()
        .into_iter()
        .map(|s| s.to_string())
        .collect();
    for required in [LABEL_COLUMN, FRAUD_PROBABILITY_COLUMN] {
        if !columns_set.contains(required) {
            return Err(DatasetError::ColumnNotFound(required.to_string()));
        }
    }

    let labels = extract_numeric_column(&df, LABEL_COLUMN)?;
    let probabilities = extract_numeric_column(&df, FRAUD_PROBABILITY_COLUMN)?;

    let mut records = Vec::with_capacity(labels.len());
    for (i, (&label, &fraud_probability)) in labels.iter().zip(&probabilities).enumerate() {
        if label.fract() != 0.0 {
            return Err(DatasetError::NonIntegerLabel {
                row: i + 1,
                value: label,
            });
        }
        records.push(ScoredRecord::new(label as i64, fraud_probability));
    }

    let dataset = ScoredDataset {
        path: path.to_path_buf(),
        records,
    };

    let loose = dataset.out_of_range_probabilities();
    if loose > 0 {
        log::warn!(
            "{loose} records have a '{FRAUD_PROBABILITY_COLUMN}' outside [0, 1]; they are thresholded unclamped."
        );
    }
    log::info!("Loaded {} scored records", dataset.len());
    Ok(dataset)
}

fn extract_numeric_column(df: &DataFrame, column_name: &str) -> Result<Vec<f64>, DatasetError> {
    let series = df.column(column_name)?;
    if series.null_count() > 0 {
        return Err(DatasetError::MissingValuesFound(column_name.to_string()));
    }

    let casted = series
        .cast(&DataType::Float64)
        .map_err(|_| wrong_type(column_name, series.dtype()))?;
    // A non-strict cast turns unparsable text into nulls.
    if casted.null_count() > 0 {
        return Err(wrong_type(column_name, series.dtype()));
    }

    let chunked = casted.f64()?.rechunk();
    let values: Vec<f64> = chunked.into_no_null_iter().collect();
    if values.iter().any(|v| !v.is_finite()) {
        return Err(DatasetError::NonFiniteValuesFound(column_name.to_string()));
    }
    Ok(values)
}

fn wrong_type(column_name: &str, found: &DataType) -> DatasetError {
    DatasetError::ColumnWrongType {
        column_name: column_name.to_string(),
        expected_type: "f64 (numeric)",
        found_type: format!("{found:?}"),
    }
}
