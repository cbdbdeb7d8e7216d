//! Loading of the static scored dataset. Loaded once per process; read-only afterwards.

pub mod data;

pub use data::{
    DEFAULT_DATASET_PATH, DatasetError, FRAUD_PROBABILITY_COLUMN, LABEL_COLUMN, ScoredDataset,
    load_scored_records,
};
