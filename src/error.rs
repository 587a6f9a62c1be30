//! Error taxonomy for the estimation engine
//!
//! Encoding errors propagate to the caller of `predict`; training errors are
//! fatal and stop the pipeline before any artifact is written.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the cost estimation engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// A categorical value was not present when the codec was fit.
    /// Never silently defaulted.
    #[error("unknown {field} category {value:?}; known values were fixed at training time")]
    UnknownCategory {
        /// Column the codec was fit on (sex, smoker, region)
        field: String,
        /// The out-of-vocabulary value supplied by the caller
        value: String,
    },

    /// The training dataset contained zero rows.
    #[error("training dataset is empty")]
    EmptyDataset,

    /// The train/test split would leave an empty partition.
    #[error("dataset of {rows} rows cannot be split with test fraction {test_fraction}")]
    DegenerateSplit { rows: usize, test_fraction: f64 },

    /// Neither a persisted model artifact nor a raw dataset is available.
    #[error(
        "no model found at {} and no dataset at {}; provide a dataset to train",
        model_path.display(),
        dataset_path.display()
    )]
    NoModelOrDataset {
        model_path: PathBuf,
        dataset_path: PathBuf,
    },

    /// The boosted candidate could not be trained. Handled internally by the
    /// trainer: selection degrades to the bagged candidate and the bundle
    /// records the absence.
    #[error("boosted candidate unavailable: {0}")]
    CandidateUnavailable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}
