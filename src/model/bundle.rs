//! The trained model bundle
//!
//! Immutable artifact of one training run: the selected regressor, the
//! categorical codecs, and the selection metadata. Loading a persisted
//! bundle is equivalent to holding the freshly trained one.

use super::boost::BoostModel;
use super::codec::CategoryCodecs;
use super::forest::ForestModel;
use crate::error::EngineError;
use crate::money::round_cents;
use crate::profile::Observation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed feature order consumed by both regressor families
pub const FEATURE_NAMES: [&str; 6] = ["age", "sex", "bmi", "children", "smoker", "region"];

/// Which candidate family was selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelKind {
    /// Bagged regression-tree ensemble (candidate A)
    BaggedTrees,
    /// Gradient-boosted regression trees (candidate B)
    BoostedTrees,
}

impl ModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::BaggedTrees => "Bagged Trees",
            ModelKind::BoostedTrees => "Boosted Trees",
        }
    }
}

/// The selected regressor, tagged by family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectedModel {
    BaggedTrees(ForestModel),
    BoostedTrees(BoostModel),
}

impl SelectedModel {
    fn predict_row(&self, row: &[f64]) -> f64 {
        match self {
            SelectedModel::BaggedTrees(model) => model.predict_row(row),
            SelectedModel::BoostedTrees(model) => model.predict_row(row),
        }
    }
}

/// Held-out scores of both candidates, kept for diagnostics
///
/// `boosted` is `None` when the boosted candidate was unavailable and
/// selection degraded to the bagged ensemble.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidateScores {
    pub bagged: f64,
    pub boosted: Option<f64>,
}

/// Immutable result of one training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelBundle {
    /// The selected regressor
    pub model: SelectedModel,

    /// Codecs for the three categorical columns, fit on the full dataset
    pub codecs: CategoryCodecs,

    /// R² of the selected model on the training partition
    pub train_score: f64,

    /// R² of the selected model on the held-out partition
    pub test_score: f64,

    /// Feature order the regressor was trained with
    pub feature_names: Vec<String>,

    /// Held-out scores of both candidates
    pub candidate_scores: CandidateScores,

    /// When the bundle was trained
    pub trained_at: DateTime<Utc>,
}

impl ModelBundle {
    /// Which candidate family the bundle carries
    pub fn model_kind(&self) -> ModelKind {
        match self.model {
            SelectedModel::BaggedTrees(_) => ModelKind::BaggedTrees,
            SelectedModel::BoostedTrees(_) => ModelKind::BoostedTrees,
        }
    }

    /// Predict the annual cost for one observation, rounded to cents
    ///
    /// Deterministic and referentially transparent: identical
    /// (bundle, observation) pairs always yield the identical rounded cost,
    /// so callers may memoize on the pair. Numeric ranges are not validated;
    /// out-of-vocabulary categorical values propagate `UnknownCategory`.
    pub fn predict(&self, observation: &Observation) -> Result<f64, EngineError> {
        let features = self.encode_features(observation)?;
        Ok(round_cents(self.model.predict_row(&features)))
    }

    /// Build the feature vector in training order
    pub fn encode_features(&self, observation: &Observation) -> Result<Vec<f64>, EngineError> {
        let sex = self.codecs.sex.encode(&observation.sex)?;
        let smoker = self.codecs.smoker.encode(&observation.smoker)?;
        let region = self.codecs.region.encode(&observation.region)?;

        Ok(vec![
            observation.age as f64,
            sex as f64,
            observation.bmi,
            observation.children as f64,
            smoker as f64,
            region as f64,
        ])
    }
}
