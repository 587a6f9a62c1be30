//! Gradient-boosted regression trees (candidate B)
//!
//! Squared-error boosting: start from the target mean, then repeatedly fit a
//! shallow tree to the current residuals and add it scaled by the learning
//! rate. No row sampling, so the fit is deterministic without seeding.

use super::tree::{RegressionTree, TreeConfig};
use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Hyperparameters for the boosted ensemble
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostConfig {
    /// Number of boosting rounds
    pub n_trees: usize,

    /// Maximum depth per tree
    pub max_depth: usize,

    /// Shrinkage applied to each tree's contribution
    pub learning_rate: f64,
}

impl Default for BoostConfig {
    fn default() -> Self {
        Self {
            n_trees: 100,
            max_depth: 6,
            learning_rate: 0.1,
        }
    }
}

impl BoostConfig {
    /// Reject configurations that cannot produce a usable candidate
    fn validate(&self) -> Result<(), EngineError> {
        if self.n_trees == 0 {
            return Err(EngineError::CandidateUnavailable(
                "boosting requires at least one round".to_string(),
            ));
        }
        if !(self.learning_rate > 0.0) {
            return Err(EngineError::CandidateUnavailable(format!(
                "learning rate must be positive, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}

/// A fitted boosted ensemble
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostModel {
    base_prediction: f64,
    learning_rate: f64,
    trees: Vec<RegressionTree>,
}

impl BoostModel {
    /// Fit the ensemble on the full training partition
    pub fn fit(x: &[Vec<f64>], y: &[f64], config: &BoostConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let n = y.len();
        let base_prediction = y.iter().sum::<f64>() / n as f64;
        let rows: Vec<usize> = (0..n).collect();
        let tree_config = TreeConfig {
            max_depth: config.max_depth,
            min_samples_leaf: 1,
        };

        let mut predictions = vec![base_prediction; n];
        let mut residuals = vec![0.0; n];
        let mut trees = Vec::with_capacity(config.n_trees);

        for _ in 0..config.n_trees {
            for i in 0..n {
                residuals[i] = y[i] - predictions[i];
            }

            let tree = RegressionTree::fit(x, &residuals, &rows, &tree_config);
            for i in 0..n {
                predictions[i] += config.learning_rate * tree.predict_row(&x[i]);
            }
            trees.push(tree);
        }

        Ok(Self {
            base_prediction,
            learning_rate: config.learning_rate,
            trees,
        })
    }

    /// Base prediction plus the shrunken tree contributions
    pub fn predict_row(&self, row: &[f64]) -> f64 {
        let boost: f64 = self.trees.iter().map(|tree| tree.predict_row(row)).sum();
        self.base_prediction + self.learning_rate * boost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reduces_training_error() {
        let x: Vec<Vec<f64>> = (0..40).map(|i| vec![i as f64]).collect();
        let y: Vec<f64> = (0..40).map(|i| if i < 20 { 1000.0 } else { 5000.0 }).collect();

        let config = BoostConfig {
            n_trees: 30,
            max_depth: 3,
            learning_rate: 0.3,
        };
        let model = BoostModel::fit(&x, &y, &config).unwrap();

        // Should be far closer to the step than the global mean (3000)
        assert_relative_eq!(model.predict_row(&[5.0]), 1000.0, max_relative = 0.05);
        assert_relative_eq!(model.predict_row(&[35.0]), 5000.0, max_relative = 0.05);
    }

    #[test]
    fn test_fit_is_deterministic() {
        let x: Vec<Vec<f64>> = (0..30).map(|i| vec![i as f64]).collect();
        let y: Vec<f64> = (0..30).map(|i| 50.0 * i as f64).collect();
        let config = BoostConfig::default();

        let a = BoostModel::fit(&x, &y, &config).unwrap();
        let b = BoostModel::fit(&x, &y, &config).unwrap();

        for row in &x {
            assert_eq!(a.predict_row(row).to_bits(), b.predict_row(row).to_bits());
        }
    }

    #[test]
    fn test_zero_rounds_is_unavailable() {
        let config = BoostConfig {
            n_trees: 0,
            ..BoostConfig::default()
        };
        let err = BoostModel::fit(&[vec![1.0]], &[1.0], &config).unwrap_err();
        assert!(matches!(err, EngineError::CandidateUnavailable(_)));
    }
}
