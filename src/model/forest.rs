//! Bagged regression-tree ensemble (candidate A)
//!
//! Each tree fits a bootstrap resample of the training rows; the ensemble
//! prediction is the mean over trees. Per-tree seeds derive from the base
//! seed and the tree index, so fitting the trees in parallel with rayon
//! changes nothing about the result.

use super::tree::{RegressionTree, TreeConfig};
use crate::rng::SplitMix64;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Hyperparameters for the bagged ensemble
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestConfig {
    /// Number of trees in the ensemble
    pub n_trees: usize,

    /// Maximum depth per tree
    pub max_depth: usize,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_trees: 100,
            max_depth: 10,
        }
    }
}

/// A fitted bagged ensemble
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestModel {
    trees: Vec<RegressionTree>,
}

impl ForestModel {
    /// Fit the ensemble on the full training partition
    pub fn fit(x: &[Vec<f64>], y: &[f64], config: &ForestConfig, seed: u64) -> Self {
        let n = y.len();
        let tree_config = TreeConfig {
            max_depth: config.max_depth,
            min_samples_leaf: 1,
        };

        let trees = (0..config.n_trees)
            .into_par_iter()
            .map(|tree_idx| {
                // Independent stream per tree; parallel order cannot matter
                let mut rng = SplitMix64::new(seed ^ (tree_idx as u64).wrapping_mul(0x9E37_79B9));
                let rows: Vec<usize> = (0..n).map(|_| rng.gen_index(n)).collect();
                RegressionTree::fit(x, y, &rows, &tree_config)
            })
            .collect();

        Self { trees }
    }

    /// Mean prediction over all trees
    pub fn predict_row(&self, row: &[f64]) -> f64 {
        let sum: f64 = self.trees.iter().map(|tree| tree.predict_row(row)).sum();
        sum / self.trees.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_data(n: usize) -> (Vec<Vec<f64>>, Vec<f64>) {
        let x: Vec<Vec<f64>> = (0..n).map(|i| vec![i as f64, (n - i) as f64]).collect();
        let y: Vec<f64> = (0..n).map(|i| 100.0 + 10.0 * i as f64).collect();
        (x, y)
    }

    #[test]
    fn test_fit_is_deterministic() {
        let (x, y) = linear_data(60);
        let config = ForestConfig {
            n_trees: 10,
            max_depth: 5,
        };

        let a = ForestModel::fit(&x, &y, &config, 42);
        let b = ForestModel::fit(&x, &y, &config, 42);

        for row in &x {
            assert_eq!(a.predict_row(row).to_bits(), b.predict_row(row).to_bits());
        }
    }

    #[test]
    fn test_captures_monotone_trend() {
        let (x, y) = linear_data(80);
        let config = ForestConfig {
            n_trees: 20,
            max_depth: 6,
        };
        let model = ForestModel::fit(&x, &y, &config, 42);

        assert!(model.predict_row(&x[70]) > model.predict_row(&x[10]));
    }
}
