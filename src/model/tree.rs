//! Regression tree (CART)
//!
//! Variance-reduction splits over a dense f64 feature matrix. The tree is
//! stored as a flat node arena so the fitted structure serializes cleanly
//! into the model bundle.

use serde::{Deserialize, Serialize};

/// Stopping parameters for tree growth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Maximum depth; the root is depth 0
    pub max_depth: usize,

    /// Minimum rows required on each side of a split
    pub min_samples_leaf: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            min_samples_leaf: 1,
        }
    }
}

/// One node in the flat arena
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// Terminal node predicting the mean of its training rows
    Leaf { value: f64 },

    /// Internal split: rows with feature < threshold go left
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// A fitted regression tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionTree {
    nodes: Vec<Node>,
}

impl RegressionTree {
    /// Fit a tree on the given rows of the feature matrix
    ///
    /// `rows` selects (with repetition, for bootstrap samples) which rows of
    /// `x`/`y` the tree trains on.
    pub fn fit(x: &[Vec<f64>], y: &[f64], rows: &[usize], config: &TreeConfig) -> Self {
        let mut tree = Self { nodes: Vec::new() };
        tree.grow(x, y, rows, 0, config);
        tree
    }

    /// Predict the target for a single feature vector
    pub fn predict_row(&self, row: &[f64]) -> f64 {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if row[*feature] < *threshold { *left } else { *right };
                }
            }
        }
    }

    /// Grow a subtree over `rows`, returning its root index in the arena
    fn grow(
        &mut self,
        x: &[Vec<f64>],
        y: &[f64],
        rows: &[usize],
        depth: usize,
        config: &TreeConfig,
    ) -> usize {
        let mean = mean_of(y, rows);

        if depth >= config.max_depth || rows.len() < 2 * config.min_samples_leaf {
            return self.push_leaf(mean);
        }

        let Some(split) = best_split(x, y, rows, config.min_samples_leaf) else {
            return self.push_leaf(mean);
        };

        let (left_rows, right_rows): (Vec<usize>, Vec<usize>) = rows
            .iter()
            .copied()
            .partition(|&r| x[r][split.feature] < split.threshold);

        // Reserve the split slot before growing children so child indices
        // are known only after recursion completes.
        let idx = self.nodes.len();
        self.nodes.push(Node::Leaf { value: mean });

        let left = self.grow(x, y, &left_rows, depth + 1, config);
        let right = self.grow(x, y, &right_rows, depth + 1, config);

        self.nodes[idx] = Node::Split {
            feature: split.feature,
            threshold: split.threshold,
            left,
            right,
        };
        idx
    }

    fn push_leaf(&mut self, value: f64) -> usize {
        self.nodes.push(Node::Leaf { value });
        self.nodes.len() - 1
    }

    #[cfg(test)]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

struct Candidate {
    feature: usize,
    threshold: f64,
}

/// Find the split minimizing total within-node SSE, or None if no split
/// improves on the parent or satisfies the leaf-size constraint
fn best_split(x: &[Vec<f64>], y: &[f64], rows: &[usize], min_leaf: usize) -> Option<Candidate> {
    let n = rows.len();
    let total_sum: f64 = rows.iter().map(|&r| y[r]).sum();
    let total_sq: f64 = rows.iter().map(|&r| y[r] * y[r]).sum();
    let parent_sse = total_sq - total_sum * total_sum / n as f64;

    let n_features = x[rows[0]].len();
    let mut best: Option<(f64, Candidate)> = None;

    let mut sorted: Vec<(f64, f64)> = Vec::with_capacity(n);
    for feature in 0..n_features {
        sorted.clear();
        sorted.extend(rows.iter().map(|&r| (x[r][feature], y[r])));
        sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut left_sum = 0.0;
        let mut left_sq = 0.0;
        for i in 0..n - 1 {
            let (value, target) = sorted[i];
            left_sum += target;
            left_sq += target * target;

            let next_value = sorted[i + 1].0;
            if value == next_value {
                continue; // no threshold separates tied values
            }

            let left_n = i + 1;
            let right_n = n - left_n;
            if left_n < min_leaf || right_n < min_leaf {
                continue;
            }

            let right_sum = total_sum - left_sum;
            let right_sq = total_sq - left_sq;
            let sse = (left_sq - left_sum * left_sum / left_n as f64)
                + (right_sq - right_sum * right_sum / right_n as f64);

            if best.as_ref().map_or(sse < parent_sse, |(b, _)| sse < *b) {
                best = Some((
                    sse,
                    Candidate {
                        feature,
                        threshold: (value + next_value) / 2.0,
                    },
                ));
            }
        }
    }

    best.map(|(_, candidate)| candidate)
}

fn mean_of(y: &[f64], rows: &[usize]) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    rows.iter().map(|&r| y[r]).sum::<f64>() / rows.len() as f64
}
