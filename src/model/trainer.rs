//! One-shot training pipeline with automatic model selection
//!
//! Fits codecs on the full dataset, splits 80/20 with a fixed seed, trains
//! both candidate ensembles on the same encoded matrix, scores each by R²,
//! and selects the bagged ensemble unless the boosted one strictly beats it
//! on the held-out partition.

use super::boost::{BoostConfig, BoostModel};
use super::bundle::{CandidateScores, ModelBundle, SelectedModel, FEATURE_NAMES};
use super::codec::{CategoryCodec, CategoryCodecs};
use super::forest::{ForestConfig, ForestModel};
use crate::error::EngineError;
use crate::profile::DatasetRow;
use crate::rng::SplitMix64;
use chrono::Utc;
use log::{info, warn};

/// Training configuration
///
/// Defaults are the documented, reproducibility-bearing hyperparameters:
/// 20% held out under seed 42; 100 bagged trees of depth 10; 100 boosting
/// rounds of depth 6 at learning rate 0.1.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    /// Fraction of rows held out for model selection
    pub test_fraction: f64,

    /// Seed for the shuffle split and the bootstrap streams
    pub seed: u64,

    /// Candidate A hyperparameters
    pub forest: ForestConfig,

    /// Candidate B hyperparameters
    pub boost: BoostConfig,

    /// When false, candidate B is not trained and selection degrades to A
    pub enable_boosted: bool,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            test_fraction: 0.2,
            seed: 42,
            forest: ForestConfig::default(),
            boost: BoostConfig::default(),
            enable_boosted: true,
        }
    }
}

/// Train both candidates and build the immutable model bundle
///
/// Fails with `EmptyDataset` for zero rows and `DegenerateSplit` when the
/// requested split would leave an empty partition. Nothing is persisted
/// here; the caller owns the persistence step.
pub fn train(rows: &[DatasetRow], config: &TrainConfig) -> Result<ModelBundle, EngineError> {
    if rows.is_empty() {
        return Err(EngineError::EmptyDataset);
    }

    // Codecs see the full dataset so no later partition can surprise them
    let codecs = CategoryCodecs {
        sex: CategoryCodec::fit("sex", rows.iter().map(|r| r.observation.sex.as_str())),
        smoker: CategoryCodec::fit("smoker", rows.iter().map(|r| r.observation.smoker.as_str())),
        region: CategoryCodec::fit("region", rows.iter().map(|r| r.observation.region.as_str())),
    };

    let (x, y) = encode_matrix(rows, &codecs)?;
    let split = shuffle_split(rows.len(), config.test_fraction, config.seed)?;

    let x_train = select_rows(&x, &split.train);
    let y_train = select_values(&y, &split.train);
    let x_test = select_rows(&x, &split.test);
    let y_test = select_values(&y, &split.test);

    info!(
        "training on {} rows, holding out {} (seed {})",
        split.train.len(),
        split.test.len(),
        config.seed
    );

    let forest = ForestModel::fit(&x_train, &y_train, &config.forest, config.seed);
    let forest_train = r_squared(&y_train, |i| forest.predict_row(&x_train[i]));
    let forest_test = r_squared(&y_test, |i| forest.predict_row(&x_test[i]));
    info!(
        "bagged candidate: train R² {:.4}, held-out R² {:.4}",
        forest_train, forest_test
    );

    let boosted = if config.enable_boosted {
        match BoostModel::fit(&x_train, &y_train, &config.boost) {
            Ok(model) => {
                let train_score = r_squared(&y_train, |i| model.predict_row(&x_train[i]));
                let test_score = r_squared(&y_test, |i| model.predict_row(&x_test[i]));
                info!(
                    "boosted candidate: train R² {:.4}, held-out R² {:.4}",
                    train_score, test_score
                );
                Some((model, train_score, test_score))
            }
            Err(EngineError::CandidateUnavailable(reason)) => {
                warn!("boosted candidate unavailable ({reason}); selecting bagged ensemble");
                None
            }
            Err(other) => return Err(other),
        }
    } else {
        warn!("boosted candidate disabled; selecting bagged ensemble");
        None
    };

    // Candidate A wins ties; B must strictly beat it on the held-out score
    let boosted_test = boosted.as_ref().map(|(_, _, test_score)| *test_score);
    let bundle = match boosted {
        Some((model, train_score, test_score)) if test_score > forest_test => ModelBundle {
            model: SelectedModel::BoostedTrees(model),
            codecs,
            train_score,
            test_score,
            feature_names: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            candidate_scores: CandidateScores {
                bagged: forest_test,
                boosted: boosted_test,
            },
            trained_at: Utc::now(),
        },
        _ => ModelBundle {
            model: SelectedModel::BaggedTrees(forest),
            codecs,
            train_score: forest_train,
            test_score: forest_test,
            feature_names: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            candidate_scores: CandidateScores {
                bagged: forest_test,
                boosted: boosted_test,
            },
            trained_at: Utc::now(),
        },
    };

    info!(
        "selected {} (held-out R² {:.4})",
        bundle.model_kind().as_str(),
        bundle.test_score
    );
    Ok(bundle)
}

struct SplitIndices {
    train: Vec<usize>,
    test: Vec<usize>,
}

/// Deterministic shuffle split. The test partition takes the ceiling of
/// `n * test_fraction` rows; both partitions must end up non-empty.
fn shuffle_split(n: usize, test_fraction: f64, seed: u64) -> Result<SplitIndices, EngineError> {
    let n_test = (n as f64 * test_fraction).ceil() as usize;
    if n_test == 0 || n_test >= n {
        return Err(EngineError::DegenerateSplit {
            rows: n,
            test_fraction,
        });
    }

    let mut indices: Vec<usize> = (0..n).collect();
    SplitMix64::new(seed).shuffle(&mut indices);

    let test = indices.split_off(n - n_test);
    Ok(SplitIndices {
        train: indices,
        test,
    })
}

fn encode_matrix(
    rows: &[DatasetRow],
    codecs: &CategoryCodecs,
) -> Result<(Vec<Vec<f64>>, Vec<f64>), EngineError> {
    let mut x = Vec::with_capacity(rows.len());
    let mut y = Vec::with_capacity(rows.len());

    for row in rows {
        let obs = &row.observation;
        x.push(vec![
            obs.age as f64,
            codecs.sex.encode(&obs.sex)? as f64,
            obs.bmi,
            obs.children as f64,
            codecs.smoker.encode(&obs.smoker)? as f64,
            codecs.region.encode(&obs.region)? as f64,
        ]);
        y.push(row.charges);
    }

    Ok((x, y))
}

fn select_rows(x: &[Vec<f64>], indices: &[usize]) -> Vec<Vec<f64>> {
    indices.iter().map(|&i| x[i].clone()).collect()
}

fn select_values(y: &[f64], indices: &[usize]) -> Vec<f64> {
    indices.iter().map(|&i| y[i]).collect()
}

/// Coefficient of determination: 1 - SS_res / SS_tot
///
/// A constant target scores 1.0 for an exact fit and 0.0 otherwise.
fn r_squared(actual: &[f64], predict: impl Fn(usize) -> f64) -> f64 {
    let n = actual.len();
    let mean = actual.iter().sum::<f64>() / n as f64;

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for (i, &y) in actual.iter().enumerate() {
        let p = predict(i);
        ss_res += (y - p) * (y - p);
        ss_tot += (y - mean) * (y - mean);
    }

    if ss_tot == 0.0 {
        if ss_res == 0.0 {
            1.0
        } else {
            0.0
        }
    } else {
        1.0 - ss_res / ss_tot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::bundle::ModelKind;
    use crate::profile::synthetic::generate_dataset;
    use crate::profile::Observation;
    use approx::assert_relative_eq;

    /// Small but realistic config so the test suite stays fast
    fn quick_config() -> TrainConfig {
        TrainConfig {
            forest: ForestConfig {
                n_trees: 25,
                max_depth: 8,
            },
            boost: BoostConfig {
                n_trees: 50,
                max_depth: 4,
                learning_rate: 0.1,
            },
            ..TrainConfig::default()
        }
    }

    #[test]
    fn test_empty_dataset_is_error() {
        let err = train(&[], &TrainConfig::default()).unwrap_err();
        assert!(matches!(err, EngineError::EmptyDataset));
    }

    #[test]
    fn test_single_row_is_degenerate_split() {
        let rows = generate_dataset(1, 42);
        let err = train(&rows, &TrainConfig::default()).unwrap_err();
        assert!(matches!(err, EngineError::DegenerateSplit { rows: 1, .. }));
    }

    #[test]
    fn test_shuffle_split_partitions() {
        let split = shuffle_split(100, 0.2, 42).unwrap();
        assert_eq!(split.train.len(), 80);
        assert_eq!(split.test.len(), 20);

        let mut all: Vec<usize> = split.train.iter().chain(&split.test).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..100).collect::<Vec<usize>>());
    }

    #[test]
    fn test_shuffle_split_deterministic() {
        let a = shuffle_split(50, 0.2, 42).unwrap();
        let b = shuffle_split(50, 0.2, 42).unwrap();
        assert_eq!(a.train, b.train);
        assert_eq!(a.test, b.test);
    }

    #[test]
    fn test_r_squared_perfect_fit() {
        let y = vec![1.0, 2.0, 3.0];
        assert_relative_eq!(r_squared(&y, |i| y[i]), 1.0);
    }

    #[test]
    fn test_r_squared_mean_predictor_is_zero() {
        let y = vec![1.0, 2.0, 3.0];
        assert_relative_eq!(r_squared(&y, |_| 2.0), 0.0);
    }

    #[test]
    fn test_training_learns_smoker_effect() {
        let rows = generate_dataset(400, 42);
        let bundle = train(&rows, &quick_config()).expect("training failed");

        // Scores should reflect a real fit on this strongly-structured data
        assert!(bundle.train_score > 0.7, "train R² {}", bundle.train_score);
        assert!(bundle.test_score > 0.5, "test R² {}", bundle.test_score);

        let non_smoker = Observation::new(30, "male", 25.0, 0, "no", "northeast");
        let smoker = Observation::new(30, "male", 25.0, 0, "yes", "northeast");

        let base = bundle.predict(&non_smoker).unwrap();
        let smoked = bundle.predict(&smoker).unwrap();
        assert!(
            smoked > base,
            "smoker prediction {smoked} should exceed non-smoker {base}"
        );
    }

    #[test]
    fn test_training_is_reproducible() {
        let rows = generate_dataset(150, 42);
        let config = quick_config();

        let a = train(&rows, &config).unwrap();
        let b = train(&rows, &config).unwrap();

        assert_eq!(a.model_kind(), b.model_kind());
        assert_eq!(a.train_score.to_bits(), b.train_score.to_bits());
        assert_eq!(a.test_score.to_bits(), b.test_score.to_bits());

        let obs = Observation::new(45, "female", 31.5, 2, "no", "southeast");
        assert_eq!(
            a.predict(&obs).unwrap().to_bits(),
            b.predict(&obs).unwrap().to_bits()
        );
    }

    #[test]
    fn test_disabled_boosted_degrades_to_bagged() {
        let rows = generate_dataset(150, 42);
        let config = TrainConfig {
            enable_boosted: false,
            ..quick_config()
        };

        let bundle = train(&rows, &config).unwrap();
        assert_eq!(bundle.model_kind(), ModelKind::BaggedTrees);
        assert!(bundle.candidate_scores.boosted.is_none());
    }

    #[test]
    fn test_unavailable_boosted_degrades_to_bagged() {
        let rows = generate_dataset(150, 42);
        let config = TrainConfig {
            boost: BoostConfig {
                n_trees: 0,
                ..BoostConfig::default()
            },
            ..quick_config()
        };

        let bundle = train(&rows, &config).unwrap();
        assert_eq!(bundle.model_kind(), ModelKind::BaggedTrees);
        assert!(bundle.candidate_scores.boosted.is_none());
    }

    #[test]
    fn test_selection_records_both_scores() {
        let rows = generate_dataset(200, 42);
        let bundle = train(&rows, &quick_config()).unwrap();

        let scores = bundle.candidate_scores;
        let boosted = scores.boosted.expect("boosted candidate was trained");

        // The selection rule must agree with the recorded scores
        match bundle.model_kind() {
            ModelKind::BoostedTrees => assert!(boosted > scores.bagged),
            ModelKind::BaggedTrees => assert!(boosted <= scores.bagged),
        }
        assert_eq!(
            bundle.test_score,
            if boosted > scores.bagged { boosted } else { scores.bagged }
        );
    }
}
