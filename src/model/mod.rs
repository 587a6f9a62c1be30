//! Cost predictor: codecs, candidate ensembles, training, and persistence

mod boost;
mod bundle;
mod codec;
mod forest;
mod tree;
pub mod store;
mod trainer;

pub use boost::{BoostConfig, BoostModel};
pub use bundle::{CandidateScores, ModelBundle, ModelKind, SelectedModel, FEATURE_NAMES};
pub use codec::{CategoryCodec, CategoryCodecs};
pub use forest::{ForestConfig, ForestModel};
pub use store::{load_bundle, load_or_train, save_bundle, DEFAULT_MODEL_PATH};
pub use trainer::{train, TrainConfig};
pub use tree::{RegressionTree, TreeConfig};
