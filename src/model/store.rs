//! Model bundle persistence
//!
//! The bundle serializes to a single JSON artifact. The byte layout is not a
//! contract; the save -> load -> identical-predictions round trip is. Saves
//! are atomic: the bundle is built fully in memory, written to a sibling
//! temp file, then renamed over the target, so a crashed training run can
//! never leave a partial artifact behind.

use super::bundle::ModelBundle;
use super::trainer::{train, TrainConfig};
use crate::error::EngineError;
use crate::profile::loader::load_dataset;
use log::info;
use std::fs;
use std::path::Path;

/// Default artifact location
pub const DEFAULT_MODEL_PATH: &str = "insurance_model.json";

/// Persist a bundle atomically
pub fn save_bundle<P: AsRef<Path>>(bundle: &ModelBundle, path: P) -> Result<(), EngineError> {
    let path = path.as_ref();
    let json = serde_json::to_vec(bundle)?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, &json)?;
    fs::rename(&tmp, path)?;

    info!("model bundle saved to {}", path.display());
    Ok(())
}

/// Load a previously persisted bundle
pub fn load_bundle<P: AsRef<Path>>(path: P) -> Result<ModelBundle, EngineError> {
    let bytes = fs::read(path.as_ref())?;
    let bundle = serde_json::from_slice(&bytes)?;
    info!("model bundle loaded from {}", path.as_ref().display());
    Ok(bundle)
}

/// Load the persisted bundle, or train one from the raw dataset
///
/// Resolution order: an existing artifact wins; otherwise the dataset is
/// loaded, a bundle is trained and persisted, and that bundle is returned;
/// if neither file exists the startup fails with `NoModelOrDataset`.
///
/// Training is a one-shot, single-writer operation: this process is the only
/// writer of the artifact, and concurrent readers of an already-persisted
/// bundle are safe.
pub fn load_or_train<P: AsRef<Path>, Q: AsRef<Path>>(
    model_path: P,
    dataset_path: Q,
    config: &TrainConfig,
) -> Result<ModelBundle, EngineError> {
    let model_path = model_path.as_ref();
    let dataset_path = dataset_path.as_ref();

    if model_path.exists() {
        return load_bundle(model_path);
    }

    if !dataset_path.exists() {
        return Err(EngineError::NoModelOrDataset {
            model_path: model_path.to_path_buf(),
            dataset_path: dataset_path.to_path_buf(),
        });
    }

    info!(
        "no artifact at {}; training from {}",
        model_path.display(),
        dataset_path.display()
    );
    let rows = load_dataset(dataset_path)?;
    let bundle = train(&rows, config)?;
    save_bundle(&bundle, model_path)?;
    Ok(bundle)
}
