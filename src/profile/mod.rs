//! Individual profiles and the historical cost dataset

mod data;
pub mod loader;
pub mod synthetic;

pub use data::{DatasetRow, Observation};
pub use loader::{load_dataset, load_dataset_from_reader};
