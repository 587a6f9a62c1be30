//! Insurance Estimator - Medical insurance cost estimation engine
//!
//! This library provides:
//! - A tree-ensemble cost predictor (bagged vs. boosted candidates, selected
//!   by held-out R²) served as a pure, deterministic function
//! - Categorical codecs fixing the model's vocabulary at training time
//! - Atomic persistence of the trained model bundle
//! - Pure rule engines: coverage comparison, accident/injury estimation,
//!   tax deductions, and scheme eligibility ranking

pub mod error;
pub mod model;
pub mod money;
pub mod profile;
pub mod rng;
pub mod rules;

// Re-export commonly used types
pub use error::EngineError;
pub use model::{train, ModelBundle, ModelKind, TrainConfig};
pub use profile::{DatasetRow, Observation};
pub use rules::{
    calculate_deductions, compare_coverage, match_schemes, AccidentClaim, CoverageComparison,
    RiskLevel, SchemeRecommendation, TaxDeductions, TaxInput,
};
