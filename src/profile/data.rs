//! Profile data structures matching the historical cost dataset format

use serde::{Deserialize, Serialize};

/// One individual's demographic and health attributes
///
/// Categorical fields are carried as free strings: the vocabulary is fixed by
/// the codecs at training time, and an out-of-vocabulary value must surface
/// as an `UnknownCategory` error at encode time rather than being coerced
/// into a known class.
///
/// Documented bounds (not enforced by this layer; predictions outside them
/// are extrapolations): age 18-64, bmi 15-50, children 0-5, sex in
/// {male, female}, smoker in {yes, no}, region in {northeast, northwest,
/// southeast, southwest}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Age in years
    pub age: u32,

    /// Sex ("male" or "female")
    pub sex: String,

    /// Body mass index
    pub bmi: f64,

    /// Number of dependent children
    pub children: u32,

    /// Smoking status ("yes" or "no")
    pub smoker: String,

    /// Residential region
    pub region: String,
}

impl Observation {
    /// Create an observation from its six predictor fields
    pub fn new(
        age: u32,
        sex: impl Into<String>,
        bmi: f64,
        children: u32,
        smoker: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            age,
            sex: sex.into(),
            bmi,
            children,
            smoker: smoker.into(),
            region: region.into(),
        }
    }

    /// Whether the individual is a smoker
    pub fn is_smoker(&self) -> bool {
        self.smoker == "yes"
    }
}

/// One historical row: an observation plus its observed annual charges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    pub observation: Observation,

    /// Observed annual medical charges (the regression target)
    pub charges: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoker_flag() {
        let obs = Observation::new(30, "male", 25.0, 0, "yes", "northeast");
        assert!(obs.is_smoker());

        let obs = Observation::new(30, "male", 25.0, 0, "no", "northeast");
        assert!(!obs.is_smoker());
    }
}
