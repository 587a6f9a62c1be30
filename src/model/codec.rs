//! Categorical codec
//!
//! Bidirectional mapping between the categorical string values the caller
//! supplies (sex, smoker, region) and the integer codes the regressors
//! consume. Fit once on the full dataset, immutable thereafter; encoding a
//! value absent at fit time is a hard error, never a silent default.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Injective mapping from a column's distinct string values to codes 0..k-1
///
/// Class order is lexical, fixed at fit time for the lifetime of the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCodec {
    /// Column this codec was fit on; reported in encoding errors
    column: String,

    /// Distinct values, lexically sorted; a value's code is its index
    classes: Vec<String>,
}

impl CategoryCodec {
    /// Fit a codec on every value a column will ever need to encode
    pub fn fit<'a, I>(column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let distinct: BTreeSet<&str> = values.into_iter().collect();
        Self {
            column: column.to_string(),
            classes: distinct.into_iter().map(String::from).collect(),
        }
    }

    /// Encode a value to its integer code
    pub fn encode(&self, value: &str) -> Result<usize, EngineError> {
        self.classes
            .iter()
            .position(|class| class == value)
            .ok_or_else(|| EngineError::UnknownCategory {
                field: self.column.clone(),
                value: value.to_string(),
            })
    }

    /// Inverse lookup: the value for a code, if the code is in range
    pub fn decode(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(String::as_str)
    }

    /// Number of distinct classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the codec holds no classes (fit on an empty column)
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// The three codecs a trained model carries, one per categorical column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCodecs {
    pub sex: CategoryCodec,
    pub smoker: CategoryCodec,
    pub region: CategoryCodec,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexical_order() {
        let codec = CategoryCodec::fit("region", ["southwest", "northeast", "southeast", "northwest"]);
        assert_eq!(codec.len(), 4);
        assert_eq!(codec.encode("northeast").unwrap(), 0);
        assert_eq!(codec.encode("northwest").unwrap(), 1);
        assert_eq!(codec.encode("southeast").unwrap(), 2);
        assert_eq!(codec.encode("southwest").unwrap(), 3);
    }

    #[test]
    fn test_duplicates_collapse() {
        let codec = CategoryCodec::fit("smoker", ["yes", "no", "yes", "no", "no"]);
        assert_eq!(codec.len(), 2);
        assert_eq!(codec.encode("no").unwrap(), 0);
        assert_eq!(codec.encode("yes").unwrap(), 1);
    }

    #[test]
    fn test_decode_is_inverse() {
        let codec = CategoryCodec::fit("sex", ["male", "female"]);
        for value in ["male", "female"] {
            let code = codec.encode(value).unwrap();
            assert_eq!(codec.decode(code), Some(value));
        }
        assert_eq!(codec.decode(2), None);
    }

    #[test]
    fn test_unknown_value_is_error() {
        let codec = CategoryCodec::fit("sex", ["male", "female"]);
        let err = codec.encode("other").unwrap_err();
        match err {
            EngineError::UnknownCategory { field, value } => {
                assert_eq!(field, "sex");
                assert_eq!(value, "other");
            }
            other => panic!("expected UnknownCategory, got {other:?}"),
        }
    }
}
