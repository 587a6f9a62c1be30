//! Government vs. private coverage comparison
//!
//! Government schemes cover a fixed share of the predicted cost up to an
//! absolute ceiling; private figures scale linearly without one. At high
//! costs the government coverage percentage therefore shrinks toward zero —
//! a faithfully-reproduced domain rule, not a defect.

use crate::money::round_cents;
use serde::{Deserialize, Serialize};

/// Share of the predicted cost a government scheme covers
const GOVT_COVERAGE_RATE: f64 = 0.6;

/// Absolute ceiling on government coverage
pub const GOVT_COVERAGE_CAP: f64 = 5000.0;

/// Private base plan as a share of predicted cost
const PRIVATE_BASE_RATE: f64 = 0.85;

/// Private premium plan as a share of predicted cost
const PRIVATE_PREMIUM_RATE: f64 = 1.10;

/// Side-by-side coverage figures for one predicted cost
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageComparison {
    /// Government coverage: min(60% of cost, cap)
    pub govt_coverage: f64,

    /// Remainder the individual pays under the government scheme
    pub govt_out_of_pocket: f64,

    /// Private base plan estimate (85% of cost)
    pub private_base: f64,

    /// Private premium plan estimate (110% of cost)
    pub private_premium: f64,
}

/// Compare government and private coverage for a predicted cost
///
/// Total over all non-negative costs; all outputs rounded to cents.
pub fn compare_coverage(predicted_cost: f64) -> CoverageComparison {
    let govt_coverage = (predicted_cost * GOVT_COVERAGE_RATE).min(GOVT_COVERAGE_CAP);

    CoverageComparison {
        govt_coverage: round_cents(govt_coverage),
        govt_out_of_pocket: round_cents(predicted_cost - govt_coverage),
        private_base: round_cents(predicted_cost * PRIVATE_BASE_RATE),
        private_premium: round_cents(predicted_cost * PRIVATE_PREMIUM_RATE),
    }
}
