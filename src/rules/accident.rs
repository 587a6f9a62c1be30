//! Accident/injury cost estimation
//!
//! A fixed base cost per accident type, scaled by an ordinal severity
//! multiplier, plus flat and per-day adjustments for hospitalization,
//! surgery, and recovery. The scalar estimate is defined as the sum of the
//! breakdown's line items (one code path), so the breakdown reproduces the
//! estimate exactly rather than approximately.

use crate::money::round_cents;
use serde::{Deserialize, Serialize};

/// Flat admission fee when hospitalized
const HOSPITAL_ADMISSION_FEE: f64 = 5000.0;

/// Per-day hospital care cost while recovering
const DAILY_HOSPITAL_RATE: f64 = 1500.0;

/// Flat surgery fee
const SURGERY_FEE: f64 = 25000.0;

/// Per-day medication and ongoing-care cost, applied unconditionally
const DAILY_RECOVERY_RATE: f64 = 100.0;

/// Category of accident, keyed to a fixed base treatment cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccidentType {
    CarAccident,
    Fall,
    SportsInjury,
    WorkplaceInjury,
    Other,
}

impl AccidentType {
    /// Base treatment cost before severity scaling
    pub fn base_cost(&self) -> f64 {
        match self {
            AccidentType::CarAccident => 15000.0,
            AccidentType::Fall => 8000.0,
            AccidentType::SportsInjury => 10000.0,
            AccidentType::WorkplaceInjury => 12000.0,
            AccidentType::Other => 7000.0,
        }
    }

    /// Parse a free-text accident type; unknown strings fall back to `Other`
    /// (whose base is the default cost)
    pub fn parse(value: &str) -> Self {
        match value {
            "car accident" => AccidentType::CarAccident,
            "fall" => AccidentType::Fall,
            "sports injury" => AccidentType::SportsInjury,
            "workplace injury" => AccidentType::WorkplaceInjury,
            _ => AccidentType::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccidentType::CarAccident => "car accident",
            AccidentType::Fall => "fall",
            AccidentType::SportsInjury => "sports injury",
            AccidentType::WorkplaceInjury => "workplace injury",
            AccidentType::Other => "other",
        }
    }
}

/// Injury severity; multipliers are strictly increasing along the ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Minor,
    Moderate,
    Severe,
    Critical,
}

impl Severity {
    /// Multiplier applied to the accident type's base cost
    pub fn multiplier(&self) -> f64 {
        match self {
            Severity::Minor => 0.5,
            Severity::Moderate => 1.0,
            Severity::Severe => 2.0,
            Severity::Critical => 3.5,
        }
    }

    /// Parse a free-text severity; unknown strings fall back to `Moderate`
    /// (multiplier 1.0)
    pub fn parse(value: &str) -> Self {
        match value {
            "minor" => Severity::Minor,
            "moderate" => Severity::Moderate,
            "severe" => Severity::Severe,
            "critical" => Severity::Critical,
            _ => Severity::Moderate,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Minor => "minor",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
            Severity::Critical => "critical",
        }
    }
}

/// One accident/injury event to estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccidentClaim {
    pub accident_type: AccidentType,
    pub severity: Severity,
    pub hospitalized: bool,
    pub surgery: bool,

    /// Recovery period in days, documented range [1, 365]
    pub recovery_days: u32,
}

impl AccidentClaim {
    /// Itemized cost decomposition, in a fixed line-item order
    pub fn breakdown(&self) -> CostBreakdown {
        let mut items = vec![LineItem {
            label: "Base Treatment Cost",
            amount: round_cents(self.accident_type.base_cost() * self.severity.multiplier()),
        }];

        if self.hospitalized {
            items.push(LineItem {
                label: "Hospitalization",
                amount: round_cents(HOSPITAL_ADMISSION_FEE),
            });
            items.push(LineItem {
                label: "Daily Hospital Care",
                amount: round_cents(self.recovery_days as f64 * DAILY_HOSPITAL_RATE),
            });
        }

        if self.surgery {
            items.push(LineItem {
                label: "Surgery",
                amount: round_cents(SURGERY_FEE),
            });
        }

        items.push(LineItem {
            label: "Recovery & Medication",
            amount: round_cents(self.recovery_days as f64 * DAILY_RECOVERY_RATE),
        });

        CostBreakdown { items }
    }

    /// Scalar estimate: exactly the sum of the breakdown's line items
    pub fn estimate(&self) -> f64 {
        self.breakdown().total()
    }
}

/// One labeled component of an accident estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineItem {
    pub label: &'static str,
    pub amount: f64,
}

/// Ordered decomposition of an accident estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    items: Vec<LineItem>,
}

impl CostBreakdown {
    /// Line items in presentation order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Sum of all line items
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.amount).sum()
    }
}
