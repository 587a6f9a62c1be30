//! Risk categorization from predicted cost

use serde::{Deserialize, Serialize};

/// Risk tier implied by a predicted annual cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Predicted cost below 5,000
    Low,
    /// Predicted cost in [5,000, 15,000)
    Medium,
    /// Predicted cost of 15,000 or more
    High,
}

impl RiskLevel {
    /// Categorize a predicted cost
    pub fn from_cost(cost: f64) -> Self {
        if cost < 5000.0 {
            RiskLevel::Low
        } else if cost < 15000.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}
