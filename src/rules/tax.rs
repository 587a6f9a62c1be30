//! Health-insurance tax deduction calculator
//!
//! Section 80D-style caps: each premium category is capped at the base
//! ceiling, or the senior ceiling when the covered person is 60 or older,
//! and the combined total is capped overall. The preventive-checkup
//! deduction is informational only: checkup spend is already absorbed into
//! the self/parents ceilings, so it is deliberately not added to the total.

use crate::money::round_cents;
use serde::{Deserialize, Serialize};

/// Per-category cap for non-seniors
const BASE_CAP: f64 = 25000.0;

/// Per-category cap when the senior flag is set
const SENIOR_CAP: f64 = 50000.0;

/// Cap on the informational preventive-checkup deduction
const CHECKUP_CAP: f64 = 5000.0;

/// Ceiling on the combined self + parents deduction
const OVERALL_CAP: f64 = 100000.0;

/// Premiums and checkup spend for one assessment year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxInput {
    /// Premium paid for self and family
    pub self_premium: f64,

    /// Whether the policyholder is a senior citizen (60+)
    pub self_is_senior: bool,

    /// Premium paid for parents' coverage
    pub parents_premium: f64,

    /// Whether the covered parents are senior citizens
    pub parents_is_senior: bool,

    /// Preventive health checkup spend
    pub checkup_cost: f64,
}

/// Deductions allowed for one assessment year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxDeductions {
    pub self_deduction: f64,
    pub parents_deduction: f64,

    /// Informational only; already absorbed into the category ceilings
    pub checkup_deduction: f64,

    /// min(self + parents, overall cap)
    pub total_deduction: f64,
}

impl TaxDeductions {
    /// Tax saved at a marginal slab rate (e.g. 0.30, 0.20, 0.10)
    pub fn savings_at(&self, slab_rate: f64) -> f64 {
        round_cents(self.total_deduction * slab_rate)
    }
}

/// Apply the category and overall caps to the year's premiums
///
/// Total over all non-negative inputs; never raises.
pub fn calculate_deductions(input: &TaxInput) -> TaxDeductions {
    let self_cap = if input.self_is_senior { SENIOR_CAP } else { BASE_CAP };
    let parents_cap = if input.parents_is_senior { SENIOR_CAP } else { BASE_CAP };

    let self_deduction = input.self_premium.min(self_cap);
    let parents_deduction = input.parents_premium.min(parents_cap);
    let checkup_deduction = input.checkup_cost.min(CHECKUP_CAP);
    let total_deduction = (self_deduction + parents_deduction).min(OVERALL_CAP);

    TaxDeductions {
        self_deduction: round_cents(self_deduction),
        parents_deduction: round_cents(parents_deduction),
        checkup_deduction: round_cents(checkup_deduction),
        total_deduction: round_cents(total_deduction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_base_cap_binds() {
        let result = calculate_deductions(&TaxInput {
            self_premium: 30000.0,
            self_is_senior: false,
            parents_premium: 0.0,
            parents_is_senior: false,
            checkup_cost: 0.0,
        });

        assert_relative_eq!(result.self_deduction, 25000.0);
        assert_relative_eq!(result.total_deduction, 25000.0);
    }

    #[test]
    fn test_senior_cap_is_higher()  {
        let result = calculate_deductions(&TaxInput {
            self_premium: 45000.0,
            self_is_senior: true,
            parents_premium: 60000.0,
            parents_is_senior: true,
            checkup_cost: 0.0,
        });

        assert_relative_eq!(result.self_deduction, 45000.0);
        assert_relative_eq!(result.parents_deduction, 50000.0);
        assert_relative_eq!(result.total_deduction, 95000.0);
    }

    #[test]
    fn test_overall_cap() {
        let result = calculate_deductions(&TaxInput {
            self_premium: 80000.0,
            self_is_senior: true,
            parents_premium: 80000.0,
            parents_is_senior: true,
            checkup_cost: 0.0,
        });

        assert_relative_eq!(result.self_deduction, 50000.0);
        assert_relative_eq!(result.parents_deduction, 50000.0);
        assert_relative_eq!(result.total_deduction, 100000.0);
    }

    #[test]
    fn test_checkup_is_informational_only() {
        let with_checkup = calculate_deductions(&TaxInput {
            self_premium: 10000.0,
            self_is_senior: false,
            parents_premium: 0.0,
            parents_is_senior: false,
            checkup_cost: 8000.0,
        });

        assert_relative_eq!(with_checkup.checkup_deduction, 5000.0);
        // The checkup never feeds the total
        assert_relative_eq!(with_checkup.total_deduction, 10000.0);
    }

    #[test]
    fn test_total_invariants() {
        let inputs = [
            (0.0, false, 0.0, false, 0.0),
            (25000.0, false, 25000.0, false, 5000.0),
            (100000.0, true, 100000.0, true, 5000.0),
            (12345.67, false, 7654.32, true, 1234.5),
        ];

        for (sp, ss, pp, ps, cc) in inputs {
            let result = calculate_deductions(&TaxInput {
                self_premium: sp,
                self_is_senior: ss,
                parents_premium: pp,
                parents_is_senior: ps,
                checkup_cost: cc,
            });
            assert!(result.total_deduction <= 100000.0);
            assert!(
                result.total_deduction
                    <= result.self_deduction + result.parents_deduction + 1e-9
            );
        }
    }

    #[test]
    fn test_slab_savings() {
        let result = calculate_deductions(&TaxInput {
            self_premium: 30000.0,
            self_is_senior: false,
            parents_premium: 0.0,
            parents_is_senior: false,
            checkup_cost: 0.0,
        });

        assert_relative_eq!(result.savings_at(0.30), 7500.0);
        assert_relative_eq!(result.savings_at(0.20), 5000.0);
        assert_relative_eq!(result.savings_at(0.10), 2500.0);
    }
}
