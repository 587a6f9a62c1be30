//! Rule composition engines
//!
//! Four independent, pure engines over the predicted cost and raw
//! attributes: coverage comparison, accident/injury estimation, tax
//! deduction calculation, and scheme eligibility matching. None hold state;
//! all are idempotent and safe under arbitrary concurrent callers.

mod accident;
mod coverage;
mod risk;
mod schemes;
mod tax;

pub use accident::{AccidentClaim, AccidentType, CostBreakdown, LineItem, Severity};
pub use coverage::{compare_coverage, CoverageComparison, GOVT_COVERAGE_CAP};
pub use risk::RiskLevel;
pub use schemes::{match_schemes, Priority, SchemeRecommendation};
pub use tax::{calculate_deductions, TaxDeductions, TaxInput};
