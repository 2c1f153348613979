//! Student loan repayment: lender policy tiers and amortization

mod input;
mod policy;
mod amortization;
mod calculator;
pub mod loader;

pub use input::{parse_number, Lender, LoanInput, LoanTerms, StudyLevel, StudyStatus};
pub use policy::{compute_repayment_percent, matching_rules, rules_for, PolicyRule, RepaymentResult, TierFacts, FALLBACK_RULE};
pub use amortization::{
    add_months_rolling, amortization_schedule, compute_amortization, round2, AmortizationResult, ScheduleRow,
    MAX_TERM_MONTHS,
};
pub use calculator::{LoanCalculator, LoanReport};
pub use loader::{load_scenarios, load_scenarios_from_reader};
