//! Loan calculator combining the policy lookup with amortization
//!
//! Mirrors what the calculator form shows after submission: the repayment
//! percentage and explanation next to the monthly payment figures.

use super::amortization::{amortization_schedule, compute_amortization, AmortizationResult, ScheduleRow};
use super::input::LoanInput;
use super::policy::{compute_repayment_percent, RepaymentResult};
use crate::error::Result;
use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Combined result for one loan scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanReport {
    #[serde(flatten)]
    pub repayment: RepaymentResult,

    #[serde(flatten)]
    pub amortization: AmortizationResult,
}

/// Loan calculator pinned to a reference date for payoff dates
///
/// # Example
/// ```ignore
/// let calculator = LoanCalculator::new(today);
/// let report = calculator.evaluate(&input)?;
/// println!("{}% - {}", report.repayment.percent, report.repayment.explanation);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LoanCalculator {
    reference_date: NaiveDate,
}

impl LoanCalculator {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Evaluate a single scenario
    pub fn evaluate(&self, input: &LoanInput) -> Result<LoanReport> {
        let repayment = compute_repayment_percent(input)?;
        let amortization = compute_amortization(&input.terms(), self.reference_date);

        Ok(LoanReport {
            repayment,
            amortization,
        })
    }

    /// Evaluate many scenarios in parallel, results in input order
    pub fn evaluate_batch(&self, inputs: &[LoanInput]) -> Vec<Result<LoanReport>> {
        inputs.par_iter().map(|input| self.evaluate(input)).collect()
    }

    /// Month-by-month repayment schedule for a scenario
    pub fn schedule(&self, input: &LoanInput) -> Vec<ScheduleRow> {
        amortization_schedule(&input.terms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinwizError;
    use crate::loan::{Lender, StudyLevel, StudyStatus};
    use approx::assert_relative_eq;

    fn calculator() -> LoanCalculator {
        LoanCalculator::new(NaiveDate::from_ymd_opt(2025, 10, 16).unwrap())
    }

    fn scenario(lender: Lender, gpa: f64, exemption: bool) -> LoanInput {
        LoanInput {
            lender,
            level: StudyLevel::Degree,
            gpa,
            status: StudyStatus::Completed,
            exemption,
            duration: Some(4),
            loan_amount: 20_000.0,
            interest_rate: 1.0,
            loan_term_months: 120,
            monthly_income: Some(2_500.0),
        }
    }

    #[test]
    fn test_evaluate_combines_both_results() {
        let report = calculator().evaluate(&scenario(Lender::Jpa, 3.2, false)).unwrap();

        assert_eq!(report.repayment.percent, 20);
        assert_eq!(report.repayment.explanation, "CGPA 3.00–3.49: 20% repayment required.");
        assert_relative_eq!(report.amortization.monthly_repayment, 175.21);
        assert_eq!(report.amortization.payoff_date, "2035-10-16");
    }

    #[test]
    fn test_report_serializes_flat() {
        let report = calculator().evaluate(&scenario(Lender::Ptptn, 3.9, true)).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["percent"], 0);
        assert_eq!(json["monthly_repayment"], 175.21);
        assert_eq!(json["affordability"], 7.01);
    }

    #[test]
    fn test_batch_keeps_order_and_errors() {
        let inputs = vec![
            scenario(Lender::Jpa, 3.6, false),
            scenario(Lender::Mara, 9.0, false),
            scenario(Lender::Mara, 2.8, false),
        ];

        let results = calculator().evaluate_batch(&inputs);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().repayment.percent, 15);
        assert!(matches!(results[1], Err(FinwizError::GpaOutOfRange(_))));
        assert_eq!(results[2].as_ref().unwrap().repayment.percent, 25);
    }

    #[test]
    fn test_schedule_length_matches_term() {
        let input = scenario(Lender::Jpa, 3.0, false);
        assert_eq!(calculator().schedule(&input).len(), 120);
    }
}
