//! Financial health check from monthly income, expenses and debt

use serde::{Deserialize, Serialize};

/// Savings rate below this percentage triggers the "save more" advice
pub const TARGET_SAVINGS_RATE_PCT: f64 = 20.0;

/// Debt-to-income ratio above this percentage is considered high
pub const MAX_HEALTHY_DTI_PCT: f64 = 36.0;

/// Months of income recommended as an emergency fund
pub const EMERGENCY_FUND_MONTHS: f64 = 3.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    /// (income - expenses) / income, percent, one decimal
    pub savings_rate_pct: f64,

    /// debt / income, percent, one decimal
    pub debt_to_income_pct: f64,

    pub recommended_emergency_fund: f64,

    pub advice: Vec<String>,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Assess monthly figures. Non-finite inputs count as zero; with no income
/// both ratios are reported as zero.
pub fn health_check(income: f64, expenses: f64, debt: f64) -> HealthReport {
    let clean = |v: f64| if v.is_finite() { v } else { 0.0 };
    let (income, expenses, debt) = (clean(income), clean(expenses), clean(debt));
    let has_income = income > 0.0;

    let savings_rate = if has_income { (income - expenses) / income * 100.0 } else { 0.0 };
    let dti = if has_income { debt / income * 100.0 } else { 0.0 };
    let emergency_fund = if has_income { income * EMERGENCY_FUND_MONTHS } else { 0.0 };

    let mut advice = Vec::with_capacity(3);
    if savings_rate < TARGET_SAVINGS_RATE_PCT {
        advice.push("Aim to save at least 20% of your income.".to_string());
    } else {
        advice.push("Great job on a healthy savings rate!".to_string());
    }
    if dti > MAX_HEALTHY_DTI_PCT {
        advice.push("Your debt-to-income ratio is high. Consider reducing debt.".to_string());
    } else {
        advice.push("Your debt-to-income ratio is within a healthy range.".to_string());
    }
    advice.push(format!(
        "Recommended emergency fund: RM {:.2} ({}).",
        emergency_fund,
        if has_income { "3 months" } else { "N/A" }
    ));

    HealthReport {
        savings_rate_pct: round1(savings_rate),
        debt_to_income_pct: round1(dti),
        recommended_emergency_fund: (emergency_fund * 100.0).round() / 100.0,
        advice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_healthy_finances() {
        let report = health_check(3000.0, 2000.0, 500.0);
        assert_relative_eq!(report.savings_rate_pct, 33.3);
        assert_relative_eq!(report.debt_to_income_pct, 16.7);
        assert_relative_eq!(report.recommended_emergency_fund, 9000.0);
        assert_eq!(
            report.advice,
            vec![
                "Great job on a healthy savings rate!",
                "Your debt-to-income ratio is within a healthy range.",
                "Recommended emergency fund: RM 9000.00 (3 months).",
            ]
        );
    }

    #[test]
    fn test_strained_finances() {
        let report = health_check(2000.0, 1900.0, 800.0);
        assert_relative_eq!(report.savings_rate_pct, 5.0);
        assert_relative_eq!(report.debt_to_income_pct, 40.0);
        assert_eq!(report.advice[0], "Aim to save at least 20% of your income.");
        assert_eq!(report.advice[1], "Your debt-to-income ratio is high. Consider reducing debt.");
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        // Exactly 20% saved is fine, exactly 36% DTI is still healthy
        let report = health_check(1000.0, 800.0, 360.0);
        assert_eq!(report.advice[0], "Great job on a healthy savings rate!");
        assert_eq!(report.advice[1], "Your debt-to-income ratio is within a healthy range.");
    }

    #[test]
    fn test_no_income() {
        let report = health_check(0.0, 500.0, 100.0);
        assert_eq!(report.savings_rate_pct, 0.0);
        assert_eq!(report.debt_to_income_pct, 0.0);
        assert_eq!(report.recommended_emergency_fund, 0.0);
        assert_eq!(report.advice[2], "Recommended emergency fund: RM 0.00 (N/A).");

        let nan = health_check(f64::NAN, 0.0, 0.0);
        assert_eq!(nan, health_check(0.0, 0.0, 0.0));
    }
}
