//! Fixed-rate amortized loan repayment

use super::input::LoanTerms;
use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Monthly payment summary for a loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationResult {
    pub monthly_repayment: f64,
    pub total_interest: f64,

    /// "YYYY-MM-DD", empty when the loan terms are degenerate
    pub payoff_date: String,

    /// Monthly repayment as a percentage of monthly income
    #[serde(rename = "affordability")]
    pub affordability_ratio: Option<f64>,
}

impl AmortizationResult {
    /// Result for terms the formula cannot price
    pub fn zero() -> Self {
        Self {
            monthly_repayment: 0.0,
            total_interest: 0.0,
            payoff_date: String::new(),
            affordability_ratio: None,
        }
    }
}

/// One month of the repayment schedule, full precision
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// 1-indexed repayment month
    pub month: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    /// Outstanding balance after this payment
    pub balance: f64,
}

/// Longest term priced, in months (100 years)
pub const MAX_TERM_MONTHS: i32 = 1200;

/// Round a monetary value to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Loan terms the annuity formula can price
#[derive(Debug, Clone, Copy)]
struct Periodic {
    principal: f64,
    rate: f64,
    months: u32,
    /// Unrounded level payment
    payment: f64,
}

/// Monthly periodic rate, term and level payment, or None when the formula
/// does not apply.
///
/// A zero rate divides by zero in the annuity formula, so it is treated the
/// same as a zero principal or term. Terms past `MAX_TERM_MONTHS`, and rates
/// too small or too large for `(1+r)^n` in f64, are not priced either.
fn periodic_terms(terms: &LoanTerms) -> Option<Periodic> {
    let principal = terms.loan_amount;
    let rate = terms.interest_rate / 100.0 / 12.0;
    let n = terms.loan_term_months;

    if !(principal.is_finite() && rate.is_finite() && principal > 0.0 && rate > 0.0 && n > 0) {
        return None;
    }
    if n > MAX_TERM_MONTHS {
        log::warn!("Loan term of {} months exceeds {} months", n, MAX_TERM_MONTHS);
        return None;
    }

    let payment = level_payment(principal, rate, n);
    if !payment.is_finite() {
        log::warn!("Level payment is not representable for rate {} over {} months", rate, n);
        return None;
    }

    Some(Periodic {
        principal,
        rate,
        months: n as u32,
        payment,
    })
}

/// Unrounded level payment: P * r * (1+r)^n / ((1+r)^n - 1)
fn level_payment(principal: f64, rate: f64, n: i32) -> f64 {
    let growth = (1.0 + rate).powi(n);
    principal * rate * growth / (growth - 1.0)
}

/// Calendar date `months` months after `date`.
///
/// A day past the end of the target month rolls into the following month
/// (2024-01-31 + 1 month = 2024-03-02) rather than clamping.
pub fn add_months_rolling(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.with_day(1)?
        .checked_add_months(Months::new(months))?
        .checked_add_days(Days::new(u64::from(date.day0())))
}

/// Price a loan: level monthly payment, total interest, payoff date and
/// affordability. Monetary outputs are rounded to cents here and nowhere
/// earlier.
pub fn compute_amortization(terms: &LoanTerms, reference_date: NaiveDate) -> AmortizationResult {
    let Some(Periodic {
        principal,
        months,
        payment: monthly_repayment,
        ..
    }) = periodic_terms(terms)
    else {
        log::debug!("Degenerate loan terms {:?}; returning zero result", terms);
        return AmortizationResult::zero();
    };

    let total_interest = monthly_repayment * months as f64 - principal;

    let payoff_date = match add_months_rolling(reference_date, months) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => {
            log::warn!("Payoff date out of range for a {}-month term", months);
            String::new()
        }
    };

    let affordability_ratio = terms
        .monthly_income
        .filter(|income| income.is_finite() && *income > 0.0)
        .map(|income| round2(monthly_repayment / income * 100.0));

    AmortizationResult {
        monthly_repayment: round2(monthly_repayment),
        total_interest: round2(total_interest),
        payoff_date,
        affordability_ratio,
    }
}

/// Month-by-month split of each payment into interest and principal.
///
/// The final row pays off whatever balance is left so the schedule always
/// ends at zero. Degenerate terms give an empty schedule.
pub fn amortization_schedule(terms: &LoanTerms) -> Vec<ScheduleRow> {
    let Some(Periodic {
        principal,
        rate,
        months: n,
        payment,
    }) = periodic_terms(terms)
    else {
        return Vec::new();
    };

    let mut balance = principal;
    let mut rows = Vec::with_capacity(n as usize);

    for month in 1..=n {
        let interest = balance * rate;
        let (payment, principal_paid) = if month == n {
            (balance + interest, balance)
        } else {
            (payment, payment - interest)
        };
        balance -= principal_paid;

        rows.push(ScheduleRow {
            month,
            payment,
            interest,
            principal: principal_paid,
            balance: if month == n { 0.0 } else { balance },
        });
    }

    rows
}
