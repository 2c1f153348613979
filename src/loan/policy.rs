//! Lender repayment policy tables
//!
//! Each lender has an ordered list of rules. Rules are evaluated top to
//! bottom and the first one whose predicate holds decides the repayment
//! percentage. JPA GPA tiers are closed ranges on the GPA rounded to two
//! decimals; MARA tiers are half-open `[a, b)` on the GPA as entered, apart
//! from the top tier.

use super::input::{Lender, LoanInput, StudyLevel, StudyStatus};
use crate::error::{FinwizError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inputs a policy rule may look at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierFacts {
    pub level: StudyLevel,
    pub status: StudyStatus,
    /// GPA as entered
    pub gpa: f64,
    /// GPA rounded to two decimals, for tables with closed `x.x0-x.x9` tiers
    pub gpa_rounded: f64,
    pub exemption: bool,
}

impl TierFacts {
    /// Normalize form input for rule evaluation.
    ///
    /// Non-finite GPA is treated as 0. GPA that does not round into
    /// 0.00-4.00 is rejected.
    pub fn from_input(input: &LoanInput) -> Result<Self> {
        let gpa = if input.gpa.is_finite() {
            input.gpa
        } else {
            log::warn!("Treating non-numeric GPA as 0");
            0.0
        };
        let gpa_rounded = (gpa * 100.0).round() / 100.0;

        if !(0.0..=4.0).contains(&gpa_rounded) {
            return Err(FinwizError::GpaOutOfRange(input.gpa));
        }

        Ok(Self {
            level: input.level,
            status: input.status,
            gpa,
            gpa_rounded,
            exemption: input.exemption,
        })
    }

    fn gpa_between(&self, low: f64, high: f64) -> bool {
        self.gpa_rounded >= low && self.gpa_rounded <= high
    }

    fn gpa_from_below(&self, low: f64, high: f64) -> bool {
        self.gpa >= low && self.gpa < high
    }
}

/// One row of a lender's policy table
#[derive(Clone, Copy)]
pub struct PolicyRule {
    /// Short identifier for logs and tests
    pub name: &'static str,
    pub percent: u8,
    pub explanation: &'static str,
    pub applies: fn(&TierFacts) -> bool,
}

impl fmt::Debug for PolicyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicyRule")
            .field("name", &self.name)
            .field("percent", &self.percent)
            .finish()
    }
}

/// Repayment obligation for one scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepaymentResult {
    /// Share of the loan to repay, 0-100
    pub percent: u8,
    pub explanation: String,
}

impl From<&PolicyRule> for RepaymentResult {
    fn from(rule: &PolicyRule) -> Self {
        Self {
            percent: rule.percent,
            explanation: rule.explanation.to_string(),
        }
    }
}

/// Applied when no rule of the lender's table matches
pub static FALLBACK_RULE: PolicyRule = PolicyRule {
    name: "no_matching_tier",
    percent: 100,
    explanation: "No matching tier: 100% repayment required.",
    applies: always,
};

const JPA_RULES: &[PolicyRule] = &[
    PolicyRule {
        name: "jpa_failed_or_withdrawn",
        percent: 100,
        explanation: "Failed/Withdrawn: 100% repayment required.",
        applies: failed_or_withdrawn,
    },
    PolicyRule {
        name: "jpa_medicine_pass",
        percent: 25,
        explanation: "Medicine (Pass): 25% repayment required.",
        applies: medicine_pass,
    },
    PolicyRule {
        name: "jpa_extended_or_cgpa_2_00",
        percent: 50,
        explanation: "CGPA 2.00–2.49 or Extended Study: 50% repayment required.",
        applies: jpa_extended_or_low,
    },
    PolicyRule {
        name: "jpa_cgpa_2_50",
        percent: 25,
        explanation: "CGPA 2.50–2.99: 25% repayment required.",
        applies: |f| f.gpa_between(2.50, 2.99),
    },
    PolicyRule {
        name: "jpa_cgpa_3_00",
        percent: 20,
        explanation: "CGPA 3.00–3.49: 20% repayment required.",
        applies: |f| f.gpa_between(3.00, 3.49),
    },
    PolicyRule {
        name: "jpa_cgpa_3_50",
        percent: 15,
        explanation: "CGPA 3.50–4.00: 15% repayment required.",
        applies: |f| f.gpa_between(3.50, 4.00),
    },
];

const MARA_RULES: &[PolicyRule] = &[
    PolicyRule {
        name: "mara_exempt",
        percent: 0,
        explanation: "CGPA ≥ 3.50 with exemption: 0% repayment required.",
        applies: |f| f.gpa >= 3.50 && f.exemption,
    },
    PolicyRule {
        name: "mara_cgpa_3_00",
        percent: 10,
        explanation: "CGPA 3.00–3.49: 10% repayment required.",
        applies: |f| f.gpa_from_below(3.00, 3.50),
    },
    PolicyRule {
        name: "mara_cgpa_2_75",
        percent: 25,
        explanation: "CGPA 2.75–2.99: 25% repayment required.",
        applies: |f| f.gpa_from_below(2.75, 3.00),
    },
    PolicyRule {
        name: "mara_cgpa_2_50",
        percent: 50,
        explanation: "CGPA 2.50–2.74: 50% repayment required.",
        applies: |f| f.gpa_from_below(2.50, 2.75),
    },
    PolicyRule {
        name: "mara_cgpa_2_00",
        percent: 75,
        explanation: "CGPA 2.00–2.49: 75% repayment required.",
        applies: |f| f.gpa_from_below(2.00, 2.50),
    },
    PolicyRule {
        name: "mara_below_2_00_or_failed",
        percent: 100,
        explanation: "Below 2.00 / Fail: 100% repayment required.",
        applies: |f| f.gpa < 2.00 || f.status == StudyStatus::Failed,
    },
];

const PTPTN_RULES: &[PolicyRule] = &[
    PolicyRule {
        name: "ptptn_exempt",
        percent: 0,
        explanation: "First-Class Honors with exemption: 0% repayment required.",
        applies: |f| f.exemption,
    },
    PolicyRule {
        name: "ptptn_no_exemption",
        percent: 100,
        explanation: "No exemption: 100% repayment required.",
        applies: always,
    },
];

fn always(_: &TierFacts) -> bool {
    true
}

fn failed_or_withdrawn(f: &TierFacts) -> bool {
    matches!(f.status, StudyStatus::Failed | StudyStatus::Withdrawn)
}

fn medicine_pass(f: &TierFacts) -> bool {
    f.level == StudyLevel::Medicine && f.status == StudyStatus::Completed
}

fn jpa_extended_or_low(f: &TierFacts) -> bool {
    f.status == StudyStatus::Extended || f.gpa_between(2.00, 2.49)
}

/// Ordered policy table for a lender
pub fn rules_for(lender: Lender) -> &'static [PolicyRule] {
    match lender {
        Lender::Jpa => JPA_RULES,
        Lender::Mara => MARA_RULES,
        Lender::Ptptn => PTPTN_RULES,
    }
}

/// Names of every rule whose predicate holds, in table order.
///
/// Only the first one decides the result; the rest are for auditing.
pub fn matching_rules(lender: Lender, facts: &TierFacts) -> Vec<&'static str> {
    rules_for(lender)
        .iter()
        .filter(|rule| (rule.applies)(facts))
        .map(|rule| rule.name)
        .collect()
}

/// Look up the repayment percentage for a scenario
pub fn compute_repayment_percent(input: &LoanInput) -> Result<RepaymentResult> {
    let facts = TierFacts::from_input(input)?;

    let rule = rules_for(input.lender)
        .iter()
        .find(|rule| (rule.applies)(&facts))
        .unwrap_or_else(|| {
            log::info!(
                "No {} tier matches status={} gpa={:.2}; using fallback",
                input.lender,
                input.status.as_str(),
                facts.gpa,
            );
            &FALLBACK_RULE
        });

    log::debug!("{} scenario matched rule {}", input.lender, rule.name);
    Ok(RepaymentResult::from(rule))
}
