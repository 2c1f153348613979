//! Loan calculator form input

use crate::error::{FinwizError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Student loan provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lender {
    /// Public Service Department scholarship-loan
    #[serde(rename = "JPA")]
    Jpa,
    /// Majlis Amanah Rakyat education loan
    #[serde(rename = "MARA")]
    Mara,
    /// National Higher Education Fund
    #[serde(rename = "PTPTN")]
    Ptptn,
}

impl Lender {
    pub const ALL: [Lender; 3] = [Lender::Jpa, Lender::Mara, Lender::Ptptn];

    pub fn as_str(&self) -> &'static str {
        match self {
            Lender::Jpa => "JPA",
            Lender::Mara => "MARA",
            Lender::Ptptn => "PTPTN",
        }
    }
}

impl fmt::Display for Lender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lender {
    type Err = FinwizError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "JPA" => Ok(Lender::Jpa),
            "MARA" => Ok(Lender::Mara),
            "PTPTN" => Ok(Lender::Ptptn),
            _ => Err(FinwizError::UnknownLender(s.to_string())),
        }
    }
}

/// Level of study / course type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyLevel {
    Certificate,
    Diploma,
    Degree,
    Medicine,
}

impl StudyLevel {
    pub const ALL: [StudyLevel; 4] = [
        StudyLevel::Certificate,
        StudyLevel::Diploma,
        StudyLevel::Degree,
        StudyLevel::Medicine,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StudyLevel::Certificate => "certificate",
            StudyLevel::Diploma => "diploma",
            StudyLevel::Degree => "degree",
            StudyLevel::Medicine => "medicine",
        }
    }
}

impl FromStr for StudyLevel {
    type Err = FinwizError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "certificate" => Ok(StudyLevel::Certificate),
            "diploma" => Ok(StudyLevel::Diploma),
            "degree" => Ok(StudyLevel::Degree),
            "medicine" => Ok(StudyLevel::Medicine),
            _ => Err(FinwizError::UnknownStudyLevel(s.to_string())),
        }
    }
}

/// Outcome of the sponsored study
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyStatus {
    Completed,
    Failed,
    Extended,
    Withdrawn,
}

impl StudyStatus {
    pub const ALL: [StudyStatus; 4] = [
        StudyStatus::Completed,
        StudyStatus::Failed,
        StudyStatus::Extended,
        StudyStatus::Withdrawn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StudyStatus::Completed => "completed",
            StudyStatus::Failed => "failed",
            StudyStatus::Extended => "extended",
            StudyStatus::Withdrawn => "withdrawn",
        }
    }
}

impl FromStr for StudyStatus {
    type Err = FinwizError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "completed" => Ok(StudyStatus::Completed),
            "failed" => Ok(StudyStatus::Failed),
            "extended" => Ok(StudyStatus::Extended),
            "withdrawn" => Ok(StudyStatus::Withdrawn),
            _ => Err(FinwizError::UnknownStudyStatus(s.to_string())),
        }
    }
}

/// Everything submitted through the loan calculator form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    pub lender: Lender,
    pub level: StudyLevel,

    /// Cumulative GPA, 0.00-4.00
    pub gpa: f64,

    pub status: StudyStatus,

    /// Whether a repayment exemption was granted (MARA/PTPTN)
    pub exemption: bool,

    /// Study duration in years; recorded with the scenario, not used by any tier
    #[serde(default)]
    pub duration: Option<u32>,

    /// Principal in RM
    pub loan_amount: f64,

    /// Annual interest rate in percent (1.0 = 1%)
    pub interest_rate: f64,

    pub loan_term_months: i32,

    #[serde(default)]
    pub monthly_income: Option<f64>,
}

impl LoanInput {
    /// The amortization half of the form
    pub fn terms(&self) -> LoanTerms {
        LoanTerms {
            loan_amount: self.loan_amount,
            interest_rate: self.interest_rate,
            loan_term_months: self.loan_term_months,
            monthly_income: self.monthly_income,
        }
    }
}

/// Loan amount, rate and term used by the amortization formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub loan_amount: f64,
    /// Annual interest rate in percent
    pub interest_rate: f64,
    pub loan_term_months: i32,
    pub monthly_income: Option<f64>,
}

/// Parse a numeric form field, coercing blanks and garbage to zero
pub fn parse_number(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            if !raw.trim().is_empty() {
                log::warn!("Coercing non-numeric input {:?} to 0", raw);
            }
            0.0
        }
    }
}
