//! Error types for the calculation engine

use thiserror::Error;

/// Errors surfaced to callers when an input cannot be computed at all.
///
/// Malformed numbers never end up here: they are normalized to zero where
/// they are parsed. Only out-of-domain values and I/O failures are errors.
#[derive(Debug, Error)]
pub enum FinwizError {
    #[error("unknown transaction type: {0:?} (expected income, expense, savings or sadaqah)")]
    UnknownTransactionType(String),

    #[error("unknown lender: {0:?} (expected JPA, MARA or PTPTN)")]
    UnknownLender(String),

    #[error("unknown study level: {0:?} (expected certificate, diploma, degree or medicine)")]
    UnknownStudyLevel(String),

    #[error("unknown study status: {0:?} (expected completed, failed, extended or withdrawn)")]
    UnknownStudyStatus(String),

    #[error("GPA {0} is outside the range 0.00-4.00")]
    GpaOutOfRange(f64),

    #[error("negative amount {amount} for {category:?}")]
    NegativeAmount { category: String, amount: f64 },

    #[error("invalid date {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("invalid boolean {0:?}")]
    InvalidFlag(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FinwizError>;
