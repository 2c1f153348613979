//! FinWiz - Financial calculation engine for student budgeting
//!
//! This library provides:
//! - Dashboard aggregation of dated transactions into monthly trend series
//!   and all-time category breakdowns
//! - Student loan repayment lookup for JPA, MARA and PTPTN policy tiers
//! - Fixed-rate amortization with payoff date and affordability
//! - A simple financial health check
//!
//! Every computation is a pure function of its inputs. Callers pass the
//! reference date explicitly; nothing here reads the clock.

pub mod error;
pub mod records;
pub mod aggregation;
pub mod loan;
pub mod health;

// Re-export commonly used types
pub use error::{FinwizError, Result};
pub use records::{TransactionRecord, TransactionType};
pub use aggregation::{aggregate, AggregationConfig, Aggregator, DashboardSummary, MonthlySeries};
pub use loan::{LoanCalculator, LoanInput, LoanReport, RepaymentResult, AmortizationResult};
pub use health::{health_check, HealthReport};
