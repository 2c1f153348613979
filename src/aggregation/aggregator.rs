//! Dashboard aggregation engine

use super::breakdown::CategoryBreakdown;
use super::series::MonthlySeries;
use super::window::{month_key, month_window, DEFAULT_WINDOW_MONTHS};
use crate::records::TransactionRecord;
use chrono::NaiveDate;
use serde::Serialize;

/// Configuration for an aggregation run
#[derive(Debug, Clone)]
pub struct AggregationConfig {
    /// Number of trailing calendar months in the trend series
    pub window_months: u32,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            window_months: DEFAULT_WINDOW_MONTHS,
        }
    }
}

/// Everything the dashboard charts need
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// Windowed monthly series, out-of-window months appended
    pub series: MonthlySeries,

    /// All-time category totals per type
    pub category_breakdown: CategoryBreakdown,
}

/// Aggregation engine
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    config: AggregationConfig,
}

impl Aggregator {
    /// Create a new aggregator with the given config
    pub fn new(config: AggregationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Aggregate records into the monthly series and category breakdown.
    ///
    /// Every record contributes to both outputs. Records dated outside the
    /// window still get a bucket, appended after the window.
    pub fn aggregate(&self, records: &[TransactionRecord], reference_date: NaiveDate) -> DashboardSummary {
        let mut series = MonthlySeries::with_window(month_window(reference_date, self.config.window_months));
        let mut category_breakdown = CategoryBreakdown::new();

        for record in records {
            let amount = sanitize_amount(record.amount);

            series
                .bucket_mut(month_key(record.date))
                .totals
                .add(record.kind, amount);

            category_breakdown.add(record.kind, &record.category, amount);
        }

        log::debug!(
            "Aggregated {} records into {} months ({} outside the {}-month window)",
            records.len(),
            series.len(),
            series.extensions().len(),
            self.config.window_months,
        );

        DashboardSummary {
            series,
            category_breakdown,
        }
    }
}

/// Aggregate with an explicit window size
pub fn aggregate(
    records: &[TransactionRecord],
    window_months: u32,
    reference_date: NaiveDate,
) -> DashboardSummary {
    Aggregator::new(AggregationConfig { window_months }).aggregate(records, reference_date)
}

/// Non-finite amounts count as zero so the record still lands in its bucket
pub(crate) fn sanitize_amount(amount: f64) -> f64 {
    if amount.is_finite() {
        amount
    } else {
        log::warn!("Treating non-finite amount {} as 0", amount);
        0.0
    }
}
