//! Dashboard aggregation: monthly trend series and category breakdowns

mod window;
mod series;
mod breakdown;
mod totals;
mod aggregator;

pub use window::{month_key, month_window, DEFAULT_WINDOW_MONTHS, MAX_WINDOW_MONTHS};
pub use series::{MonthBucket, MonthlySeries, TypeAmounts};
pub use breakdown::{CategoryBreakdown, CategorySlice, TypeSlices};
pub use totals::{type_totals, TypeTotals};
pub use aggregator::{aggregate, AggregationConfig, Aggregator, DashboardSummary};
