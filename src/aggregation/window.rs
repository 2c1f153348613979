//! Calendar month keys and trailing month windows

use chrono::{Datelike, NaiveDate};

/// Number of months shown on the dashboard trend chart
pub const DEFAULT_WINDOW_MONTHS: u32 = 6;

/// Largest window built; longer requests are clamped (100 years)
pub const MAX_WINDOW_MONTHS: u32 = 1200;

/// Month key in "YYYY-MM" form, month zero-padded
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Ordered month keys for the `months` calendar months ending at the
/// reference date's month, oldest first.
///
/// Works on a running month index (year * 12 + month0) so year boundaries
/// need no special casing. At most `MAX_WINDOW_MONTHS` keys are returned.
pub fn month_window(reference_date: NaiveDate, months: u32) -> Vec<String> {
    let months = months.min(MAX_WINDOW_MONTHS);
    let anchor = reference_date.year() as i64 * 12 + reference_date.month0() as i64;

    (0..months as i64)
        .rev()
        .map(|back| {
            let index = anchor - back;
            let year = index.div_euclid(12);
            let month = index.rem_euclid(12) + 1;
            format!("{:04}-{:02}", year, month)
        })
        .collect()
}
