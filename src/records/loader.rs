//! Load transaction records from a budget entries CSV export

use super::{parse_amount, TransactionRecord, TransactionType};
use crate::error::{FinwizError, Result};
use chrono::NaiveDate;
use csv::Reader;
use std::path::Path;

/// Raw CSV row matching the budget_entries export columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    date: String,
    #[serde(rename = "type")]
    kind: String,
    category: String,
    amount: String,
}

impl CsvRow {
    fn to_record(self) -> Result<TransactionRecord> {
        let date = parse_date(&self.date)?;
        let kind: TransactionType = self.kind.parse()?;
        let amount = parse_amount(&self.amount);

        TransactionRecord::new(date, kind, self.category.trim(), amount)
    }
}

/// Parse a stored date, ignoring any time component after the day.
///
/// Accepts "2025-03-14", "2025-03-14T09:30:00Z" and "2025-03-14 09:30:00".
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    let day_part = trimmed
        .split(|c: char| c == 'T' || c == ' ')
        .next()
        .unwrap_or(trimmed);

    NaiveDate::parse_from_str(day_part, "%Y-%m-%d")
        .map_err(|_| FinwizError::InvalidDate(raw.to_string()))
}

/// Load all records from a CSV file
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<TransactionRecord>> {
    let file = std::fs::File::open(path)?;
    load_records_from_reader(file)
}

/// Load records from any reader (e.g., string buffer, network stream)
pub fn load_records_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<TransactionRecord>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut records = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        records.push(row.to_record()?);
    }

    log::debug!("Loaded {} transaction records", records.len());
    Ok(records)
}
