//! Evaluate a file of loan scenarios in parallel
//!
//! Usage: loan_batch <scenarios.csv> [output.csv]
//! Set REFERENCE_DATE=YYYY-MM-DD to pin payoff dates; defaults to today.

use anyhow::{Context, Result};
use chrono::Local;
use finwiz::loan::{load_scenarios, LoanCalculator};
use finwiz::records::parse_date;
use serde::Serialize;
use std::env;
use std::time::Instant;

/// One output row per input scenario
#[derive(Debug, Serialize)]
struct OutputRow {
    row: usize,
    lender: String,
    percent: Option<u8>,
    explanation: String,
    monthly_repayment: f64,
    total_interest: f64,
    payoff_date: String,
    affordability: Option<f64>,
    error: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let input_path = args.next().context("Usage: loan_batch <scenarios.csv> [output.csv]")?;
    let output_path = args.next().unwrap_or_else(|| "loan_batch_output.csv".to_string());

    let reference_date = match env::var("REFERENCE_DATE") {
        Ok(raw) => parse_date(&raw).context("Invalid REFERENCE_DATE")?,
        Err(_) => Local::now().date_naive(),
    };

    let start = Instant::now();
    let inputs = load_scenarios(&input_path)
        .with_context(|| format!("Failed to load scenarios from {}", input_path))?;
    println!("Loaded {} scenarios in {:?}", inputs.len(), start.elapsed());

    let calculator = LoanCalculator::new(reference_date);
    let results = calculator.evaluate_batch(&inputs);

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("Failed to create {}", output_path))?;
    let mut failures = 0;

    for (idx, (input, result)) in inputs.iter().zip(results).enumerate() {
        let row = match result {
            Ok(report) => OutputRow {
                row: idx + 1,
                lender: input.lender.to_string(),
                percent: Some(report.repayment.percent),
                explanation: report.repayment.explanation,
                monthly_repayment: report.amortization.monthly_repayment,
                total_interest: report.amortization.total_interest,
                payoff_date: report.amortization.payoff_date,
                affordability: report.amortization.affordability_ratio,
                error: String::new(),
            },
            Err(err) => {
                failures += 1;
                log::warn!("Scenario {} rejected: {}", idx + 1, err);
                OutputRow {
                    row: idx + 1,
                    lender: input.lender.to_string(),
                    percent: None,
                    explanation: String::new(),
                    monthly_repayment: 0.0,
                    total_interest: 0.0,
                    payoff_date: String::new(),
                    affordability: None,
                    error: err.to_string(),
                }
            }
        };
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!("Output written to {}", output_path);
    println!("  Evaluated: {}", inputs.len());
    println!("  Rejected:  {}", failures);
    println!("Total time: {:?}", start.elapsed());

    Ok(())
}
