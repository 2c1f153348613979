//! FinWiz CLI
//!
//! Command-line interface for dashboard aggregation, loan repayment and
//! health check calculations

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use finwiz::aggregation::{type_totals, AggregationConfig, Aggregator, DEFAULT_WINDOW_MONTHS, MAX_WINDOW_MONTHS};
use finwiz::loan::{LoanCalculator, LoanInput, StudyLevel, StudyStatus, Lender};
use finwiz::records::{load_records, parse_date, TransactionType};
use finwiz::health_check;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "finwiz", version, about = "Student finance dashboard and loan calculations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Aggregate transactions into monthly series and category totals
    Dashboard {
        /// CSV file with date,type,category,amount columns
        #[arg(long)]
        records: PathBuf,

        /// Number of trailing months in the trend series (at most 1200)
        #[arg(
            long,
            default_value_t = DEFAULT_WINDOW_MONTHS,
            value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_WINDOW_MONTHS))
        )]
        window: u32,

        /// Last month of the window (YYYY-MM-DD); defaults to today
        #[arg(long)]
        reference_date: Option<String>,

        /// Print JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Repayment percentage and amortization for a student loan
    Loan {
        #[arg(long)]
        lender: Lender,
        #[arg(long)]
        level: StudyLevel,
        #[arg(long)]
        gpa: f64,
        #[arg(long)]
        status: StudyStatus,
        #[arg(long)]
        exemption: bool,
        /// Study duration in years
        #[arg(long)]
        duration: Option<u32>,
        #[arg(long)]
        loan_amount: f64,
        /// Annual interest rate in percent
        #[arg(long)]
        interest_rate: f64,
        /// Repayment term; terms over 1200 months are not priced
        #[arg(long)]
        term_months: i32,
        #[arg(long)]
        monthly_income: Option<f64>,
        /// Start date for the payoff date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        reference_date: Option<String>,
        /// Also print the month-by-month schedule
        #[arg(long)]
        schedule: bool,
        #[arg(long)]
        json: bool,
    },

    /// Savings rate, debt-to-income ratio and emergency fund advice
    Health {
        #[arg(long)]
        income: f64,
        #[arg(long)]
        expenses: f64,
        #[arg(long, default_value_t = 0.0)]
        debt: f64,
        #[arg(long)]
        json: bool,
    },
}

fn reference_date(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(raw) => parse_date(raw).context("Invalid --reference-date"),
        None => Ok(Local::now().date_naive()),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Dashboard {
            records,
            window,
            reference_date: raw_date,
            json,
        } => {
            let reference = reference_date(raw_date.as_deref())?;
            let records = load_records(&records)
                .with_context(|| format!("Failed to load records from {}", records.display()))?;

            let aggregator = Aggregator::new(AggregationConfig { window_months: window });
            let summary = aggregator.aggregate(&records, reference);
            let totals = type_totals(&records);

            if json {
                let output = serde_json::json!({
                    "series": summary.series,
                    "category_breakdown": summary.category_breakdown.to_slices(),
                    "totals": totals,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
                return Ok(());
            }

            println!("Monthly Summary ({} records, window ending {}):", records.len(), reference);
            println!("{:>8} {:>12} {:>12} {:>12} {:>12}", "Month", "Income", "Expense", "Savings", "Sadaqah");
            println!("{}", "-".repeat(60));
            for bucket in &summary.series {
                println!(
                    "{:>8} {:>12.2} {:>12.2} {:>12.2} {:>12.2}",
                    bucket.month,
                    bucket.totals.income,
                    bucket.totals.expense,
                    bucket.totals.savings,
                    bucket.totals.sadaqah,
                );
            }
            if !summary.series.extensions().is_empty() {
                println!("  ({} month(s) outside the window appended)", summary.series.extensions().len());
            }

            println!("\nCategories (all records):");
            for kind in TransactionType::ALL {
                println!("  {}:", kind);
                for (category, amount) in summary.category_breakdown.categories(kind) {
                    println!("    {:<24} {:>12.2}", category, amount);
                }
            }

            println!("\nTotals:");
            for kind in TransactionType::ALL {
                println!("  {:<8} {:>12.2}", kind.as_str(), totals.get(kind));
            }
            println!("  {:<8} {:>12.2}", "balance", totals.balance);
        }

        Command::Loan {
            lender,
            level,
            gpa,
            status,
            exemption,
            duration,
            loan_amount,
            interest_rate,
            term_months,
            monthly_income,
            reference_date: raw_date,
            schedule,
            json,
        } => {
            let calculator = LoanCalculator::new(reference_date(raw_date.as_deref())?);
            let input = LoanInput {
                lender,
                level,
                gpa,
                status,
                exemption,
                duration,
                loan_amount,
                interest_rate,
                loan_term_months: term_months,
                monthly_income,
            };

            let report = calculator.evaluate(&input)?;
            let rows = if schedule { calculator.schedule(&input) } else { Vec::new() };

            if json {
                let output = serde_json::json!({
                    "report": report,
                    "schedule": rows,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
                return Ok(());
            }

            println!("{} Repayment: {}%", lender, report.repayment.percent);
            println!("  {}", report.repayment.explanation);
            println!();
            println!("  Monthly repayment: RM {:.2}", report.amortization.monthly_repayment);
            println!("  Total interest:    RM {:.2}", report.amortization.total_interest);
            if report.amortization.payoff_date.is_empty() {
                println!("  Payoff date:       -");
            } else {
                println!("  Payoff date:       {}", report.amortization.payoff_date);
            }
            if let Some(ratio) = report.amortization.affordability_ratio {
                println!("  Affordability:     {:.2}% of monthly income", ratio);
            }

            if schedule {
                println!("\n{:>5} {:>12} {:>12} {:>12} {:>14}", "Month", "Payment", "Interest", "Principal", "Balance");
                println!("{}", "-".repeat(60));
                for row in &rows {
                    println!(
                        "{:>5} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
                        row.month, row.payment, row.interest, row.principal, row.balance,
                    );
                }
            }
        }

        Command::Health {
            income,
            expenses,
            debt,
            json,
        } => {
            let report = health_check(income, expenses, debt);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            println!("Savings rate:   {:.1}%", report.savings_rate_pct);
            println!("Debt-to-income: {:.1}%", report.debt_to_income_pct);
            for line in &report.advice {
                println!("  - {}", line);
            }
        }
    }

    Ok(())
}
