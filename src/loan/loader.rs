//! Load loan scenarios from CSV for batch evaluation

use super::input::{parse_number, LoanInput};
use crate::error::{FinwizError, Result};
use csv::Reader;
use std::path::Path;

/// Raw CSV row matching the saved loan scenario columns.
///
/// Numeric columns are read as text so blanks and garbage coerce to zero
/// instead of failing the whole file.
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    lender: String,
    level: String,
    gpa: String,
    status: String,
    #[serde(default)]
    exemption: String,
    #[serde(default)]
    duration: String,
    loan_amount: String,
    interest_rate: String,
    loan_term_months: String,
    #[serde(default)]
    monthly_income: String,
}

impl CsvRow {
    fn to_input(self) -> Result<LoanInput> {
        let duration = match self.duration.trim() {
            "" => None,
            raw => raw.parse::<u32>().ok(),
        };

        let monthly_income = match self.monthly_income.trim() {
            "" => None,
            raw => Some(parse_number(raw)).filter(|income| *income > 0.0),
        };

        Ok(LoanInput {
            lender: self.lender.parse()?,
            level: self.level.parse()?,
            gpa: parse_number(&self.gpa),
            status: self.status.parse()?,
            exemption: parse_flag(&self.exemption)?,
            duration,
            loan_amount: parse_number(&self.loan_amount),
            interest_rate: parse_number(&self.interest_rate),
            loan_term_months: parse_number(&self.loan_term_months).trunc() as i32,
            monthly_income,
        })
    }
}

/// Parse a checkbox column; blank means unchecked
pub fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "0" | "no" | "n" => Ok(false),
        "true" | "1" | "yes" | "y" => Ok(true),
        _ => Err(FinwizError::InvalidFlag(raw.to_string())),
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<LoanInput>> {
    let file = std::fs::File::open(path)?;
    load_scenarios_from_reader(file)
}

/// Load scenarios from any reader
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<LoanInput>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut inputs = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        inputs.push(row.to_input()?);
    }

    log::debug!("Loaded {} loan scenarios", inputs.len());
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::{Lender, StudyLevel, StudyStatus};

    const HEADER: &str =
        "lender,level,gpa,status,exemption,duration,loan_amount,interest_rate,loan_term_months,monthly_income\n";

    #[test]
    fn test_load_scenarios_from_reader() {
        let data = format!(
            "{}{}{}",
            HEADER,
            "JPA,medicine,2.1,completed,false,5,50000,1,120,3000\n",
            "ptptn,degree,3.9,completed,yes,,20000,1.0,120,\n",
        );

        let inputs = load_scenarios_from_reader(data.as_bytes()).expect("Failed to load scenarios");
        assert_eq!(inputs.len(), 2);

        assert_eq!(inputs[0].lender, Lender::Jpa);
        assert_eq!(inputs[0].level, StudyLevel::Medicine);
        assert_eq!(inputs[0].duration, Some(5));
        assert_eq!(inputs[0].monthly_income, Some(3000.0));

        assert_eq!(inputs[1].lender, Lender::Ptptn);
        assert_eq!(inputs[1].status, StudyStatus::Completed);
        assert!(inputs[1].exemption);
        assert_eq!(inputs[1].duration, None);
        assert_eq!(inputs[1].monthly_income, None);
    }

    #[test]
    fn test_non_numeric_fields_become_zero() {
        let data = format!("{}{}", HEADER, "MARA,diploma,abc,failed,,,lots,?,ten,\n");
        let inputs = load_scenarios_from_reader(data.as_bytes()).unwrap();

        assert_eq!(inputs[0].gpa, 0.0);
        assert_eq!(inputs[0].loan_amount, 0.0);
        assert_eq!(inputs[0].interest_rate, 0.0);
        assert_eq!(inputs[0].loan_term_months, 0);
        assert!(!inputs[0].exemption);
    }

    #[test]
    fn test_unknown_lender_fails_fast() {
        let data = format!("{}{}", HEADER, "BSN,degree,3.0,completed,,,1000,1,12,\n");
        let err = load_scenarios_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, FinwizError::UnknownLender(_)));
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("TRUE").unwrap());
        assert!(!parse_flag(" ").unwrap());
        assert!(matches!(parse_flag("maybe"), Err(FinwizError::InvalidFlag(_))));
    }
}
