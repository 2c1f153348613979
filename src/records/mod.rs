//! Transaction records and the CSV loader that produces them

mod data;
pub mod loader;

pub use data::{parse_amount, TransactionRecord, TransactionType};
pub use loader::{load_records, load_records_from_reader, parse_date};
