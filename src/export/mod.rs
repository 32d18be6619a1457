//! Export module for track-cli
//!
//! The ledger leaves the process only as a CSV file.

pub mod csv;

pub use self::csv::{
    load_transactions_csv, read_transactions_csv, save_transactions_csv,
    transactions_csv_string, write_transactions_csv, CsvRow, CSV_HEADER,
};
