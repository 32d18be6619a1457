//! CSV export of the ledger
//!
//! Format: a `Text,Amount,Category` header, then one `text,amount,category`
//! row per transaction with the amount at two decimal places, lines joined
//! by `\n` with no newline after the last one. Fields are
//! written as-is; a comma or quote inside a transaction's text is not
//! escaped, so such a file will not read back cleanly.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use tracing::info;

use crate::error::{TrackError, TrackResult};
use crate::models::{Category, Money, Transaction};

/// Header row of an exported file
pub const CSV_HEADER: [&str; 3] = ["Text", "Amount", "Category"];

/// One row of an exported file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    pub text: String,
    pub amount: Money,
    pub category: Category,
}

/// Write the ledger as CSV
pub fn write_transactions_csv<W: Write>(
    transactions: &[Transaction],
    mut writer: W,
) -> TrackResult<()> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    csv_writer.write_record(CSV_HEADER)?;

    for txn in transactions {
        let amount = txn.amount.to_string();
        csv_writer.write_record([txn.text.as_str(), amount.as_str(), txn.category.name()])?;
    }

    let mut bytes = csv_writer
        .into_inner()
        .map_err(|e| TrackError::Export(e.to_string()))?;
    // Lines are joined, not terminated
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }

    writer
        .write_all(&bytes)
        .and_then(|()| writer.flush())
        .map_err(|e| TrackError::Export(e.to_string()))?;
    Ok(())
}

/// Render the ledger as CSV text
pub fn transactions_csv_string(transactions: &[Transaction]) -> TrackResult<String> {
    let mut buffer = Vec::new();
    write_transactions_csv(transactions, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| TrackError::Export(e.to_string()))
}

/// Write the ledger to a file, replacing any existing file at that path
pub fn save_transactions_csv(transactions: &[Transaction], path: &Path) -> TrackResult<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            TrackError::Export(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    let file = File::create(path).map_err(|e| {
        TrackError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    write_transactions_csv(transactions, BufWriter::new(file))?;

    info!(path = %path.display(), rows = transactions.len(), "exported transactions");
    Ok(path.to_path_buf())
}

/// Read an exported file back into rows, in file order
///
/// Quotes are treated as ordinary characters, matching how the file was written.
pub fn read_transactions_csv<R: Read>(reader: R) -> TrackResult<Vec<CsvRow>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .quoting(false)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| TrackError::Import(e.to_string()))?;
    if headers.iter().ne(CSV_HEADER.iter().copied()) {
        return Err(TrackError::Import(format!(
            "Unexpected header: expected '{}'",
            CSV_HEADER.join(",")
        )));
    }

    let mut rows = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let line = index + 2;
        let record = record.map_err(|e| TrackError::Import(format!("line {}: {}", line, e)))?;

        let amount = Money::parse(&record[1])
            .map_err(|e| TrackError::Import(format!("line {}: {}", line, e)))?;
        let category = record[2]
            .parse::<Category>()
            .map_err(|e| TrackError::Import(format!("line {}: {}", line, e)))?;

        rows.push(CsvRow {
            text: record[0].to_string(),
            amount,
            category,
        });
    }

    Ok(rows)
}

/// Read an exported file from disk
pub fn load_transactions_csv(path: &Path) -> TrackResult<Vec<CsvRow>> {
    let file = File::open(path).map_err(|e| {
        TrackError::Import(format!("Failed to open {}: {}", path.display(), e))
    })?;
    read_transactions_csv(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionId;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn txn(id: u64, text: &str, cents: i64, category: Category) -> Transaction {
        Transaction::new(
            TransactionId::from_raw(id),
            text,
            Money::from_cents(cents),
            category,
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        )
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn(1, "Salary", 100_000, Category::Salary),
            txn(2, "Groceries", -20_000, Category::Food),
            txn(3, "Bus pass", -5_050, Category::Transport),
        ]
    }

    #[test]
    fn test_export_format() {
        let csv = transactions_csv_string(&sample()).unwrap();
        assert_eq!(
            csv,
            "Text,Amount,Category\n\
             Salary,1000.00,Salary\n\
             Groceries,-200.00,Food\n\
             Bus pass,-50.50,Transport"
        );
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_empty_ledger_exports_header_only() {
        assert_eq!(transactions_csv_string(&[]).unwrap(), "Text,Amount,Category");
    }

    #[test]
    fn test_commas_are_not_escaped() {
        let csv = transactions_csv_string(&[txn(1, "Rice, beans", -300, Category::Food)]).unwrap();
        assert!(csv.contains("Rice, beans,-3.00,Food"));
        assert!(!csv.contains('"'));
    }

    #[test]
    fn test_export_then_read_back() {
        let original = sample();
        let csv = transactions_csv_string(&original).unwrap();
        let rows = read_transactions_csv(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), original.len());
        for (row, txn) in rows.iter().zip(&original) {
            assert_eq!(row.text, txn.text);
            assert_eq!(row.amount, txn.amount);
            assert_eq!(row.category, txn.category);
        }
    }

    #[test]
    fn test_read_rejects_embedded_comma_row() {
        let csv = transactions_csv_string(&[txn(1, "Rice, beans", -300, Category::Food)]).unwrap();
        let err = read_transactions_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, TrackError::Import(_)));
    }

    #[test]
    fn test_read_rejects_wrong_header() {
        let err = read_transactions_csv("Name,Value\nx,1\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Unexpected header"));
    }

    #[test]
    fn test_read_rejects_unknown_category() {
        let err = read_transactions_csv("Text,Amount,Category\nRent,-10.00,Housing\n".as_bytes())
            .unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_save_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("transactions.csv");

        let written = save_transactions_csv(&sample(), &path).unwrap();
        assert_eq!(written, path);

        let rows = load_transactions_csv(&path).unwrap();
        assert_eq!(rows[1].text, "Groceries");
        assert_eq!(rows[1].amount, Money::from_cents(-20_000));
    }
}
