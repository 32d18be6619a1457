//! Summary CLI command
//!
//! Builds a session ledger from `--replay` and `--add` entries, applies an
//! optional budget, prints the ledger with its totals and can export it.

use std::path::PathBuf;

use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_budget_set, format_summary, format_transaction_table};
use crate::error::TrackResult;
use crate::export::{load_transactions_csv, save_transactions_csv};
use crate::models::{Category, Transaction};
use crate::services::{LedgerSink, Summary, Tracker, TransactionInput};

/// Arguments for `track summary`
#[derive(Args, Debug, Default)]
pub struct SummaryArgs {
    /// Add a transaction as TEXT,AMOUNT[,CATEGORY] (negative amount for expenses)
    #[arg(
        short,
        long,
        value_name = "TEXT,AMOUNT,CATEGORY",
        value_parser = parse_add_arg,
        allow_hyphen_values = true
    )]
    pub add: Vec<TransactionInput>,

    /// Expense budget to check the totals against
    #[arg(short, long, value_name = "AMOUNT", allow_hyphen_values = true)]
    pub budget: Option<String>,

    /// Replay a previously exported CSV file before any --add entries
    #[arg(short, long, value_name = "FILE")]
    pub replay: Option<PathBuf>,

    /// Export the ledger as CSV (to the configured export path if none given)
    #[arg(short, long, value_name = "PATH", num_args = 0..=1)]
    pub export: Option<Option<PathBuf>>,
}

/// Parse `TEXT,AMOUNT[,CATEGORY]`
///
/// Splits from the right so the text may itself contain commas. The amount
/// is kept as typed; it is validated when the transaction is submitted.
pub fn parse_add_arg(arg: &str) -> Result<TransactionInput, String> {
    let mut parts = arg.rsplitn(3, ',');
    let last = parts.next().unwrap_or_default();
    let middle = parts.next();
    let first = parts.next();

    match (first, middle) {
        (Some(text), Some(amount)) => {
            let category = last.trim().parse::<Category>().map_err(|e| e.to_string())?;
            Ok(TransactionInput::new(text, amount.trim(), category))
        }
        (None, Some(text)) => Ok(TransactionInput::new(text, last.trim(), Category::default())),
        _ => Err(format!("expected TEXT,AMOUNT[,CATEGORY], got '{}'", arg)),
    }
}

/// Plain-text sink that keeps the rendering of the most recent redraw
pub struct TextReport<'a> {
    settings: &'a Settings,
    rendered: String,
}

impl<'a> TextReport<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            rendered: String::new(),
        }
    }

    /// Text of the most recent redraw (empty if none happened)
    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

impl LedgerSink for TextReport<'_> {
    fn redraw(&mut self, transactions: &[Transaction], summary: &Summary) {
        let mut text = format_transaction_table(transactions, self.settings);
        text.push('\n');
        text.push_str(&format_summary(summary, &self.settings.currency_symbol));
        self.rendered = text;
    }
}

/// Handle `track summary`
pub fn handle_summary_command(settings: &Settings, args: SummaryArgs) -> TrackResult<()> {
    let mut tracker = Tracker::new();
    let mut report = TextReport::new(settings);

    let mut inputs = Vec::new();
    if let Some(path) = &args.replay {
        inputs.extend(load_transactions_csv(path)?.into_iter().map(|row| {
            TransactionInput::new(row.text, row.amount.to_string(), row.category)
        }));
    }
    inputs.extend(args.add);

    for input in &inputs {
        tracker.submit_transaction(input, &mut report)?;
    }

    if let Some(budget) = &args.budget {
        let budget = tracker.set_budget(budget, &mut report)?;
        println!("{}", format_budget_set(budget, &settings.currency_symbol));
        println!();
    }

    // Nothing submitted yet means nothing has been drawn
    if report.rendered().is_empty() {
        tracker.refresh(&mut report);
    }
    print!("{}", report.rendered());

    if let Some(target) = args.export {
        let path = target.unwrap_or_else(|| settings.export_path());
        let written = save_transactions_csv(tracker.transactions(), &path)?;
        println!();
        println!(
            "Exported {} transactions to {}",
            tracker.transactions().len(),
            written.display()
        );
    }

    Ok(())
}
