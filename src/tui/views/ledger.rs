//! Transaction list view
//!
//! [`LedgerView`] is the TUI's presentation sink: every redraw replaces the
//! whole snapshot, the totals and the chart.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::config::settings::Settings;
use crate::display::format_list_item;
use crate::models::Transaction;
use crate::services::{LedgerSink, Summary};
use crate::tui::app::App;
use crate::tui::theme::Theme;

use super::chart::ExpenseChart;

/// Everything the main screen draws from, as of the last redraw
#[derive(Debug, Default)]
pub struct LedgerView {
    pub transactions: Vec<Transaction>,
    pub summary: Summary,
    pub chart: Option<ExpenseChart>,
    /// Number of redraws received
    pub redraws: u64,
}

impl LedgerSink for LedgerView {
    fn redraw(&mut self, transactions: &[Transaction], summary: &Summary) {
        self.transactions = transactions.to_vec();
        self.summary = *summary;
        self.chart = ExpenseChart::from_totals(&summary.totals);
        self.redraws += 1;
    }
}

/// One list row: muted date, the styled list item, muted category
fn list_item_line(txn: &Transaction, settings: &Settings, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<10} ", txn.date.format(&settings.date_format)),
            theme.muted_style(),
        ),
        Span::styled(
            format_list_item(txn, &settings.currency_symbol),
            theme.amount_style(txn.is_expense()),
        ),
        Span::styled(format!("  ({})", txn.category), theme.muted_style()),
    ])
}

/// Render the transaction list
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let count = app.view.transactions.len();

    let block = Block::default()
        .title(format!(" Transactions ({}) ", count))
        .title_style(theme.title_style())
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .style(theme.base());

    if count == 0 {
        let empty = List::new(vec![ListItem::new(Line::from(Span::styled(
            "No transactions yet. Press 'a' to add one.",
            theme.muted_style(),
        )))])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .view
        .transactions
        .iter()
        .map(|txn| ListItem::new(list_item_line(txn, app.settings, &theme)))
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(theme.selection)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    state.select(Some(app.selected_index.min(count - 1)));
    frame.render_stateful_widget(list, area, &mut state);
}
