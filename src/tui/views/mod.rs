//! TUI Views module
//!
//! The single main screen: summary cards, budget warning, transaction list,
//! chart and status bar, with dialogs and toasts drawn on top.

pub mod chart;
pub mod ledger;
pub mod status_bar;
pub mod summary;

use ratatui::{
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{toast_rect, AppLayout};
use super::widgets::NotificationWidget;

pub use ledger::LedgerView;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let theme = app.theme;
    frame.render_widget(Block::default().style(theme.base()), frame.area());

    let layout = AppLayout::new(frame.area(), app.view.summary.warning.is_exceeded());

    let header = Line::from(vec![
        Span::styled(" Expense Tracker", theme.title_style().add_modifier(Modifier::BOLD)),
        Span::styled("  press ? for help", theme.muted_style()),
    ]);
    frame.render_widget(Paragraph::new(header).style(theme.base()), layout.header);

    summary::render_cards(frame, app, layout.cards);
    summary::render_warning(frame, app, layout.warning);
    ledger::render(frame, app, layout.ledger);
    chart::render(frame, app, layout.chart);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }

    if let Some(notification) = app.notifications.current() {
        let area = toast_rect(48, 4, frame.area());
        frame.render_widget(NotificationWidget::new(notification, &app.theme), area);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::AddTransaction => dialogs::transaction::render(frame, app),
        ActiveDialog::SetBudget => dialogs::budget::render(frame, app),
        ActiveDialog::None => {}
    }
}
