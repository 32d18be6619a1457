//! Summary cards and budget warning banner

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::Money;
use crate::tui::app::App;
use crate::tui::layout::card_areas;
use crate::tui::theme::Theme;

/// Render the balance, income and expense cards
pub fn render_cards(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let symbol = &app.settings.currency_symbol;
    let totals = &app.view.summary.totals;
    let [balance_area, income_area, expense_area] = card_areas(area);

    let balance_color = if totals.balance.is_negative() {
        theme.expense
    } else {
        theme.foreground
    };

    render_card(frame, theme, balance_area, "Balance", totals.balance, symbol, balance_color);
    render_card(frame, theme, income_area, "Income", totals.income, symbol, theme.income);
    render_card(frame, theme, expense_area, "Expense", totals.expense, symbol, theme.expense);
}

fn render_card(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    title: &str,
    amount: Money,
    symbol: &str,
    color: ratatui::style::Color,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(theme.muted_style())
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .style(theme.base());

    let value = Paragraph::new(Line::from(Span::styled(
        amount.format_with_symbol(symbol),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(block);

    frame.render_widget(value, area);
}

/// Render the budget warning banner when the budget is exceeded
pub fn render_warning(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let Some(message) = app
        .view
        .summary
        .warning
        .message(&app.settings.currency_symbol)
    else {
        return;
    };

    let style = Style::default().fg(theme.warning).add_modifier(Modifier::BOLD);
    let banner = Paragraph::new(Line::from(Span::styled(message, style)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.warning))
                .style(theme.base()),
        );

    frame.render_widget(banner, area);
}
