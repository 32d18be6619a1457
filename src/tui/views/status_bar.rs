//! Status bar view
//!
//! Shows the budget, theme and key hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::tui::keybindings::hints;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let budget = app.view.summary.budget;

    let mut spans = vec![Span::styled(" Budget: ", Style::default().fg(theme.foreground))];
    if budget.is_positive() {
        let color = if app.view.summary.warning.is_exceeded() {
            theme.warning
        } else {
            theme.accent
        };
        spans.push(Span::styled(
            budget.format_with_symbol(&app.settings.currency_symbol),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    } else {
        spans.push(Span::styled("not set", theme.muted_style()));
    }

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(
        if theme.is_dark() { "Dark" } else { "Light" },
        Style::default().fg(theme.accent),
    ));

    let hint_text: String = hints()
        .map(|binding| format!(" {}:{} ", binding.label, binding.description))
        .collect();

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hint_text.chars().count());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hint_text, theme.muted_style()));

    frame.render_widget(Paragraph::new(Line::from(spans)).style(theme.base()), area);
}
