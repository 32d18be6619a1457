//! Help dialog
//!
//! Lists the main view keybindings and the form keys

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::keybindings::{FORM_KEYS, KEYBINDINGS};
use crate::tui::layout::centered_rect;
use crate::tui::theme::Theme;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let theme = app.theme;
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(theme.title_style())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .style(theme.base());

    let paragraph = Paragraph::new(help_lines(&theme))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Main View", theme), Line::from("")];
    lines.extend(
        KEYBINDINGS
            .iter()
            .map(|binding| key_line(binding.label, binding.description, theme)),
    );

    lines.push(Line::from(""));
    lines.push(heading("Forms", theme));
    lines.push(Line::from(""));
    lines.extend(
        FORM_KEYS
            .iter()
            .map(|(key, description)| key_line(key, description, theme)),
    );

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Amounts: positive for income, negative for expense",
        theme.muted_style(),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        theme.muted_style(),
    )));

    lines
}

fn heading(text: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(theme.warning)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Create a formatted key line
fn key_line(key: &str, description: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(theme.accent)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(theme.foreground)),
    ])
}
