//! Set budget dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

use super::transaction::{form_hints, render_text_field};

/// State for the budget dialog
#[derive(Debug, Clone)]
pub struct BudgetFormState {
    pub amount_input: TextInput,
    pub error_message: Option<String>,
}

impl Default for BudgetFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl BudgetFormState {
    pub fn new() -> Self {
        Self {
            amount_input: TextInput::new()
                .label("Budget")
                .placeholder("Enter budget amount"),
            error_message: None,
        }
    }

    /// Form prefilled with the current budget, empty when unset
    pub fn with_budget(budget: Money) -> Self {
        let mut state = Self::new();
        if budget.is_positive() {
            state.amount_input.set_value(budget.to_string());
        }
        state
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the budget dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let theme = app.theme;
    let form = &app.budget_form;
    let area = centered_rect_fixed(50, 8, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Set Budget ")
        .title_style(theme.title_style())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .style(theme.base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(1)
        .constraints([
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    render_text_field(frame, chunks[0], &form.amount_input, true, &theme);

    if let Some(error) = &form.error_message {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                error.as_str(),
                Style::default().fg(theme.expense),
            ))),
            chunks[2],
        );
    }

    frame.render_widget(Paragraph::new(form_hints(&theme)), chunks[4]);
}

/// Handle key input for the budget dialog
/// Returns true if the key was handled, false otherwise
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let input = &mut app.budget_form.amount_input;

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            return true;
        }
        KeyCode::Enter => {
            app.submit_budget();
            return true;
        }
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => return false,
    }

    app.budget_form.error_message = None;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::tui::app::ActiveDialog;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_prefill() {
        assert_eq!(BudgetFormState::with_budget(Money::zero()).amount_input.value(), "");
        assert_eq!(
            BudgetFormState::with_budget(Money::from_cents(20_000)).amount_input.value(),
            "200.00"
        );
    }

    #[test]
    fn test_keyboard_entry() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.open_dialog(ActiveDialog::SetBudget);

        for c in "350".chars() {
            handle_key(&mut app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        handle_key(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        assert!(!app.has_dialog());
        assert_eq!(app.tracker.budget(), Money::from_cents(35_000));
        assert_eq!(app.view.summary.budget, Money::from_cents(35_000));
    }
}
