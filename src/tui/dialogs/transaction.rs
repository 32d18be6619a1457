//! Add transaction dialog
//!
//! Modal form with text, amount and category fields, tab navigation and
//! inline validation errors.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::Category;
use crate::services::TransactionInput;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::theme::Theme;
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the transaction form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionField {
    #[default]
    Text,
    Amount,
    Category,
}

impl TransactionField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Text => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Text,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Text => Self::Category,
            Self::Amount => Self::Text,
            Self::Category => Self::Amount,
        }
    }
}

/// State for the transaction form dialog
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    pub focused_field: TransactionField,
    pub text_input: TextInput,
    /// Signed amount as typed; negative for expenses
    pub amount_input: TextInput,
    pub category: Category,
    pub error_message: Option<String>,
}

impl Default for TransactionFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionFormState {
    pub fn new() -> Self {
        Self {
            focused_field: TransactionField::Text,
            text_input: TextInput::new()
                .label("Text")
                .placeholder("Enter text..."),
            amount_input: TextInput::new()
                .label("Amount")
                .placeholder("negative = expense, positive = income"),
            category: Category::default(),
            error_message: None,
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    pub fn set_focus(&mut self, field: TransactionField) {
        self.focused_field = field;
    }

    /// The focused text input, if the focused field is one
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            TransactionField::Text => Some(&mut self.text_input),
            TransactionField::Amount => Some(&mut self.amount_input),
            TransactionField::Category => None,
        }
    }

    /// Raw form values for the tracker to validate
    pub fn to_input(&self) -> TransactionInput {
        TransactionInput::new(self.text_input.value(), self.amount_input.value(), self.category)
    }

    /// Clear text and amount after a successful submit; the category stays
    pub fn reset_after_submit(&mut self) {
        self.text_input.clear();
        self.amount_input.clear();
        self.error_message = None;
        self.focused_field = TransactionField::Text;
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the transaction dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let theme = app.theme;
    let form = &app.transaction_form;
    let area = centered_rect_fixed(60, 11, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Transaction ")
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
            Constraint::Length(1), // Text
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Category
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    render_text_field(
        frame,
        chunks[0],
        &form.text_input,
        form.focused_field == TransactionField::Text,
        &theme,
    );
    render_text_field(
        frame,
        chunks[1],
        &form.amount_input,
        form.focused_field == TransactionField::Amount,
        &theme,
    );

    let category_focused = form.focused_field == TransactionField::Category;
    let mut spans = vec![field_label("Category", category_focused, &theme)];
    let category_style = if category_focused {
        Style::default()
            .fg(theme.background)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.foreground)
    };
    if category_focused {
        spans.push(Span::styled("◀ ", Style::default().fg(theme.accent)));
    }
    spans.push(Span::styled(format!(" {} ", form.category), category_style));
    if category_focused {
        spans.push(Span::styled(" ▶", Style::default().fg(theme.accent)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[2]);

    if let Some(error) = &form.error_message {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                error.as_str(),
                Style::default().fg(theme.expense),
            ))),
            chunks[4],
        );
    }

    frame.render_widget(Paragraph::new(form_hints(&theme)), chunks[6]);
}

fn field_label(label: &str, focused: bool, theme: &Theme) -> Span<'static> {
    let style = if focused {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.accent)
    };
    Span::styled(format!("{:>10}: ", label), style)
}

/// Render a labelled text input on one line
pub fn render_text_field(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    input: &TextInput,
    focused: bool,
    theme: &Theme,
) {
    let mut spans = vec![field_label(&input.label, focused, theme)];
    spans.extend(input.spans(focused, theme));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Hint line shared by the form dialogs
pub fn form_hints(theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(theme.warning)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(theme.income)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(theme.expense)),
        Span::raw(" Cancel"),
    ])
}

/// Handle key input for the transaction dialog
/// Returns true if the key was handled, false otherwise
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.transaction_form;

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            return true;
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                form.prev_field();
            } else {
                form.next_field();
            }
            return true;
        }

        KeyCode::BackTab => {
            form.prev_field();
            return true;
        }

        KeyCode::Enter => {
            app.submit_transaction();
            return true;
        }

        KeyCode::Left | KeyCode::Up if form.focused_field == TransactionField::Category => {
            form.category = form.category.prev();
            return true;
        }

        KeyCode::Right | KeyCode::Down if form.focused_field == TransactionField::Category => {
            form.category = form.category.next();
            return true;
        }

        _ => {}
    }

    let Some(input) = form.focused_input() else {
        return false;
    };

    match key.code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => return false,
    }
    form.clear_error();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::tui::app::ActiveDialog;

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_field_cycle() {
        let mut field = TransactionField::Text;
        for _ in 0..3 {
            field = field.next();
        }
        assert_eq!(field, TransactionField::Text);
        assert_eq!(TransactionField::Text.prev(), TransactionField::Category);
    }

    #[test]
    fn test_keyboard_entry() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.open_dialog(ActiveDialog::AddTransaction);

        type_str(&mut app, "Taxi");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "-120");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.transaction_form.category, Category::Transport);

        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        let txn = &app.view.transactions[0];
        assert_eq!(txn.text, "Taxi");
        assert_eq!(txn.amount.cents(), -12_000);
        assert_eq!(txn.category, Category::Transport);
    }

    #[test]
    fn test_category_wraps() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.open_dialog(ActiveDialog::AddTransaction);
        app.transaction_form.set_focus(TransactionField::Category);

        press(&mut app, KeyCode::Left);
        assert_eq!(app.transaction_form.category, Category::Other);
    }

    #[test]
    fn test_typing_clears_error() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.open_dialog(ActiveDialog::AddTransaction);

        press(&mut app, KeyCode::Enter);
        assert!(app.transaction_form.error_message.is_some());

        type_str(&mut app, "x");
        assert!(app.transaction_form.error_message.is_none());
    }

    #[test]
    fn test_escape_closes() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.open_dialog(ActiveDialog::AddTransaction);
        assert!(press(&mut app, KeyCode::Esc));
        assert!(!app.has_dialog());
    }
}
