//! Text input field
//!
//! Line-editing state for a single form field. The cursor counts characters,
//! not bytes, so symbols like `₹` edit cleanly.

use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::tui::theme::Theme;

/// A single-line text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position in characters
    pub cursor: usize,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content and move the cursor to its end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.set_value(content);
        self
    }

    /// Replace content and move the cursor to its end
    pub fn set_value(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_len();
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Spans for the value, with a block cursor when focused
    pub fn spans(&self, focused: bool, theme: &Theme) -> Vec<Span<'static>> {
        let text_style = Style::default().fg(theme.foreground);

        if !focused {
            return if self.content.is_empty() {
                vec![Span::styled(self.placeholder.clone(), theme.muted_style())]
            } else {
                vec![Span::styled(self.content.clone(), text_style)]
            };
        }

        let split = self.byte_index(self.cursor);
        let (before, rest) = self.content.split_at(split);
        let mut chars = rest.chars();
        let under_cursor = chars.next().unwrap_or(' ');
        let after: String = chars.collect();

        vec![
            Span::styled(before.to_string(), text_style),
            Span::styled(
                under_cursor.to_string(),
                Style::default()
                    .fg(theme.background)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(after, text_style),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing() {
        let mut input = TextInput::new();
        for c in "Lunch".chars() {
            input.insert(c);
        }
        input.backspace();
        assert_eq!(input.value(), "Lunc");

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "unc");

        input.move_end();
        input.insert('h');
        assert_eq!(input.value(), "unch");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = TextInput::new().content("₹50");
        assert_eq!(input.cursor, 3);

        input.move_start();
        input.move_right();
        input.insert('1');
        assert_eq!(input.value(), "₹150");

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "150");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::new().content("ab");
        input.move_right();
        assert_eq!(input.cursor, 2);
        input.move_start();
        input.move_left();
        assert_eq!(input.cursor, 0);
        input.backspace();
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_spans_show_placeholder_when_empty() {
        let input = TextInput::new().placeholder("Enter text");
        let spans = input.spans(false, &Theme::light());
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "Enter text");
    }
}
