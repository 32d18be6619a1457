//! Light and dark colour palettes
//!
//! Every view takes its colours from the active [`Theme`]; toggling swaps the
//! palette and nothing else.

use ratatui::style::{Color, Modifier, Style};

use crate::config::settings::ThemeMode;

/// Colour palette for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub income: Color,
    pub expense: Color,
    pub warning: Color,
    pub selection: Color,
}

impl Theme {
    pub const fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            background: Color::Rgb(245, 245, 245),
            foreground: Color::Rgb(33, 33, 33),
            muted: Color::Rgb(117, 117, 117),
            border: Color::Rgb(189, 189, 189),
            accent: Color::Rgb(21, 101, 192),
            income: Color::Rgb(46, 125, 50),
            expense: Color::Rgb(198, 40, 40),
            warning: Color::Rgb(230, 81, 0),
            selection: Color::Rgb(224, 224, 224),
        }
    }

    pub const fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            background: Color::Rgb(18, 18, 18),
            foreground: Color::Rgb(224, 224, 224),
            muted: Color::Rgb(144, 144, 144),
            border: Color::Rgb(66, 66, 66),
            accent: Color::Rgb(100, 181, 246),
            income: Color::Rgb(129, 199, 132),
            expense: Color::Rgb(229, 115, 115),
            warning: Color::Rgb(255, 183, 77),
            selection: Color::Rgb(48, 48, 48),
        }
    }

    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// The other palette
    pub fn toggled(&self) -> Self {
        Self::from_mode(self.mode.toggled())
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    /// Plain text on the theme background
    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for an amount: income colour unless negative
    pub fn amount_style(&self, negative: bool) -> Style {
        Style::default().fg(if negative { self.expense } else { self.income })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
