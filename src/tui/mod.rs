//! Terminal User Interface module
//!
//! The interactive tracker: summary cards, transaction list, income versus
//! expense chart, add-transaction and budget dialogs, and a dark mode toggle.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;
pub mod theme;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
