//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog or to the main view bindings.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App};
use super::event::Event;
use super::keybindings::{action_for, Action};

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    if let Some(action) = action_for(key.code) {
        perform(app, action);
    }
    Ok(())
}

/// Run a main view action
pub fn perform(app: &mut App, action: Action) {
    match action {
        Action::AddTransaction => app.open_dialog(ActiveDialog::AddTransaction),
        Action::SetBudget => app.open_dialog(ActiveDialog::SetBudget),
        Action::ExportCsv => app.export_csv(),
        Action::ToggleTheme => app.toggle_theme(),
        Action::ScrollDown => app.scroll_down(),
        Action::ScrollUp => app.scroll_up(),
        Action::ScrollTop => app.scroll_top(),
        Action::ScrollBottom => app.scroll_bottom(),
        Action::Help => app.open_dialog(ActiveDialog::Help),
        Action::Quit => app.quit(),
    }
}

/// Handle keys when a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::Help => {
            // Close help on any key
            app.close_dialog();
        }
        ActiveDialog::AddTransaction => {
            super::dialogs::transaction::handle_key(app, key);
        }
        ActiveDialog::SetBudget => {
            super::dialogs::budget::handle_key(app, key);
        }
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_main_view_keys() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        handle_event(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::AddTransaction);

        // Typing inside the dialog does not trigger main view bindings
        handle_event(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(!app.should_quit);
        assert_eq!(app.transaction_form.text_input.value(), "q");

        handle_event(&mut app, key(KeyCode::Esc)).unwrap();
        handle_event(&mut app, key(KeyCode::Char('d'))).unwrap();
        assert!(app.theme.is_dark());

        handle_event(&mut app, key(KeyCode::Char('?'))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        handle_event(&mut app, key(KeyCode::Char('x'))).unwrap();
        assert!(!app.has_dialog());

        handle_event(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_dialog() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.open_dialog(ActiveDialog::SetBudget);

        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
    }
}
