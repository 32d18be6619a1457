//! Keybinding definitions
//!
//! One table drives key dispatch in the main view, the help dialog and the
//! status bar hints.

use crossterm::event::KeyCode;

/// Actions available from the main view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddTransaction,
    SetBudget,
    ExportCsv,
    ToggleTheme,
    ScrollDown,
    ScrollUp,
    ScrollTop,
    ScrollBottom,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// Keys that trigger the action
    pub keys: &'static [KeyCode],
    /// Key label shown to the user
    pub label: &'static str,
    /// Description of what the key does
    pub description: &'static str,
    pub action: Action,
    /// Shown in the status bar
    pub hint: bool,
}

/// All main view keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    Keybinding {
        keys: &[KeyCode::Char('a'), KeyCode::Char('n')],
        label: "a",
        description: "Add transaction",
        action: Action::AddTransaction,
        hint: true,
    },
    Keybinding {
        keys: &[KeyCode::Char('b')],
        label: "b",
        description: "Set budget",
        action: Action::SetBudget,
        hint: true,
    },
    Keybinding {
        keys: &[KeyCode::Char('x')],
        label: "x",
        description: "Export transactions to CSV",
        action: Action::ExportCsv,
        hint: true,
    },
    Keybinding {
        keys: &[KeyCode::Char('d')],
        label: "d",
        description: "Toggle dark mode",
        action: Action::ToggleTheme,
        hint: true,
    },
    Keybinding {
        keys: &[KeyCode::Char('j'), KeyCode::Down],
        label: "j/↓",
        description: "Scroll down",
        action: Action::ScrollDown,
        hint: false,
    },
    Keybinding {
        keys: &[KeyCode::Char('k'), KeyCode::Up],
        label: "k/↑",
        description: "Scroll up",
        action: Action::ScrollUp,
        hint: false,
    },
    Keybinding {
        keys: &[KeyCode::Char('g'), KeyCode::Home],
        label: "g",
        description: "Go to first transaction",
        action: Action::ScrollTop,
        hint: false,
    },
    Keybinding {
        keys: &[KeyCode::Char('G'), KeyCode::End],
        label: "G",
        description: "Go to last transaction",
        action: Action::ScrollBottom,
        hint: false,
    },
    Keybinding {
        keys: &[KeyCode::Char('?')],
        label: "?",
        description: "Show help",
        action: Action::Help,
        hint: true,
    },
    Keybinding {
        keys: &[KeyCode::Char('q'), KeyCode::Char('Q')],
        label: "q",
        description: "Quit",
        action: Action::Quit,
        hint: true,
    },
];

/// Look up the action bound to a key
pub fn action_for(key: KeyCode) -> Option<Action> {
    KEYBINDINGS
        .iter()
        .find(|binding| binding.keys.contains(&key))
        .map(|binding| binding.action)
}

/// Bindings shown in the status bar
pub fn hints() -> impl Iterator<Item = &'static Keybinding> {
    KEYBINDINGS.iter().filter(|binding| binding.hint)
}

/// Keys available inside the form dialogs, for the help screen
pub static FORM_KEYS: &[(&str, &str)] = &[
    ("Tab", "Next field"),
    ("Shift+Tab", "Previous field"),
    ("←/→", "Change category (on the category field)"),
    ("Enter", "Submit"),
    ("Esc", "Cancel"),
];
