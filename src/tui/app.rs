//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! It owns the session's [`Tracker`]; the view snapshot is refreshed through
//! the tracker's sink after every mutation.

use tracing::{error, info};

use crate::config::settings::Settings;
use crate::display::format_budget_set;
use crate::export::save_transactions_csv;
use crate::services::{Summary, Tracker};

use super::dialogs::budget::BudgetFormState;
use super::dialogs::transaction::{TransactionField, TransactionFormState};
use super::theme::Theme;
use super::views::LedgerView;
use super::widgets::{Notification, NotificationQueue};

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddTransaction,
    SetBudget,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Session state store
    pub tracker: Tracker,

    /// Snapshot drawn by the views
    pub view: LedgerView,

    /// Active colour palette
    pub theme: Theme,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the transaction list
    pub selected_index: usize,

    /// Transaction form state
    pub transaction_form: TransactionFormState,

    /// Budget dialog state
    pub budget_form: BudgetFormState,

    /// Toasts waiting to be shown
    pub notifications: NotificationQueue,
}

impl<'a> App<'a> {
    /// Create a new App instance with an empty ledger
    pub fn new(settings: &'a Settings) -> Self {
        let mut app = Self {
            settings,
            tracker: Tracker::new(),
            view: LedgerView::default(),
            theme: Theme::from_mode(settings.theme),
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            transaction_form: TransactionFormState::new(),
            budget_form: BudgetFormState::new(),
            notifications: NotificationQueue::new(),
        };
        app.tracker.refresh(&mut app.view);
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        match dialog {
            ActiveDialog::AddTransaction => {
                self.transaction_form.clear_error();
                self.transaction_form.set_focus(TransactionField::Text);
            }
            ActiveDialog::SetBudget => {
                self.budget_form = BudgetFormState::with_budget(self.tracker.budget());
            }
            ActiveDialog::Help | ActiveDialog::None => {}
        }
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Periodic housekeeping
    pub fn tick(&mut self) {
        self.notifications.remove_expired();
    }

    /// Submit the transaction form
    ///
    /// On success the text and amount are cleared and the dialog closes. On
    /// failure the dialog stays open with the input intact.
    pub fn submit_transaction(&mut self) {
        let input = self.transaction_form.to_input();
        match self.tracker.submit_transaction(&input, &mut self.view) {
            Ok(summary) => {
                self.transaction_form.reset_after_submit();
                self.close_dialog();
                self.selected_index = self.view.transactions.len().saturating_sub(1);
                self.notify(Notification::success(format!("Added '{}'", input.text.trim())));
                self.warn_if_exceeded(&summary);
            }
            Err(err) => {
                let message = err.to_string();
                self.transaction_form.set_error(message.clone());
                self.notify(Notification::error(message));
            }
        }
    }

    /// Submit the budget dialog
    pub fn submit_budget(&mut self) {
        let value = self.budget_form.amount_input.value().to_string();
        match self.tracker.set_budget(&value, &mut self.view) {
            Ok(budget) => {
                self.close_dialog();
                self.notify(Notification::success(format_budget_set(
                    budget,
                    &self.settings.currency_symbol,
                )));
                let summary = self.view.summary;
                self.warn_if_exceeded(&summary);
            }
            Err(err) => {
                let message = err.to_string();
                self.budget_form.set_error(message.clone());
                self.notify(Notification::error(message));
            }
        }
    }

    fn warn_if_exceeded(&mut self, summary: &Summary) {
        if let Some(message) = summary.warning.message(&self.settings.currency_symbol) {
            self.notify(Notification::warning(message));
        }
    }

    /// Write the ledger to the configured export path
    pub fn export_csv(&mut self) {
        let path = self.settings.export_path();
        match save_transactions_csv(self.tracker.transactions(), &path) {
            Ok(written) => {
                self.notify(Notification::success(format!(
                    "Exported {} transactions to {}",
                    self.tracker.transactions().len(),
                    written.display()
                )));
            }
            Err(err) => {
                error!(error = %err, "export failed");
                self.notify(Notification::error(err.to_string()));
            }
        }
    }

    /// Switch between the light and dark palettes
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        info!(theme = ?self.theme.mode, "theme toggled");
        let label = if self.theme.is_dark() { "on" } else { "off" };
        self.notify(Notification::info(format!("Dark mode {}", label)));
    }

    pub fn scroll_down(&mut self) {
        let max = self.view.transactions.len().saturating_sub(1);
        self.selected_index = (self.selected_index + 1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn scroll_top(&mut self) {
        self.selected_index = 0;
    }

    pub fn scroll_bottom(&mut self) {
        self.selected_index = self.view.transactions.len().saturating_sub(1);
    }
}
