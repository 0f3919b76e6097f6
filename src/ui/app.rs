use anyhow::Result;
use chrono::Local;

use crate::config::Config;
use crate::ledger::TransactionStore;
use crate::models::{Transaction, TransactionType, Window, MAX_AMOUNT};
use crate::summary::{self, DayTotal, Totals};
use crate::ui::util::{clamp_cursor, format_amount};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Transactions,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Transactions]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Transactions => write!(f, "Transactions"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    /// Filling in the add-transaction form.
    Editing,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Editing => write!(f, "ADD"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Description,
    Amount,
    Kind,
}

impl FormField {
    pub(crate) fn next(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::Kind,
            Self::Kind => Self::Description,
        }
    }

    pub(crate) fn prev(self) -> Self {
        match self {
            Self::Description => Self::Kind,
            Self::Amount => Self::Description,
            Self::Kind => Self::Amount,
        }
    }
}

/// Draft of a new transaction. Text is kept raw until submit.
#[derive(Debug, Clone)]
pub(crate) struct AddForm {
    pub(crate) description: String,
    pub(crate) amount: String,
    pub(crate) kind: TransactionType,
    pub(crate) field: FormField,
}

impl Default for AddForm {
    fn default() -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            kind: TransactionType::Expense,
            field: FormField::Description,
        }
    }
}

impl AddForm {
    /// The text buffer under the cursor, if the focused field is free text.
    pub(crate) fn input_mut(&mut self) -> Option<&mut String> {
        match self.field {
            FormField::Description => Some(&mut self.description),
            FormField::Amount => Some(&mut self.amount),
            FormField::Kind => None,
        }
    }

    /// Reset the text fields but remember the last chosen type.
    pub(crate) fn clear(&mut self) {
        self.description.clear();
        self.amount.clear();
        self.field = FormField::Description;
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    DeleteTransaction { id: i64, description: String },
}

pub(crate) struct App {
    pub(crate) config: Config,
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    // Filtered view
    pub(crate) window: Window,
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) totals: Totals,
    pub(crate) daily: Vec<DayTotal>,
    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,
    pub(crate) transaction_count: usize,

    pub(crate) form: AddForm,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(config: Config) -> Self {
        Self {
            config,
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            window: Window::All,
            transactions: Vec::new(),
            totals: Totals::default(),
            daily: Vec::new(),
            transaction_index: 0,
            transaction_scroll: 0,
            transaction_count: 0,

            form: AddForm::default(),

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    /// Recompute the filtered view and totals from the store.
    pub(crate) fn refresh(&mut self, store: &TransactionStore) {
        let now = Local::now();
        let summary = summary::summarize(store.transactions(), self.window, &now);
        self.daily = summary::daily_totals(summary.transactions.iter().copied(), &Local);
        self.totals = summary.totals;
        self.transactions = summary.transactions.into_iter().cloned().collect();
        self.transaction_count = store.len();
        clamp_cursor(
            &mut self.transaction_index,
            &mut self.transaction_scroll,
            self.transactions.len(),
        );
    }

    pub(crate) fn set_window(&mut self, window: Window, store: &TransactionStore) {
        self.window = window;
        self.transaction_index = 0;
        self.transaction_scroll = 0;
        self.refresh(store);
        self.set_status(format!(
            "Showing {} ({} transactions)",
            window.to_string().to_lowercase(),
            self.transactions.len()
        ));
    }

    pub(crate) fn open_form(&mut self) {
        self.form.clear();
        self.input_mode = InputMode::Editing;
    }

    /// Hand the draft to the store. Invalid drafts stay open for correction.
    pub(crate) fn submit_form(&mut self, store: &mut TransactionStore) -> Result<()> {
        let added = store.add(&self.form.description, &self.form.amount, self.form.kind)?;
        match added {
            Some(txn) => {
                self.form.clear();
                self.input_mode = InputMode::Normal;
                self.refresh(store);
                self.set_status(format!(
                    "Added {}: {} {}",
                    txn.kind.as_str(),
                    txn.description,
                    format_amount(txn.amount, &self.config.currency)
                ));
            }
            None => {
                self.set_status(format!(
                    "Enter a description and an amount between 0 and {}",
                    format_amount(MAX_AMOUNT, &self.config.currency)
                ));
            }
        }
        Ok(())
    }

    pub(crate) fn selected_transaction(&self) -> Option<&Transaction> {
        self.transactions.get(self.transaction_index)
    }

    pub(crate) fn request_delete(&mut self) {
        let Some(txn) = self.selected_transaction() else {
            self.set_status("No transaction selected");
            return;
        };
        let (id, description) = (txn.id, txn.description.clone());
        self.confirm_message = format!("Delete '{description}'?");
        self.pending_action = Some(PendingAction::DeleteTransaction { id, description });
        self.input_mode = InputMode::Confirm;
    }

    pub(crate) fn confirm_pending(&mut self, store: &mut TransactionStore) -> Result<()> {
        if let Some(action) = self.pending_action.take() {
            match action {
                PendingAction::DeleteTransaction { id, description } => {
                    store.remove(id)?;
                    self.refresh(store);
                    self.set_status(format!("Deleted: {description}"));
                }
            }
        }
        self.input_mode = InputMode::Normal;
        self.confirm_message.clear();
        Ok(())
    }

    pub(crate) fn cancel_pending(&mut self) {
        self.pending_action = None;
        self.input_mode = InputMode::Normal;
        self.confirm_message.clear();
        self.set_status("Cancelled");
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
