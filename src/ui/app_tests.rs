#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use rust_decimal_macros::dec;

use super::app::{App, FormField, InputMode, PendingAction, Screen};
use super::commands::handle_command;
use crate::config::Config;
use crate::ledger::TransactionStore;
use crate::models::{TransactionType, Window};
use crate::storage::MemoryStore;

fn setup() -> (App, TransactionStore) {
    let config = Config {
        data_dir: PathBuf::from("."),
        currency: "Rp".into(),
    };
    let store = TransactionStore::load(Box::new(MemoryStore::new()));
    let mut app = App::new(config);
    app.refresh(&store);
    (app, store)
}

fn fill_form(app: &mut App, description: &str, amount: &str, kind: TransactionType) {
    app.open_form();
    app.form.description = description.into();
    app.form.amount = amount.into();
    app.form.kind = kind;
}

#[test]
fn test_submit_form_adds_and_refreshes() {
    let (mut app, mut store) = setup();
    fill_form(&mut app, "Salary", "5000000", TransactionType::Income);
    app.submit_form(&mut store).unwrap();

    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.transactions.len(), 1);
    assert_eq!(app.totals.income, dec!(5000000));
    assert_eq!(app.totals.balance, dec!(5000000));
    assert!(app.status_message.contains("Rp 5.000.000,00"));
    assert!(app.form.description.is_empty());
}

#[test]
fn test_submit_invalid_form_stays_open() {
    let (mut app, mut store) = setup();
    fill_form(&mut app, "   ", "1000", TransactionType::Expense);
    app.submit_form(&mut store).unwrap();

    assert_eq!(app.input_mode, InputMode::Editing);
    assert!(store.transactions().is_empty());
    assert_eq!(app.form.amount, "1000");
}

#[test]
fn test_form_clear_keeps_kind() {
    let (mut app, _) = setup();
    fill_form(&mut app, "x", "1", TransactionType::Income);
    app.form.field = FormField::Kind;
    app.form.clear();

    assert_eq!(app.form.kind, TransactionType::Income);
    assert_eq!(app.form.field, FormField::Description);
    assert!(app.form.input_mut().is_some());
}

#[test]
fn test_set_window_resets_cursor() {
    let (mut app, mut store) = setup();
    store.add("Coffee", "18000", TransactionType::Expense).unwrap();
    store.add("Lunch", "25000", TransactionType::Expense).unwrap();
    app.refresh(&store);
    app.transaction_index = 1;

    app.set_window(Window::Daily, &store);
    assert_eq!(app.window, Window::Daily);
    assert_eq!(app.transaction_index, 0);
    assert_eq!(app.transactions.len(), 2);
    assert_eq!(app.totals.expense, dec!(43000));
}

#[test]
fn test_delete_flow() {
    let (mut app, mut store) = setup();
    store.add("Coffee", "18000", TransactionType::Expense).unwrap();
    app.refresh(&store);
    app.screen = Screen::Transactions;

    app.request_delete();
    assert_eq!(app.input_mode, InputMode::Confirm);
    assert!(matches!(
        app.pending_action,
        Some(PendingAction::DeleteTransaction { .. })
    ));

    app.confirm_pending(&mut store).unwrap();
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(store.transactions().is_empty());
    assert!(app.transactions.is_empty());
    assert_eq!(app.totals.balance, dec!(0));
}

#[test]
fn test_cancel_delete_keeps_transaction() {
    let (mut app, mut store) = setup();
    store.add("Coffee", "18000", TransactionType::Expense).unwrap();
    app.refresh(&store);

    app.request_delete();
    app.cancel_pending();
    assert!(app.pending_action.is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_request_delete_without_selection() {
    let (mut app, _) = setup();
    app.request_delete();
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.pending_action.is_none());
}

#[test]
fn test_command_add_and_filter() {
    let (mut app, mut store) = setup();
    handle_command("add income 5000000 Monthly salary", &mut app, &mut store).unwrap();
    handle_command("add expense 50000 Lunch", &mut app, &mut store).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.transactions()[1].description, "Monthly salary");
    assert_eq!(app.totals.balance, dec!(4950000));

    handle_command("filter monthly", &mut app, &mut store).unwrap();
    assert_eq!(app.window, Window::Monthly);
    handle_command("f", &mut app, &mut store).unwrap();
    assert_eq!(app.window, Window::Yearly);
}

#[test]
fn test_command_add_without_args_opens_form() {
    let (mut app, mut store) = setup();
    handle_command("add", &mut app, &mut store).unwrap();
    assert_eq!(app.input_mode, InputMode::Editing);
}

#[test]
fn test_unknown_command_sets_status() {
    let (mut app, mut store) = setup();
    handle_command("bogus", &mut app, &mut store).unwrap();
    assert!(app.status_message.contains("Unknown command"));
}

#[test]
fn test_export_command_writes_csv() {
    let (mut app, mut store) = setup();
    store.add("Coffee", "18000", TransactionType::Expense).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("view.csv");

    handle_command(&format!("export {}", path.display()), &mut app, &mut store).unwrap();
    assert!(app.status_message.starts_with("Exported 1"));
    assert!(path.exists());
}

#[test]
fn test_quit_command() {
    let (mut app, mut store) = setup();
    handle_command("q", &mut app, &mut store).unwrap();
    assert!(!app.running);
}
