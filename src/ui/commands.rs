use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::LazyLock;

use chrono::Local;

use super::app::{App, InputMode, Screen};
use crate::config::shellexpand;
use crate::export::{CsvExporter, ReportExporter};
use crate::ledger::TransactionStore;
use crate::models::{TransactionType, Window};
use crate::summary;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut TransactionStore) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit", cmd_quit, r);
    register_command!("quit", "Quit", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("t", "Go to Transactions", cmd_transactions, r);
    register_command!("transactions", "Go to Transactions", cmd_transactions, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "add",
        "Add transaction (e.g. :add expense 50000 Lunch)",
        cmd_add,
        r
    );
    register_command!("a", "Add transaction (e.g. :a income 5000000 Salary)", cmd_add, r);
    register_command!(
        "filter",
        "Set period: all, daily, weekly, monthly, yearly",
        cmd_filter,
        r
    );
    register_command!("f", "Set period (e.g. :f weekly)", cmd_filter, r);
    register_command!("delete-txn", "Delete selected transaction", cmd_delete_txn, r);
    register_command!(
        "export",
        "Export current view to CSV (e.g. :export ~/cash.csv)",
        cmd_export,
        r
    );
    register_command!(
        "report",
        "Write current view as a text report (e.g. :report ~/cash.txt)",
        cmd_report,
        r
    );

    r
});

pub(crate) fn handle_command(
    input: &str,
    app: &mut App,
    store: &mut TransactionStore,
) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, store)?;
    } else {
        app.set_status(format!("Unknown command: :{cmd_name}. Try :help"));
    }

    Ok(())
}

fn cmd_quit(_args: &str, app: &mut App, _store: &mut TransactionStore) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, store: &mut TransactionStore) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    app.refresh(store);
    Ok(())
}

fn cmd_transactions(
    _args: &str,
    app: &mut App,
    store: &mut TransactionStore,
) -> anyhow::Result<()> {
    app.screen = Screen::Transactions;
    app.refresh(store);
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _store: &mut TransactionStore) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

/// `:add <income|expense> <amount> <description...>`; no arguments opens the form.
fn cmd_add(args: &str, app: &mut App, store: &mut TransactionStore) -> anyhow::Result<()> {
    if args.is_empty() {
        app.open_form();
        return Ok(());
    }

    let parts: Vec<&str> = args.splitn(3, ' ').collect();
    if parts.len() < 3 {
        app.set_status("Usage: :add <income|expense> <amount> <description>");
        return Ok(());
    }

    let Some(kind) = TransactionType::parse(parts[0]) else {
        app.set_status(format!("Unknown type '{}'. Use income or expense", parts[0]));
        return Ok(());
    };

    app.form.description = parts[2].to_string();
    app.form.amount = parts[1].to_string();
    app.form.kind = kind;
    app.submit_form(store)?;
    app.input_mode = InputMode::Normal;
    Ok(())
}

fn cmd_filter(args: &str, app: &mut App, store: &mut TransactionStore) -> anyhow::Result<()> {
    let window = if args.is_empty() {
        app.window.next()
    } else {
        Window::parse(args)
    };
    app.set_window(window, store);
    Ok(())
}

fn cmd_delete_txn(
    _args: &str,
    app: &mut App,
    _store: &mut TransactionStore,
) -> anyhow::Result<()> {
    if app.screen != Screen::Transactions || app.transactions.is_empty() {
        app.set_status("Navigate to Transactions and select one first");
        return Ok(());
    }
    app.request_delete();
    Ok(())
}

fn cmd_export(args: &str, app: &mut App, store: &mut TransactionStore) -> anyhow::Result<()> {
    let path = export_path(args, app, "csv");
    let summary = summary::summarize(store.transactions(), app.window, &Local::now());
    match CsvExporter::export(&path, &summary) {
        Ok(0) => app.set_status(format!("No transactions to export, wrote header to {}", path.display())),
        Ok(count) => app.set_status(format!("Exported {count} transactions to {}", path.display())),
        Err(e) => {
            tracing::warn!(error = %e, "CSV export failed");
            app.set_status(format!("Export failed: {e:#}"));
        }
    }
    Ok(())
}

fn cmd_report(args: &str, app: &mut App, store: &mut TransactionStore) -> anyhow::Result<()> {
    let path = export_path(args, app, "txt");
    let summary = summary::summarize(store.transactions(), app.window, &Local::now());
    match ReportExporter::export(&path, &summary, &app.config.currency) {
        Ok(()) => app.set_status(format!("Report written to {}", path.display())),
        Err(e) => {
            tracing::warn!(error = %e, "report export failed");
            app.set_status(format!("Report failed: {e:#}"));
        }
    }
    Ok(())
}

fn export_path(args: &str, app: &App, ext: &str) -> PathBuf {
    if args.is_empty() {
        PathBuf::from(app.config.default_export_path(app.window.as_str(), ext))
    } else {
        PathBuf::from(shellexpand(args))
    }
}
