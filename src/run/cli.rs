use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;

use crate::config::{shellexpand, Config};
use crate::export::{display_date, CsvExporter, ReportExporter};
use crate::ledger::TransactionStore;
use crate::models::{TransactionType, Window, MAX_AMOUNT};
use crate::summary::{self, Summary};
use crate::ui::util::{format_amount, truncate};

pub(crate) fn as_cli(args: &[String], config: &Config, store: &mut TransactionStore) -> Result<()> {
    match args[1].as_str() {
        "add" => cli_add(&args[2..], config, store),
        "remove" | "rm" => cli_remove(&args[2..], config, store),
        "list" | "ls" => cli_list(&args[2..], config, store),
        "summary" | "s" => cli_summary(&args[2..], config, store),
        "export" => cli_export(&args[2..], config, store),
        "report" => cli_report(&args[2..], config, store),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("cashbook {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Cashbook: local personal income and expense tracker");
    println!();
    println!("Usage: cashbook [command]");
    println!();
    println!("Commands:");
    println!("  (none)                          Launch interactive TUI");
    println!("  add <description> <amount>      Record a transaction (default: expense)");
    println!("    --income | --expense          Transaction type");
    println!("  remove <id>                     Delete a transaction by id");
    println!("  list [window]                   List transactions, newest first");
    println!("  summary [window]                Print income, expense and balance");
    println!("  export [path]                   Export transactions to CSV");
    println!("    --filter <window>             Period to export (default: all)");
    println!("  report [path]                   Write a plain-text report");
    println!("    --filter <window>             Period to report (default: all)");
    println!("  --help, -h                      Show this help");
    println!("  --version, -V                   Show version");
    println!();
    println!("Windows: all, daily, weekly, monthly, yearly");
}

/// Arguments that are neither flags nor the value of `--filter`.
fn positional(args: &[String]) -> Vec<&str> {
    let mut out = Vec::new();
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "--filter" {
            skip_next = true;
        } else if !arg.starts_with("--") {
            out.push(arg.as_str());
        }
    }
    out
}

fn filter_flag(args: &[String]) -> Window {
    args.windows(2)
        .find(|w| w[0] == "--filter")
        .map(|w| Window::parse(&w[1]))
        .unwrap_or_default()
}

fn cli_add(args: &[String], config: &Config, store: &mut TransactionStore) -> Result<()> {
    let kind = if args.iter().any(|a| a == "--income") {
        TransactionType::Income
    } else {
        TransactionType::Expense
    };

    let words = positional(args);
    let Some((amount, description)) = words.split_last() else {
        anyhow::bail!("Usage: cashbook add <description> <amount> [--income|--expense]");
    };
    if description.is_empty() {
        anyhow::bail!("Usage: cashbook add <description> <amount> [--income|--expense]");
    }
    let description = description.join(" ");

    match store.add(&description, amount, kind).context("Failed to save transaction")? {
        Some(txn) => {
            println!(
                "Added {} #{}: {} {}",
                txn.kind.as_str(),
                txn.id,
                txn.description,
                format_amount(txn.amount, &config.currency)
            );
            Ok(())
        }
        None => anyhow::bail!(
            "Not added: description must not be blank and amount must be between 0 and {}",
            format_amount(MAX_AMOUNT, &config.currency)
        ),
    }
}

fn cli_remove(args: &[String], config: &Config, store: &mut TransactionStore) -> Result<()> {
    let Some(raw) = args.first() else {
        anyhow::bail!("Usage: cashbook remove <id>");
    };
    let id: i64 = raw
        .parse()
        .with_context(|| format!("Invalid transaction id: {raw}"))?;

    if store.get(id).is_none() {
        println!("No transaction with id {id}");
        return Ok(());
    }
    if let Some(txn) = store.remove(id).context("Failed to save transactions")? {
        println!(
            "Removed #{}: {} {}",
            txn.id,
            txn.description,
            format_amount(txn.amount, &config.currency)
        );
    }
    Ok(())
}

fn window_arg(args: &[String]) -> Window {
    args.first().map(|a| Window::parse(a)).unwrap_or_default()
}

fn cli_list(args: &[String], config: &Config, store: &mut TransactionStore) -> Result<()> {
    let window = window_arg(args);
    let summary = summary::summarize(store.transactions(), window, &Local::now());
    if summary.transactions.is_empty() {
        println!("No transactions for {}", window.to_string().to_lowercase());
        return Ok(());
    }

    println!(
        "{:<14} {:<16} {:<30} {:<8} {:>20}",
        "ID", "Date", "Description", "Type", "Amount"
    );
    println!("{}", "─".repeat(92));
    for txn in &summary.transactions {
        println!(
            "{:<14} {:<16} {:<30} {:<8} {:>20}",
            txn.id,
            display_date(&txn.date),
            truncate(&txn.description, 30),
            txn.kind.to_string(),
            format_amount(txn.amount, &config.currency)
        );
    }
    Ok(())
}

fn cli_summary(args: &[String], config: &Config, store: &mut TransactionStore) -> Result<()> {
    let window = window_arg(args);
    let summary = summary::summarize(store.transactions(), window, &Local::now());
    print_summary(&summary, &config.currency);
    Ok(())
}

fn print_summary(summary: &Summary<'_>, currency: &str) {
    println!("Cashbook: {}", summary.window);
    println!("{}", "─".repeat(40));
    println!("  Income:     {}", format_amount(summary.totals.income, currency));
    println!("  Expense:    {}", format_amount(summary.totals.expense, currency));
    println!("  Balance:    {}", format_amount(summary.totals.balance, currency));
    println!("  Total Txns: {}", summary.transactions.len());
}

fn output_path(args: &[String], config: &Config, window: Window, ext: &str) -> PathBuf {
    positional(args)
        .first()
        .map(|p| PathBuf::from(shellexpand(p)))
        .unwrap_or_else(|| PathBuf::from(config.default_export_path(window.as_str(), ext)))
}

fn cli_export(args: &[String], config: &Config, store: &mut TransactionStore) -> Result<()> {
    let window = filter_flag(args);
    let path = output_path(args, config, window, "csv");
    let summary = summary::summarize(store.transactions(), window, &Local::now());

    let count = CsvExporter::export(&path, &summary)?;
    if count == 0 {
        println!(
            "No transactions for {}; wrote header only to {}",
            window.to_string().to_lowercase(),
            path.display()
        );
    } else {
        println!("Exported {count} transactions to {}", path.display());
    }
    Ok(())
}

fn cli_report(args: &[String], config: &Config, store: &mut TransactionStore) -> Result<()> {
    let window = filter_flag(args);
    let path = output_path(args, config, window, "txt");
    let summary = summary::summarize(store.transactions(), window, &Local::now());

    ReportExporter::export(&path, &summary, &config.currency)?;
    println!("Report written to {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
