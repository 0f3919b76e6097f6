use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::io::Write;
use std::path::Path;

use super::display_date;
use crate::summary::Summary;
use crate::ui::util::{format_amount, truncate};

const DESCRIPTION_WIDTH: usize = 32;
const AMOUNT_WIDTH: usize = 20;

pub(crate) struct ReportExporter;

impl ReportExporter {
    /// Render a fixed-width table of the visible transactions followed by the totals.
    pub(crate) fn write<W: Write>(
        mut w: W,
        summary: &Summary<'_>,
        currency: &str,
        generated_at: DateTime<Local>,
    ) -> Result<()> {
        writeln!(w, "Cashbook Report")?;
        writeln!(w, "Period:    {}", summary.window)?;
        writeln!(w, "Generated: {}", generated_at.format("%Y-%m-%d %H:%M"))?;
        writeln!(w)?;

        writeln!(
            w,
            "{:<16}  {:<DESCRIPTION_WIDTH$}  {:<7}  {:>AMOUNT_WIDTH$}",
            "Date", "Description", "Type", "Amount"
        )?;
        writeln!(
            w,
            "{}  {}  {}  {}",
            "-".repeat(16),
            "-".repeat(DESCRIPTION_WIDTH),
            "-".repeat(7),
            "-".repeat(AMOUNT_WIDTH)
        )?;

        if summary.transactions.is_empty() {
            writeln!(w, "(no transactions)")?;
        }
        for txn in &summary.transactions {
            writeln!(
                w,
                "{:<16}  {:<DESCRIPTION_WIDTH$}  {:<7}  {:>AMOUNT_WIDTH$}",
                display_date(&txn.date),
                truncate(&txn.description, DESCRIPTION_WIDTH),
                txn.kind.to_string(),
                format_amount(txn.signed_amount(), currency),
            )?;
        }

        let totals = &summary.totals;
        writeln!(w)?;
        writeln!(w, "Income:    {}", format_amount(totals.income, currency))?;
        writeln!(w, "Expense:   {}", format_amount(totals.expense, currency))?;
        writeln!(w, "Balance:   {}", format_amount(totals.balance, currency))?;
        w.flush()?;
        Ok(())
    }

    pub(crate) fn export(path: &Path, summary: &Summary<'_>, currency: &str) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        Self::write(std::io::BufWriter::new(file), summary, currency, Local::now())?;
        tracing::info!(
            path = %path.display(),
            count = summary.transactions.len(),
            window = summary.window.as_str(),
            "exported report"
        );
        Ok(())
    }
}
