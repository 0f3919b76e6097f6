use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use super::display_date;
use crate::summary::Summary;

pub(crate) const CSV_HEADER: [&str; 4] = ["date", "description", "type", "amount"];

pub(crate) struct CsvExporter;

impl CsvExporter {
    /// Write one row per visible transaction. Returns the number of rows.
    pub(crate) fn write<W: Write>(writer: W, summary: &Summary<'_>) -> Result<usize> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(CSV_HEADER)
            .context("Failed to write CSV header")?;

        for txn in &summary.transactions {
            wtr.write_record([
                display_date(&txn.date),
                txn.description.clone(),
                txn.kind.as_str().to_string(),
                txn.amount.to_string(),
            ])
            .with_context(|| format!("Failed to write CSV row for transaction {}", txn.id))?;
        }

        wtr.flush().context("Failed to flush CSV output")?;
        Ok(summary.transactions.len())
    }

    pub(crate) fn export(path: &Path, summary: &Summary<'_>) -> Result<usize> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let count = Self::write(file, summary)?;
        tracing::info!(path = %path.display(), count, window = summary.window.as_str(), "exported CSV");
        Ok(count)
    }
}
