//! One-shot writers for a filtered view: a CSV spreadsheet and a plain-text report.

mod csv_export;
mod report;

pub(crate) use csv_export::CsvExporter;
pub(crate) use report::ReportExporter;

use chrono::{DateTime, Local, Utc};

/// Dates are shown in local time, minute precision.
pub(crate) fn display_date(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}
