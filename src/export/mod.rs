// src/export/mod.rs

mod excel_date;
mod fs_utils;
mod json_csv;
mod model;
mod xlsx;

pub(crate) use fs_utils::ensure_writable;

use crate::errors::AppResult;
use crate::models::{ClassifiedEvent, SessionTable};
use crate::ui::messages::{success, warning};
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every writer.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_string_lossy().to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            "xlsx" => Some(ExportFormat::Xlsx),
            _ => None,
        }
    }
}

/// Write the session summary table in the requested format.
pub fn write_sessions(table: &SessionTable, format: ExportFormat, path: &Path, force: bool) -> AppResult<()> {
    ensure_writable(path, force)?;

    if table.is_empty() {
        warning("No sessions to export, writing an empty table.");
    }

    match format {
        ExportFormat::Csv => json_csv::export_csv(table, path),
        ExportFormat::Json => json_csv::export_json(table, path),
        ExportFormat::Xlsx => xlsx::export_xlsx(table, path),
    }
}

/// Write the per-event classification as CSV.
pub fn write_classified(events: &[ClassifiedEvent], path: &Path, force: bool) -> AppResult<()> {
    ensure_writable(path, force)?;
    json_csv::export_classified_csv(events, path)
}
