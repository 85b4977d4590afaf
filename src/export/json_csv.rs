// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::{headers, session_to_json, table_to_rows};
use crate::export::notify_export_success;
use crate::models::{ClassifiedEvent, SessionTable};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export sessions as pretty-printed JSON.
pub(crate) fn export_json(table: &SessionTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let rows: Vec<_> = table
        .sessions
        .iter()
        .map(|s| session_to_json(table, s))
        .collect();
    let json_data = serde_json::to_string_pretty(&rows)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export sessions as a wide CSV: fixed columns + one per category.
pub(crate) fn export_csv(table: &SessionTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(headers(table))?;

    for row in table_to_rows(table) {
        wtr.write_record(row.iter().map(|c| c.to_text()))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Export classified events (header from serde).
pub(crate) fn export_classified_csv(events: &[ClassifiedEvent], path: &Path) -> AppResult<()> {
    info(format!("Exporting classified events: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    if events.is_empty() {
        wtr.write_record(["user", "url", "visit_time", "domain", "category"])?;
    }
    for ev in events {
        wtr.serialize(ev)?;
    }
    wtr.flush()?;

    notify_export_success("Events CSV", path);
    Ok(())
}
