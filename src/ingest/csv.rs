// src/ingest/csv.rs

use crate::errors::{AppError, AppResult};
use crate::models::Event;
use crate::utils::time::parse_visit_time;
use csv::{ReaderBuilder, StringRecord};
use log::{debug, warn};
use std::path::Path;

/// Events read from one or more files, plus the rows that had to be dropped.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub events: Vec<Event>,
    pub skipped: usize,
}

fn column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
}

fn required_column(headers: &StringRecord, name: &str, path: &Path) -> AppResult<usize> {
    column(headers, name).ok_or_else(|| AppError::MissingColumn {
        column: name.to_string(),
        path: path.display().to_string(),
    })
}

/// Read browsing events from a CSV export.
///
/// The file needs `url` and `visit_time` columns; a `user` column, when
/// present, overrides `user_label` per row. Rows whose timestamp cannot be
/// parsed are skipped and counted, a missing URL is kept as empty.
pub fn load_events(path: &Path, user_label: &str, extra_formats: &[String]) -> AppResult<LoadReport> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = rdr.headers()?.clone();

    let time_idx = required_column(&headers, "visit_time", path)?;
    let url_idx = required_column(&headers, "url", path)?;
    let user_idx = column(&headers, "user");

    let mut report = LoadReport::default();

    for (line, record) in rdr.records().enumerate() {
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                warn!("{}: row {} unreadable: {e}", path.display(), line + 2);
                report.skipped += 1;
                continue;
            }
        };

        let raw_time = record.get(time_idx).unwrap_or("");
        let visit_time = match parse_visit_time(raw_time, extra_formats) {
            Ok(t) => t,
            Err(e) => {
                warn!("{}: row {} skipped: {e}", path.display(), line + 2);
                report.skipped += 1;
                continue;
            }
        };

        let user = user_idx
            .and_then(|i| record.get(i))
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(user_label);

        let url = record.get(url_idx).unwrap_or("").trim();

        report.events.push(Event::new(user, url, visit_time));
    }

    debug!(
        "{}: {} events loaded, {} rows skipped",
        path.display(),
        report.events.len(),
        report.skipped
    );

    Ok(report)
}
