//! Browser history extraction (Chrome and Safari SQLite databases).
//!
//! Browsers keep their history database locked while running, so the file is
//! copied to the temp directory and read from the copy.

use crate::errors::{AppError, AppResult};
use crate::utils::time::{chrome_time_to_datetime, format_timestamp, safari_time_to_datetime};
use chrono::NaiveDateTime;
use clap::ValueEnum;
use log::{debug, info, warn};
use rusqlite::{Connection, OpenFlags};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static SNAPSHOT_SEQ: AtomicUsize = AtomicUsize::new(0);

const CHROME_QUERY: &str = "
    SELECT urls.url, urls.title, visits.visit_time
    FROM urls
    JOIN visits ON urls.id = visits.url
    ORDER BY visits.visit_time DESC";

const SAFARI_QUERY: &str = "
    SELECT history_items.url, history_visits.title, history_visits.visit_time
    FROM history_items
    JOIN history_visits ON history_items.id = history_visits.history_item
    ORDER BY history_visits.visit_time DESC";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Browser {
    Chrome,
    Safari,
}

impl Browser {
    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Safari => "safari",
        }
    }

    /// Default location of the history database for the current platform.
    pub fn default_source(&self) -> Option<PathBuf> {
        let home = dirs::home_dir()?;
        match self {
            Browser::Chrome if cfg!(target_os = "windows") => Some(
                home.join("AppData/Local/Google/Chrome/User Data/Default/History"),
            ),
            Browser::Chrome if cfg!(target_os = "macos") => Some(
                home.join("Library/Application Support/Google/Chrome/Default/History"),
            ),
            Browser::Chrome => Some(home.join(".config/google-chrome/Default/History")),
            Browser::Safari if cfg!(target_os = "macos") => {
                Some(home.join("Library/Safari/History.db"))
            }
            Browser::Safari => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryVisit {
    pub url: String,
    pub title: String,
    pub visit_time: NaiveDateTime,
}

fn read_visits(conn: &Connection, browser: Browser) -> AppResult<(Vec<HistoryVisit>, usize)> {
    let sql = match browser {
        Browser::Chrome => CHROME_QUERY,
        Browser::Safari => SAFARI_QUERY,
    };

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], |row| {
        let url: Option<String> = row.get(0)?;
        let title: Option<String> = row.get(1)?;
        let time = match browser {
            Browser::Chrome => row
                .get::<_, Option<i64>>(2)?
                .filter(|t| *t != 0)
                .and_then(chrome_time_to_datetime),
            Browser::Safari => row
                .get::<_, Option<f64>>(2)?
                .filter(|t| *t != 0.0)
                .and_then(safari_time_to_datetime),
        };
        Ok((url, title, time))
    })?;

    let mut visits = Vec::new();
    let mut skipped = 0;
    for row in rows {
        match row? {
            (url, title, Some(visit_time)) => visits.push(HistoryVisit {
                url: url.unwrap_or_default(),
                title: title.unwrap_or_default(),
                visit_time,
            }),
            _ => skipped += 1,
        }
    }

    Ok((visits, skipped))
}

/// Read all visits from a browser history database, most recent first.
pub fn extract(browser: Browser, source: &Path) -> AppResult<Vec<HistoryVisit>> {
    if !source.exists() {
        return Err(AppError::History(format!(
            "{} history not found at {}",
            browser.as_str(),
            source.display()
        )));
    }

    let snapshot = std::env::temp_dir().join(format!(
        "rsessionize_{}_history_{}_{}.db",
        browser.as_str(),
        std::process::id(),
        SNAPSHOT_SEQ.fetch_add(1, Ordering::Relaxed)
    ));
    fs::copy(source, &snapshot)?;
    debug!("copied {} to {}", source.display(), snapshot.display());

    let result = Connection::open_with_flags(&snapshot, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .map_err(AppError::from)
        .and_then(|conn| read_visits(&conn, browser));

    if let Err(e) = fs::remove_file(&snapshot) {
        warn!("could not remove snapshot {}: {e}", snapshot.display());
    }

    let (visits, skipped) = result?;
    if skipped > 0 {
        warn!("{skipped} visits without timestamp ignored");
    }
    info!("extracted {} {} visits", visits.len(), browser.as_str());
    Ok(visits)
}

/// Write visits as `url,title,visit_time` CSV, the input format of `load_events`.
pub fn write_history_csv(visits: &[HistoryVisit], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["url", "title", "visit_time"])?;
    for v in visits {
        wtr.write_record([
            v.url.as_str(),
            v.title.as_str(),
            format_timestamp(&v.visit_time).as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
