//! Event ingestion: CSV exports and browser history databases.

pub mod csv;
pub mod history;

pub use self::csv::{LoadReport, load_events};

use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::path::{expand_tilde, stem_label};
use log::info;
use std::path::PathBuf;
use std::str::FromStr;

/// One input file, optionally tagged with the user it belongs to
/// (`history.csv=alice` on the command line).
#[derive(Debug, Clone, PartialEq)]
pub struct InputSource {
    pub path: PathBuf,
    pub user: Option<String>,
}

impl InputSource {
    pub fn new(path: impl Into<PathBuf>, user: Option<&str>) -> Self {
        Self {
            path: path.into(),
            user: user.map(str::to_string),
        }
    }

    /// Label for rows without a `user` column: explicit tag, then the
    /// configured default, then the file stem.
    pub fn user_label(&self, cfg: &Config) -> String {
        self.user
            .clone()
            .or_else(|| cfg.default_user.clone())
            .unwrap_or_else(|| stem_label(&self.path))
    }
}

impl FromStr for InputSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty input path".to_string());
        }

        match s.rsplit_once('=') {
            Some((path, user)) if !path.is_empty() && !user.trim().is_empty() => {
                Ok(Self::new(expand_tilde(path), Some(user.trim())))
            }
            _ => Ok(Self::new(expand_tilde(s), None)),
        }
    }
}

/// Load every source and order the result by user, then visit time.
pub fn load_all(sources: &[InputSource], cfg: &Config) -> AppResult<LoadReport> {
    let mut all = LoadReport::default();

    for src in sources {
        let label = src.user_label(cfg);
        let report = load_events(&src.path, &label, &cfg.timestamp_formats)?;
        info!(
            "loaded {} events for '{}' from {}",
            report.events.len(),
            label,
            src.path.display()
        );
        all.events.extend(report.events);
        all.skipped += report.skipped;
    }

    // stable: equal timestamps keep file order
    all.events
        .sort_by(|a, b| a.user.cmp(&b.user).then(a.visit_time.cmp(&b.visit_time)));

    Ok(all)
}
