use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::ingest::history::{extract, write_history_csv};
use crate::ui::messages::{info, success};

/// Handle the `history` command
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::History {
        browser,
        source,
        file,
        force,
    } = cmd
    {
        let source = source
            .clone()
            .or_else(|| browser.default_source())
            .ok_or_else(|| {
                AppError::History(format!(
                    "no default {} history location on this platform, use --source",
                    browser.as_str()
                ))
            })?;

        ensure_writable(file, *force)?;

        info(format!("Reading {} history from {}", browser.as_str(), source.display()));
        let visits = extract(*browser, &source)?;
        write_history_csv(&visits, file)?;

        success(format!("{} visits written to {}", visits.len(), file.display()));
    }
    Ok(())
}
