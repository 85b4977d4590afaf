pub mod commands;
pub mod parser;

use crate::config::Config;
use parser::Cli;
use std::path::PathBuf;

/// Configuration file in effect: `--config` or the platform default.
pub fn config_path(cli: &Cli) -> PathBuf {
    cli.config.clone().unwrap_or_else(Config::config_file)
}
