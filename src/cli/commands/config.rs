use crate::cli::parser::Commands;
use crate::config::{Config, check};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            check_file(path)?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit_file(path, editor)?;
        }
    }

    Ok(())
}

fn check_file(path: &Path) -> AppResult<()> {
    if !path.exists() {
        warning(format!(
            "No configuration file at {}: built-in defaults are in use (run `init`)",
            path.display()
        ));
        return Ok(());
    }

    let missing = check::missing_keys(path)?;
    if missing.is_empty() {
        success(format!("Configuration file is complete: {}", path.display()));
    } else {
        warning(format!(
            "Missing keys (defaults used): {}",
            missing.join(", ")
        ));
    }
    Ok(())
}

fn edit_file(path: &Path, editor: &Option<String>) -> AppResult<()> {
    if !path.exists() {
        return Err(AppError::Config(format!(
            "{} does not exist, run `init` first",
            path.display()
        )));
    }

    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

    for candidate in [&editor_to_use, &default_editor] {
        match Command::new(candidate).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{candidate}'"
                ));
                return Ok(());
            }
            _ => warning(format!("Editor '{candidate}' not available")),
        }
    }

    error("Failed to edit configuration file");
    Err(AppError::Config("no usable editor".into()))
}
