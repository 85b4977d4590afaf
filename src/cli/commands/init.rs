use crate::cli::config_path;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// Writes the built-in classification tables to the configuration file so
/// they can be reviewed and edited. An existing file is kept unless
/// `--force` is given.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let path = config_path(cli);

        if path.exists() && !force {
            warning(format!(
                "Configuration file already exists: {} (use --force to overwrite)",
                path.display()
            ));
            return Ok(());
        }

        let cfg = Config::default();
        cfg.save_to(&path)?;

        println!("⚙️  Initializing rsessionize…");
        println!("📄 Config file : {}", path.display());
        println!(
            "📋 Rules       : {} domains, {} keyword patterns, {}-minute windows",
            cfg.domain_table.len(),
            cfg.keyword_rules.len(),
            cfg.window_minutes
        );
        success("Configuration initialized");
    }
    Ok(())
}
