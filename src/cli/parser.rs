use crate::export::ExportFormat;
use crate::ingest::InputSource;
use crate::ingest::history::Browser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rsessionize
/// CLI application to classify browsing history and summarize hourly sessions
#[derive(Parser)]
#[command(
    name = "rsessionize",
    version = env!("CARGO_PKG_VERSION"),
    about = "Classify browsing history by intent and summarize it in hourly sessions",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of the default one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging (same as RUST_LOG=debug)
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the active configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Report keys missing from the configuration file")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Classify one or more URLs and show how the category was chosen
    Classify {
        #[arg(required = true, value_name = "URL")]
        urls: Vec<String>,
    },

    /// Classify events and build the hourly session summary
    Sessionize {
        #[arg(
            long = "input",
            short = 'i',
            required = true,
            value_name = "FILE[=USER]",
            help = "Input CSV with url and visit_time columns, optionally tagged with a user"
        )]
        inputs: Vec<InputSource>,

        #[arg(long, value_enum, help = "Output format (default: from file extension, else csv)")]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE", help = "Write the summary here instead of printing it")]
        file: Option<PathBuf>,

        #[arg(long = "events-file", value_name = "FILE", help = "Also write the classified events as CSV")]
        events_file: Option<PathBuf>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print descriptive statistics over the sessions
    Stats {
        #[arg(
            long = "input",
            short = 'i',
            required = true,
            value_name = "FILE[=USER]"
        )]
        inputs: Vec<InputSource>,

        #[arg(long, default_value_t = 10, help = "How many top domains to show")]
        top: usize,
    },

    /// Extract the browsing history of a local browser into an input CSV
    History {
        #[arg(long, value_enum)]
        browser: Browser,

        #[arg(long, value_name = "DB", help = "History database (default: the browser's profile)")]
        source: Option<PathBuf>,

        #[arg(long, value_name = "FILE")]
        file: PathBuf,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
