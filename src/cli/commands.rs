//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "memoir")]
#[command(about = "Journal analytics and PDF export", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// List entries, newest first
    List {
        /// Start date (DD-MM-YYYY, inclusive)
        #[arg(long)]
        from: Option<String>,

        /// End date (DD-MM-YYYY, inclusive)
        #[arg(long)]
        to: Option<String>,

        /// Show at most this many entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show analytics for the journal
    Stats {
        /// Lookback period: number of days, or "all"
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Export entries to a PDF document
    Export {
        /// Entry id to export (repeatable)
        #[arg(long = "id")]
        ids: Vec<u64>,

        /// Export every entry
        #[arg(long)]
        all: bool,

        /// Start date (DD-MM-YYYY, inclusive; with --all)
        #[arg(long)]
        from: Option<String>,

        /// End date (DD-MM-YYYY, inclusive; with --all)
        #[arg(long)]
        to: Option<String>,
    },

    /// Export an analytics report to PDF
    Report {
        /// Lookback period: number of days, or "all"
        #[arg(short, long)]
        period: Option<String>,
    },
}
