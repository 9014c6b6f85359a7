use crate::render::TranscriptFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for fraglog
/// Far Cry session log analyser: transcripts, CSV and SQLite match history
#[derive(Parser)]
#[command(
    name = "fraglog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Parse Far Cry server logs into frag transcripts, CSV rows and a SQLite match history",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Print the annotated frag transcript of a log
    Show {
        /// Session log file
        log: PathBuf,

        /// Output format (defaults to the configured one)
        #[arg(long, value_enum)]
        format: Option<TranscriptFormat>,

        /// Print map, mode, start/end and frag counts before the transcript
        #[arg(long)]
        summary: bool,
    },

    /// Write the frags of a log as CSV rows (timestamp, killer, victim, weapon)
    Csv {
        /// Session log file
        log: PathBuf,

        /// Output CSV file
        #[arg(long, short = 'o', value_name = "FILE")]
        out: PathBuf,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Store a log as a match (plus its frags) in the database
    Import {
        /// Session log file
        log: PathBuf,
    },

    /// List stored matches
    Matches,

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },
}
