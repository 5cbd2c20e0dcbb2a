//! CLI argument definitions for the pitch tabulator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pitchtab",
    version,
    about = "Pitch tabulator - summarize per-pitch tracking exports",
    long_about = "Summarize a per-pitch tracking CSV export into game views.\n\n\
                  Rebuilds plate appearances from the raw pitch sequence and\n\
                  prints the scoreboard, the at-bat grid, and per-player\n\
                  batting and pitching lines."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the game summary: scoreboard, line score, and at-bat grid.
    Game(GameArgs),

    /// Print per-player batting and pitching lines.
    Stats(StatsArgs),

    /// Print every pitch of one plate appearance.
    Pa(PaArgs),
}

#[derive(Parser)]
pub struct GameArgs {
    /// Path to the per-pitch CSV export.
    #[arg(value_name = "CSV_FILE")]
    pub csv: PathBuf,

    /// Emit the summary as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct StatsArgs {
    /// Path to the per-pitch CSV export.
    #[arg(value_name = "CSV_FILE")]
    pub csv: PathBuf,

    /// Restrict output to one team (default: both, visitors first).
    #[arg(long = "team", value_name = "NAME")]
    pub team: Option<String>,

    /// Emit the stat lines as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct PaArgs {
    /// Path to the per-pitch CSV export.
    #[arg(value_name = "CSV_FILE")]
    pub csv: PathBuf,

    /// Plate-appearance number as shown in the game summary (1-based).
    #[arg(value_name = "PA_NUMBER")]
    pub pa_id: u32,

    /// Emit the pitch rows as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
