// CLI-specific types and structures
// This module contains the command-line interface definitions and parsing logic

use clap::Parser;

use crate::session::ErrorStrategy;

/// Filename used when no path is given on the command line.
pub const DEFAULT_LOG_FILE: &str = "IISLog.log";

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Per-IP request counts with reverse-DNS hostnames.
    #[default]
    Report,
    /// One JSON object per kept record.
    Jsonl,
}

#[derive(Parser)]
#[command(name = "iisparse")]
#[command(about = "A command-line IIS/W3C extended log parser with adaptive bulk/chunked reading")]
#[command(version)]
pub struct Cli {
    /// Path to the IIS log file
    #[arg(default_value = DEFAULT_LOG_FILE)]
    pub file: String,

    #[arg(short = 'F', long = "output-format", value_enum, default_value = "report", help_heading = "Output Options")]
    pub output_format: OutputFormat,

    /// Skip reverse-DNS lookups in the report
    #[arg(long = "no-resolve", help_heading = "Output Options")]
    pub no_resolve: bool,

    #[arg(long = "on-error", value_enum, default_value = "abort", help_heading = "Processing Options")]
    pub on_error: ErrorStrategy,

    /// Suppress progress output
    #[arg(short = 'q', long = "quiet", help_heading = "Display Options")]
    pub quiet: bool,

    /// Print processing statistics to stderr
    #[arg(short = 's', long = "stats", help_heading = "Display Options")]
    pub stats: bool,
}
