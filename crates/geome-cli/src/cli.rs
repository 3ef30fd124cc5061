//! CLI argument definitions for the VertNet to GEOME mapper.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

pub const DEFAULT_INPUT: &str =
    "./../Original_Data/all_mammals_2021-11-09a/all_mammals_2021-11-09a.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "./../Mapped_Data";

#[derive(Parser)]
#[command(
    name = "vertnet-geome",
    version,
    about = "Map VertNet mammal occurrence exports to GEOME long format",
    long_about = "Map a wide VertNet mammal CSV export to the GEOME long-format template.\n\n\
                  Cleans dates, countries and categorical fields, assigns record\n\
                  identifiers, unpivots the morphological measurements and writes the\n\
                  result as chunked CSV files for bulk upload."
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
    /// Run the mapping pipeline and write the chunked GEOME CSVs.
    Map(MapArgs),

    /// Print the input column contract and the GEOME rename table.
    Schema(SchemaArgs),
}

#[derive(Parser)]
pub struct MapArgs {
    /// VertNet CSV export to map.
    #[arg(short = 'f', long = "file", value_name = "CSV", default_value = DEFAULT_INPUT)]
    pub file: PathBuf,

    /// Directory the chunk files are written to (created if missing).
    #[arg(short = 'o', long = "output", value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Standards directory holding geome/mapping.toml and the country lists.
    #[arg(long = "standards-dir", value_name = "DIR")]
    pub standards_dir: Option<PathBuf>,

    /// Number of output chunks (default from mapping.toml).
    #[arg(long = "chunks", value_name = "N")]
    pub chunks: Option<usize>,

    /// Output file prefix (default from mapping.toml).
    #[arg(long = "prefix", value_name = "TEXT")]
    pub prefix: Option<String>,

    /// Run every stage but write nothing.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct SchemaArgs {
    /// Standards directory holding geome/mapping.toml and the country lists.
    #[arg(long = "standards-dir", value_name = "DIR")]
    pub standards_dir: Option<PathBuf>,
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
