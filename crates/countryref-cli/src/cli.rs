//! CLI argument definitions for the country reference table builder.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "countryref",
    version,
    about = "Build a canonical country reference table from source snapshots",
    long_about = "Reconcile independently-maintained country datasets (UN \
                  statistics, WorldAtlas codes, Wikipedia dialing codes) into \
                  one consistent table of names, ISO 3166-1 codes, and ITU-T \
                  dialing codes."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for conflict notes, -vv for row detail,
    /// -q for loud warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

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
    /// Reconcile the source snapshots and emit the canonical table.
    Build(BuildArgs),

    /// List the known source adapters and their snapshot file names.
    Sources,
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Directory containing the source snapshot files.
    #[arg(value_name = "DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: OutputFormatArg,

    /// Write output to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Do not emit entities for which no dialing code was resolved.
    #[arg(long = "ignore-missing-idc")]
    pub ignore_missing_idc: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Json,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
