//! CLI argument definitions for the centrality scorer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use centrality_cli::config::{WeightOverrides, parse_delimiter};

#[derive(Parser)]
#[command(
    name = "centrality",
    version,
    about = "Score how central each task is to its occupation",
    long_about = "Score how central each task is to its occupation.\n\n\
                  Combines O*NET task frequency, importance, and relevance ratings\n\
                  into per-occupation proportions."
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
    /// Reshape, normalize, and compute proportions for a ratings file.
    Score(ScoreArgs),

    /// List the wide-table columns and their frequency multipliers.
    Scales,
}

#[derive(Parser)]
pub struct ScoreArgs {
    /// Long-format task ratings (CSV, or the tab-delimited O*NET text export).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory for the reshaped, normalized, and proportions tables.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "outputs")]
    pub output_dir: PathBuf,

    /// Field delimiter of the input (default: tab for .txt/.tsv, comma otherwise).
    #[arg(long = "delimiter", value_name = "CHAR", value_parser = delimiter_arg)]
    pub delimiter: Option<u8>,

    #[command(flatten)]
    pub weights: WeightArgs,

    /// Skip writing the reshaped and normalized tables.
    #[arg(long = "no-snapshots")]
    pub no_snapshots: bool,

    /// Compute and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct WeightArgs {
    /// JSON file with `importance`, `frequency`, and `relevance` weights.
    #[arg(long = "weights", value_name = "FILE")]
    pub weights_file: Option<PathBuf>,

    /// Weight of the importance proportion in the weighted sum.
    #[arg(long = "importance-weight", value_name = "W")]
    pub importance: Option<f64>,

    /// Weight of the frequency proportion in the weighted sum.
    #[arg(long = "frequency-weight", value_name = "W")]
    pub frequency: Option<f64>,

    /// Weight of the relevance proportion in the weighted sum.
    #[arg(long = "relevance-weight", value_name = "W")]
    pub relevance: Option<f64>,
}

impl WeightArgs {
    pub fn overrides(&self) -> WeightOverrides {
        WeightOverrides {
            importance: self.importance,
            frequency: self.frequency,
            relevance: self.relevance,
        }
    }
}

fn delimiter_arg(value: &str) -> Result<u8, String> {
    parse_delimiter(value).map_err(|error| error.to_string())
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
