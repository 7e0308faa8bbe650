//! CLI argument definitions for the phenotype harmonizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

/// Default locations mirror the dataset layout this tool was written for.
pub const DEFAULT_V1_CSV: &str = "data/phenotypes/Phenotypic_V1_0b.csv";
pub const DEFAULT_V2_TSV: &str = "data/phenotypes/ABIDEII-BNI_1_participants.tsv";
pub const DEFAULT_MAPPING: &str = "data/mappings/abide_phenotypic_v1_0b_vars_to_terms_v5.json";
pub const DEFAULT_OUTPUT: &str = "data/mappings/abide2_phenotypic_vars_to_terms.json";

#[derive(Parser)]
#[command(
    name = "pheno-harmonize",
    version,
    about = "Reconcile phenotype variable names across dataset versions",
    long_about = "Reconcile phenotype variable names between two generations of a\n\
                  dataset's demographic tables, and synthesize a term-mapping JSON\n\
                  for the newer generation from the older generation's annotations."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare header rows and report exact, close, and unmatched variables.
    Overlap(OverlapArgs),

    /// Synthesize the version-2 term mapping from the version-1 annotations.
    Map(MapArgs),
}

#[derive(Parser)]
pub struct OverlapArgs {
    /// Version-1 demographic table (comma-delimited).
    #[arg(long = "v1-csv", value_name = "PATH", default_value = DEFAULT_V1_CSV)]
    pub v1_csv: PathBuf,

    /// Version-2 demographic table (tab-delimited).
    #[arg(long = "v2-tsv", value_name = "PATH", default_value = DEFAULT_V2_TSV)]
    pub v2_tsv: PathBuf,
}

#[derive(Parser)]
pub struct MapArgs {
    #[command(flatten)]
    pub inputs: OverlapArgs,

    /// Version-1 term mapping JSON.
    #[arg(long = "mapping", value_name = "PATH", default_value = DEFAULT_MAPPING)]
    pub mapping: PathBuf,

    /// Output path for the synthesized version-2 term mapping.
    ///
    /// Any existing file at this path is overwritten.
    #[arg(long = "output", value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
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
