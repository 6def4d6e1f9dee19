//! CLI argument definitions for the survey analyzer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "survey-insight",
    version,
    about = "Survey CSV analyzer - infer question types and summarize answers",
    long_about = "Analyze a survey export CSV (rows = respondents, columns = questions).\n\n\
                  Each column is classified into a semantic question type (numeric,\n\
                  single/multiple choice, short/long text, ...) and summarized with\n\
                  type-appropriate statistics. Types can be overridden per column."
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

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow respondent-level answer values in trace logs.
    ///
    /// Off by default: answers may contain emails, phone numbers, or names.
    #[arg(long = "log-answers", global = true)]
    pub log_answers: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze one survey export CSV and print per-column summaries.
    Analyze(AnalyzeArgs),

    /// List all supported question types.
    Types,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the survey export CSV.
    #[arg(value_name = "CSV_FILE")]
    pub csv_path: PathBuf,

    /// Category buckets kept before collapsing the long tail into "기타".
    #[arg(long = "top-categories", value_name = "N", default_value_t = 10)]
    pub top_categories: usize,

    /// Tokens reported per text column.
    #[arg(
        long = "top-tokens",
        value_name = "K",
        default_value_t = 30,
        value_parser = clap::value_parser!(u16).range(10..=50)
    )]
    pub top_tokens: u16,

    /// Minimum token length in characters.
    #[arg(
        long = "min-token-len",
        value_name = "LEN",
        default_value_t = 2,
        value_parser = clap::value_parser!(u16).range(2..=4)
    )]
    pub min_token_len: u16,

    /// Override a column's question type (repeatable).
    ///
    /// TYPE is a stable key such as numeric, single_choice, text_long,
    /// email. Unknown keys are rejected.
    #[arg(long = "set", value_name = "COLUMN=TYPE")]
    pub overrides: Vec<String>,

    /// Write the plain-text analysis document to a file.
    #[arg(long = "export", value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Emit results as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    /// Note a reference chart in the exported document (display only).
    #[arg(long = "reference-chart")]
    pub reference_chart: bool,
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
