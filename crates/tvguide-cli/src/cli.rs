//! CLI argument definitions for the TV guide tools.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tvguide_model::Timezone;

#[derive(Parser)]
#[command(
    name = "tvguide",
    version,
    about = "TV guide schedules - build datasets and view program grids",
    long_about = "Build a channel's schedule dataset from a spreadsheet export and \
                  browse it as a day-by-time program grid.\n\n\
                  Regions and timezones are declared at build time; every row is \
                  checked before anything is written."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a schedule sheet into a persisted dataset.
    Convert(ConvertArgs),

    /// Print the program grid for one region and timezone.
    Grid(GridArgs),

    /// List a dataset's regions and their timezones.
    Regions(RegionsArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Schedule workbook (first worksheet is read) or CSV export.
    #[arg(long = "excel", value_name = "PATH")]
    pub excel: PathBuf,

    /// Opaque channel identifier stored in the dataset.
    #[arg(long = "channelId", value_name = "ID")]
    pub channel_id: String,

    /// Comma-separated region names, in display order.
    #[arg(long = "regions", value_name = "LIST")]
    pub regions: String,

    /// JSON object mapping each region to its timezone codes.
    ///
    /// Example: '{"Nigeria":["WAT"],"Kenya":["CAT","EST"]}'
    #[arg(long = "tz-map", value_name = "JSON")]
    pub tz_map: String,

    /// Where to write the dataset JSON.
    #[arg(long = "out", value_name = "PATH")]
    pub out: PathBuf,
}

#[derive(Parser)]
pub struct GridArgs {
    /// Persisted dataset JSON.
    #[arg(long = "data", value_name = "PATH")]
    pub data: PathBuf,

    /// Region to show (default: first offered region).
    #[arg(long = "region")]
    pub region: Option<String>,

    /// Timezone to show (default: the region's first timezone).
    #[arg(long = "timezone", value_parser = parse_timezone)]
    pub timezone: Option<Timezone>,

    /// Comma-separated subset of regions to offer.
    #[arg(long = "enabled-regions", value_name = "LIST", value_delimiter = ',')]
    pub enabled_regions: Vec<String>,

    /// Day label to treat as today, e.g. "Monday, October 6, 2025".
    #[arg(long = "today", value_name = "LABEL")]
    pub today: Option<String>,

    /// Do not mark today's column.
    #[arg(long = "no-today-highlight")]
    pub no_today_highlight: bool,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: GridFormatArg,
}

#[derive(Parser)]
pub struct RegionsArgs {
    /// Persisted dataset JSON.
    #[arg(long = "data", value_name = "PATH")]
    pub data: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum GridFormatArg {
    Table,
    Json,
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

fn parse_timezone(raw: &str) -> Result<Timezone, String> {
    raw.parse::<Timezone>().map_err(|error| error.to_string())
}
