//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

use crate::core::salary::SeasonPhase;

pub mod commands;
pub mod formatters;
pub mod output;

/// Fantasy league roster tools: partition contracts into roster groups and
/// check them against cap and roster limits.
#[derive(Parser, Debug)]
#[command(name = "fbkl-roster")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, jsonl, plain, tsv)
    #[arg(long, short = 'O', global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Enable machine-readable JSON output (shorthand for --output-format=json)
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Unstyled text output, no colors
    #[arg(long, global = true)]
    pub plain: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable stderr logging; results still print
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/fbkl/config.toml, then ./fbkl.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Season phase to evaluate caps and limits for
    #[arg(long, global = true, value_parser = parse_phase)]
    pub phase: Option<SeasonPhase>,

    /// Team id of the viewer; enables trade actions on other teams' rosters
    #[arg(long, global = true, value_name = "TEAM_ID")]
    pub viewer_team: Option<i64>,

    #[command(subcommand)]
    pub command: Commands,
}

fn parse_phase(value: &str) -> std::result::Result<SeasonPhase, String> {
    value.parse().map_err(|err: crate::RosterError| err.to_string())
}

impl Cli {
    /// Get the effective output format.
    ///
    /// Priority order:
    /// 1. `--plain` → Plain format
    /// 2. `--output-format` → Explicit format
    /// 3. `--machine` → JSON format (shorthand)
    /// 4. Default → Human format
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        if self.plain {
            return OutputFormat::Plain;
        }

        if let Some(fmt) = self.output_format {
            return fmt;
        }

        if self.machine {
            return OutputFormat::Json;
        }

        OutputFormat::Human
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show each team's roster split into active, IR and rookie development groups
    Partition(commands::partition::PartitionArgs),

    /// Show roster counts and cap usage per team
    Summary(commands::summary::SummaryArgs),

    /// Check rosters against the limits of the season phase
    Validate(commands::validate::ValidateArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}
