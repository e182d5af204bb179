//! Command-line argument definitions for the macro analyzer
//!
//! This module defines the CLI interface using the clap derive API.

use clap::Parser;
use std::path::PathBuf;

use crate::app::services::statistics::CalculatorKind;
use crate::config::Config;
use crate::{Error, Result};

/// CLI arguments for the macro-economic analyzer
///
/// Reads one or more delimited indicator files, aggregates them per country
/// and prints the selected report.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "macro-analyzer",
    version,
    about = "Analyze macroeconomic indicator files and print per-country reports",
    long_about = "Reads comma, semicolon or tab separated files with country, year, gdp, \
                  gdp_growth, inflation, unemployment, population and continent columns, \
                  validates every row, aggregates per country and renders the selected report."
)]
pub struct Args {
    /// Input files or glob patterns
    ///
    /// Files are read in the order given. A pattern that matches nothing is
    /// passed through as-is and reported as a missing file.
    #[arg(
        long = "files",
        value_name = "FILE",
        num_args = 1..,
        required_unless_present = "list_reports",
        help = "Input files or glob patterns to analyze"
    )]
    pub files: Vec<String>,

    /// Report to generate
    ///
    /// Defaults to the configured default report (average_gdp).
    #[arg(long = "report", value_name = "NAME", help = "Report to generate")]
    pub report: Option<String>,

    /// List the available reports and exit
    #[arg(long = "list-reports", help = "List available reports and exit")]
    pub list_reports: bool,

    /// Aggregation to run before rendering
    #[arg(
        long = "calculator",
        value_name = "KIND",
        help = "Calculator to use: gdp, unemployment-trend, population-by-continent"
    )]
    pub calculator: Option<CalculatorKind>,

    /// Path to configuration file
    ///
    /// TOML file with [reader], [analysis] and [logging] sections. Without
    /// this flag the per-user config file is used when it exists.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to TOML configuration file"
    )]
    pub config_file: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Enable debug logging (same as -vv)
    #[arg(long = "debug", help = "Enable debug logging")]
    pub debug: bool,

    /// Suppress everything but errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Only log errors",
        conflicts_with_all = ["verbose", "debug"]
    )]
    pub quiet: bool,
}

impl Args {
    /// Log level from the verbosity flags, falling back to `configured`
    pub fn get_log_level<'a>(&self, configured: &'a str) -> &'a str {
        if self.quiet {
            return "error";
        }
        match (self.verbose, self.debug) {
            (0, false) => configured,
            (1, false) => "info",
            (0..=2, _) => "debug",
            _ => "trace",
        }
    }

    /// Report name after applying configuration defaults
    pub fn report_name<'a>(&'a self, config: &'a Config) -> &'a str {
        self.report
            .as_deref()
            .unwrap_or(config.analysis.default_report.as_str())
    }

    /// Calculator after applying configuration defaults
    pub fn calculator_kind(&self, config: &Config) -> Result<CalculatorKind> {
        match self.calculator {
            Some(kind) => Ok(kind),
            None => config.calculator_kind(),
        }
    }

    /// Check argument combinations clap cannot express
    pub fn validate(&self) -> Result<()> {
        if !self.list_reports && self.files.iter().all(|f| f.trim().is_empty()) {
            return Err(Error::invalid_argument("No files provided for reading"));
        }
        if let Some(report) = &self.report {
            if report.trim().is_empty() {
                return Err(Error::invalid_argument("Report name must not be empty"));
            }
        }
        Ok(())
    }
}
