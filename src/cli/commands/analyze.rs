//! Analyze command: read files, aggregate and print a report

use anyhow::{Context, Result};
use tracing::debug;

use crate::app::analyzer::MacroEconomicAnalyzer;
use crate::app::services::csv_reader::{CsvEconomicReader, ReaderOptions};
use crate::cli::args::Args;
use crate::cli::input::expand_file_patterns;
use crate::config::Config;

/// Run the analysis and print the rendered report to stdout
pub fn run_analyze(args: &Args, config: &Config) -> Result<()> {
    let output = render_report(args, config)?;
    println!("{}", output);
    Ok(())
}

/// Run the analysis and return the rendered report
pub fn render_report(args: &Args, config: &Config) -> Result<String> {
    let paths = expand_file_patterns(args.files.as_slice());
    let report_name = args.report_name(config);
    let calculator = args.calculator_kind(config)?;

    debug!("Resolved {} input path(s): {:?}", paths.len(), paths);

    let analyzer = MacroEconomicAnalyzer::new()
        .with_reader(CsvEconomicReader::with_options(ReaderOptions::from(
            &config.reader,
        )))
        .with_calculator(calculator.build());

    let output = analyzer
        .analyze(&paths, report_name)
        .with_context(|| format!("Failed to generate report '{}'", report_name))?;

    Ok(output)
}
