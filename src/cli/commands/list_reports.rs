//! List-reports command

use anyhow::Result;
use colored::*;

use crate::app::analyzer::MacroEconomicAnalyzer;

/// Print the registered reports to stdout
pub fn run_list_reports() -> Result<()> {
    println!("{}", "Available reports:".bold());
    for line in report_lines() {
        println!("{}", line);
    }
    Ok(())
}

/// One `  name - description` line per registered report, sorted by name
pub fn report_lines() -> Vec<String> {
    MacroEconomicAnalyzer::new()
        .available_reports()
        .into_iter()
        .map(|(name, description)| format!("  {} - {}", name, description))
        .collect()
}
