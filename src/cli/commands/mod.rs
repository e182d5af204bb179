//! Command implementations for the macro analyzer CLI
//!
//! This module dispatches between the two things the binary can do:
//! - `analyze`: read files, aggregate and print a report
//! - `list_reports`: print the registered reports

pub mod analyze;
pub mod list_reports;
pub mod shared;

use anyhow::Result;

use crate::cli::args::Args;

/// Main command runner for the macro analyzer
pub fn run(args: Args) -> Result<()> {
    let config = shared::load_configuration(&args)?;
    shared::setup_logging(&args, &config);
    shared::log_configuration_source(&args);

    if args.list_reports {
        list_reports::run_list_reports()
    } else {
        analyze::run_analyze(&args, &config)
    }
}
