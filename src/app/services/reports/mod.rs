//! Report rendering and the report registry
//!
//! A report turns aggregated [`CountryStatistics`](crate::app::models::CountryStatistics)
//! into display text. Reports are looked up by name through a
//! [`ReportRegistry`]; the process-wide registry from [`report_registry`] is
//! built once on first use and holds the default reports.
//!
//! # Architecture
//!
//! - [`average_gdp`] - Grid table of average GDP per country
//! - [`registry`] - Name to constructor mapping and the process-wide instance
//! - [`format`] - Number formatting shared by reports

use crate::app::models::CountryStatistics;

pub mod average_gdp;
pub mod format;
pub mod registry;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use average_gdp::AverageGdpReport;
pub use registry::{ReportConstructor, ReportRegistry, report_registry};

/// A named renderer of country statistics
pub trait Report: Send + Sync {
    /// Unique name used for registry lookup
    fn name(&self) -> &str;

    /// One-line description shown in report listings
    fn description(&self) -> &str {
        self.name()
    }

    /// Render `statistics` in the order given
    fn generate(&self, statistics: &[CountryStatistics]) -> String;
}
