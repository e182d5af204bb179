//! Per-country aggregation of economic records
//!
//! Calculators turn a flat list of [`EconomicRecord`](crate::app::models::EconomicRecord)s
//! into [`CountryStatistics`](crate::app::models::CountryStatistics) ready for
//! reporting.
//!
//! # Architecture
//!
//! - [`calculator`] - The [`StatisticsCalculator`] trait and [`CalculatorKind`] selector
//! - [`gdp`] - Average GDP per country, sorted by descending average
//! - [`placeholders`] - Unemployment trend and population by continent (not yet available)
//!
//! # Example Usage
//!
//! ```rust
//! use macro_analyzer::app::services::statistics::{CalculatorKind, StatisticsCalculator};
//!
//! let calculator = "gdp".parse::<CalculatorKind>().unwrap().build();
//! assert_eq!(calculator.name(), "gdp");
//! assert!(calculator.calculate(&[]).is_empty());
//! ```

pub mod calculator;
pub mod gdp;
pub mod placeholders;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use calculator::{CalculatorKind, StatisticsCalculator};
pub use gdp::GdpCalculator;
pub use placeholders::{PopulationByContinentCalculator, UnemploymentTrendCalculator};
