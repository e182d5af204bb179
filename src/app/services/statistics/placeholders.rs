//! Calculators that are registered by name but not implemented yet
//!
//! Both honour the [`StatisticsCalculator`] contract and always return an
//! empty result.

use tracing::info;

use super::calculator::StatisticsCalculator;
use crate::app::models::{CountryStatistics, EconomicRecord};

/// Unemployment trend per country (not yet available)
#[derive(Debug, Clone, Copy, Default)]
pub struct UnemploymentTrendCalculator;

impl StatisticsCalculator for UnemploymentTrendCalculator {
    fn name(&self) -> &'static str {
        "unemployment-trend"
    }

    fn calculate(&self, records: &[EconomicRecord]) -> Vec<CountryStatistics> {
        info!(
            "Unemployment trend calculation is not yet available ({} records ignored)",
            records.len()
        );
        Vec::new()
    }
}

/// Population totals per continent (not yet available)
#[derive(Debug, Clone, Copy, Default)]
pub struct PopulationByContinentCalculator;

impl StatisticsCalculator for PopulationByContinentCalculator {
    fn name(&self) -> &'static str {
        "population-by-continent"
    }

    fn calculate(&self, records: &[EconomicRecord]) -> Vec<CountryStatistics> {
        info!(
            "Population by continent calculation is not yet available ({} records ignored)",
            records.len()
        );
        Vec::new()
    }
}
