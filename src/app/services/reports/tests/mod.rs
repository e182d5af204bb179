//! Test utilities for reports and the registry

use super::Report;
use crate::app::models::CountryStatistics;

// Test modules
mod average_gdp_tests;
mod registry_tests;

pub fn sample_statistics() -> Vec<CountryStatistics> {
    vec![
        CountryStatistics::new("United States", 22374.15, 2),
        CountryStatistics::new("Germany", 4254.5, 3),
        CountryStatistics::new("Chile", 317.0, 1),
    ]
}

/// Minimal report used to exercise registry behaviour
pub struct CountOnlyReport;

impl Report for CountOnlyReport {
    fn name(&self) -> &str {
        "count_only"
    }

    fn generate(&self, statistics: &[CountryStatistics]) -> String {
        format!("{} countries", statistics.len())
    }
}
