//! Average GDP per country

use std::collections::HashMap;
use tracing::{debug, info, warn};

use super::calculator::StatisticsCalculator;
use crate::app::models::{CountryStatistics, EconomicRecord};

/// Running totals for one country
#[derive(Debug, Default)]
struct GdpAccumulator {
    total: f64,
    count: usize,
}

/// Groups records by exact country name and averages their GDP
///
/// The result is sorted by descending (rounded) average. The sort is stable,
/// so countries with equal averages keep the order in which they were first
/// seen in the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct GdpCalculator;

impl GdpCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl StatisticsCalculator for GdpCalculator {
    fn name(&self) -> &'static str {
        "gdp"
    }

    fn calculate(&self, records: &[EconomicRecord]) -> Vec<CountryStatistics> {
        if records.is_empty() {
            warn!("No records provided for GDP calculation");
            return Vec::new();
        }

        // First-seen order is kept in `groups`; `index` maps name -> position
        let mut groups: Vec<(&str, GdpAccumulator)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for record in records {
            let position = *index.entry(record.country.as_str()).or_insert_with(|| {
                groups.push((record.country.as_str(), GdpAccumulator::default()));
                groups.len() - 1
            });

            let accumulator = &mut groups[position].1;
            accumulator.total += record.gdp;
            accumulator.count += 1;
        }

        let mut statistics: Vec<CountryStatistics> = groups
            .into_iter()
            .map(|(country, accumulator)| {
                let average = accumulator.total / accumulator.count as f64;
                debug!(
                    "{}: average GDP {:.2} over {} records",
                    country, average, accumulator.count
                );
                CountryStatistics::new(country, average, accumulator.count)
            })
            .collect();

        statistics.sort_by(|a, b| b.average_gdp().total_cmp(&a.average_gdp()));

        info!(
            "Calculated GDP statistics for {} countries from {} records",
            statistics.len(),
            records.len()
        );

        statistics
    }
}
