//! Data models for macroeconomic analysis
//!
//! This module contains the typed record produced from one validated input row
//! and the per-country statistics produced by the aggregation step.

use crate::app::services::csv_reader::RawValue;
use crate::constants::{AVERAGE_DECIMALS, columns};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Economic Record
// =============================================================================

/// One row of economic indicators for a country and year
///
/// Records are built by the record converter from rows that already passed
/// validation, so every instance satisfies the field constraints:
/// year in 1900..=2100, gdp > 0, unemployment >= 0, population >= 1 and
/// non-blank country/continent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicRecord {
    /// Country name, trimmed, case preserved
    pub country: String,

    /// Observation year
    pub year: i32,

    /// Gross domestic product (USD billions)
    pub gdp: f64,

    /// GDP growth rate in percent, may be negative
    pub gdp_growth: f64,

    /// Inflation rate in percent, may be negative
    pub inflation: f64,

    /// Unemployment rate in percent
    pub unemployment: f64,

    /// Population (millions in the reference data sets)
    pub population: u64,

    /// Continent name, trimmed
    pub continent: String,
}

impl EconomicRecord {
    /// Typed row view of this record, suitable for re-validation
    pub fn to_row(&self) -> HashMap<String, RawValue> {
        let population = i64::try_from(self.population)
            .map(RawValue::Integer)
            .unwrap_or(RawValue::Float(self.population as f64));

        HashMap::from([
            (columns::COUNTRY.to_string(), RawValue::from(self.country.as_str())),
            (columns::YEAR.to_string(), RawValue::Integer(i64::from(self.year))),
            (columns::GDP.to_string(), RawValue::Float(self.gdp)),
            (columns::GDP_GROWTH.to_string(), RawValue::Float(self.gdp_growth)),
            (columns::INFLATION.to_string(), RawValue::Float(self.inflation)),
            (columns::UNEMPLOYMENT.to_string(), RawValue::Float(self.unemployment)),
            (columns::POPULATION.to_string(), population),
            (columns::CONTINENT.to_string(), RawValue::from(self.continent.as_str())),
        ])
    }
}

// =============================================================================
// Country Statistics
// =============================================================================

/// Aggregated statistics for a single country
///
/// The average is rounded to two decimal places when the value is created,
/// and every consumer (sorting, rendering) sees the rounded figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryStatistics {
    country: String,
    average_gdp: f64,
    years_count: usize,
}

impl CountryStatistics {
    /// Create statistics, rounding `average_gdp` to two decimals
    pub fn new(country: impl Into<String>, average_gdp: f64, years_count: usize) -> Self {
        Self {
            country: country.into(),
            average_gdp: round_to(average_gdp, AVERAGE_DECIMALS),
            years_count,
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// Mean GDP across contributing records, rounded to two decimals
    pub fn average_gdp(&self) -> f64 {
        self.average_gdp
    }

    /// Number of records that contributed to the average
    pub fn years_count(&self) -> usize {
        self.years_count
    }
}

/// Round `value` to `decimals` places, halves to even
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
