//! Test utilities for statistics calculators

use crate::app::models::EconomicRecord;


/// Build a record where only country, year and gdp matter
pub fn record(country: &str, year: i32, gdp: f64) -> EconomicRecord {
    EconomicRecord {
        country: country.to_string(),
        year,
        gdp,
        gdp_growth: 1.0,
        inflation: 2.0,
        unemployment: 5.0,
        population: 10,
        continent: "Testinia".to_string(),
    }
}
