//! Conversion of validated rows into typed records

use super::field_parsers::{parse_float, parse_integer};
use super::row::FieldValue;
use super::validator::ValidationError;
use crate::app::models::EconomicRecord;
use crate::constants::columns;
use crate::{Error, Result};
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Converts cleaned text rows into [`EconomicRecord`]s
///
/// Rows are expected to have passed
/// [`EconomicDataValidator::validate_row`](super::EconomicDataValidator::validate_row);
/// this type only performs type conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct EconomicDataConverter;

impl EconomicDataConverter {
    pub fn new() -> Self {
        Self
    }

    /// Build a record from a cleaned row
    pub fn to_record<S: BuildHasher>(
        &self,
        row: &HashMap<String, String, S>,
    ) -> Result<EconomicRecord> {
        let year = integer_field(row, columns::YEAR)?;
        let population = integer_field(row, columns::POPULATION)?;

        Ok(EconomicRecord {
            country: text_field(row, columns::COUNTRY)?.trim().to_string(),
            year: i32::try_from(year).map_err(|_| out_of_range(columns::YEAR, year))?,
            gdp: float_field(row, columns::GDP)?,
            gdp_growth: float_field(row, columns::GDP_GROWTH)?,
            inflation: float_field(row, columns::INFLATION)?,
            unemployment: float_field(row, columns::UNEMPLOYMENT)?,
            population: u64::try_from(population)
                .map_err(|_| out_of_range(columns::POPULATION, population))?,
            continent: text_field(row, columns::CONTINENT)?.trim().to_string(),
        })
    }
}

fn text_field<'a, S: BuildHasher>(
    row: &'a HashMap<String, String, S>,
    column: &str,
) -> Result<&'a str> {
    row.get(column)
        .map(String::as_str)
        .ok_or_else(|| Error::missing_field(column))
}

fn integer_field<S: BuildHasher>(row: &HashMap<String, String, S>, column: &str) -> Result<i64> {
    let text = text_field(row, column)?;
    parse_integer(FieldValue::Text(text)).ok_or_else(|| unparsable(column, text))
}

fn float_field<S: BuildHasher>(row: &HashMap<String, String, S>, column: &str) -> Result<f64> {
    let text = text_field(row, column)?;
    parse_float(FieldValue::Text(text)).ok_or_else(|| unparsable(column, text))
}

fn unparsable(column: &str, text: &str) -> Error {
    Error::Validation(ValidationError::for_field(
        None,
        column,
        Some(text.to_string()),
        format!("Invalid {} format: '{}'", column, text),
    ))
}

fn out_of_range(column: &str, value: i64) -> Error {
    Error::Validation(ValidationError::for_field(
        None,
        column,
        Some(value.to_string()),
        format!("Invalid {} value {}: out of range", column, value),
    ))
}
