//! Header and row validation for economic indicator files
//!
//! Every row is checked before it is converted, so a typed
//! [`EconomicRecord`](crate::app::models::EconomicRecord) never holds a value
//! outside its documented range.

use super::field_parsers::{parse_float, parse_integer, parse_text};
use super::row::{FieldValue, RowSource};
use crate::constants::{MAX_YEAR, MIN_POPULATION, MIN_YEAR, REQUIRED_COLUMNS, columns};
use std::collections::HashSet;

/// Validation failure with row and field context
///
/// Renders as `Row <n>: <reason>`, or just the reason when no row applies.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{}{reason}", .row.map(|row| format!("Row {}: ", row)).unwrap_or_default())]
pub struct ValidationError {
    /// 1-based row number (header is row 1), `None` for header or row-less checks
    pub row: Option<usize>,
    /// Column the failure refers to
    pub field: Option<String>,
    /// Offending value as text
    pub value: Option<String>,
    /// Human-readable reason
    pub reason: String,
}

impl ValidationError {
    /// Create an error that is not tied to a specific row
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            row: None,
            field: None,
            value: None,
            reason: reason.into(),
        }
    }

    /// Create an error for a field of a specific row
    pub fn for_field(
        row: Option<usize>,
        field: impl Into<String>,
        value: Option<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            row,
            field: Some(field.into()),
            value,
            reason: reason.into(),
        }
    }

    /// Attach a row number
    pub fn at_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }
}

/// Validator for economic indicator headers and rows
#[derive(Debug, Clone, Copy, Default)]
pub struct EconomicDataValidator;

impl EconomicDataValidator {
    pub fn new() -> Self {
        Self
    }

    /// Check that every required column is present
    ///
    /// Column names are compared trimmed and case-insensitively. Extra
    /// columns are allowed. The error lists all missing columns.
    pub fn validate_header<S: AsRef<str>>(&self, header: &[S]) -> Result<(), ValidationError> {
        let present: HashSet<String> = header
            .iter()
            .map(|column| column.as_ref().trim().to_lowercase())
            .collect();

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|column| !present.contains(*column))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(format!(
                "Missing required columns: {}",
                missing.join(", ")
            )))
        }
    }

    /// Validate one data row
    ///
    /// Presence of every column is checked first, then the typed range checks
    /// in column order. The first failure is returned.
    pub fn validate_row<R: RowSource + ?Sized>(
        &self,
        row: &R,
        row_num: usize,
    ) -> Result<(), ValidationError> {
        for column in REQUIRED_COLUMNS {
            let value = row.field(column);
            if value.is_blank() {
                return Err(ValidationError::for_field(
                    Some(row_num),
                    *column,
                    non_null(value),
                    format!("Missing or empty value for column '{}'", column),
                ));
            }
        }

        let year = require_integer(row, columns::YEAR, row_num)?;
        if year < MIN_YEAR {
            return Err(range_error(
                row_num,
                columns::YEAR,
                year,
                format!("Invalid year {}: must be at least {}", year, MIN_YEAR),
            ));
        }
        if year > MAX_YEAR {
            return Err(range_error(
                row_num,
                columns::YEAR,
                year,
                format!("Invalid year {}: must be at most {}", year, MAX_YEAR),
            ));
        }

        let gdp = require_float(row, columns::GDP, row_num)?;
        if gdp <= 0.0 {
            return Err(range_error(
                row_num,
                columns::GDP,
                gdp,
                format!("Invalid gdp value {}: must be positive", gdp),
            ));
        }

        require_float(row, columns::GDP_GROWTH, row_num)?;
        require_float(row, columns::INFLATION, row_num)?;

        let unemployment = require_float(row, columns::UNEMPLOYMENT, row_num)?;
        if unemployment < 0.0 {
            return Err(range_error(
                row_num,
                columns::UNEMPLOYMENT,
                unemployment,
                format!(
                    "Invalid unemployment value {}: cannot be negative",
                    unemployment
                ),
            ));
        }

        let population = require_integer(row, columns::POPULATION, row_num)?;
        if population < MIN_POPULATION {
            return Err(range_error(
                row_num,
                columns::POPULATION,
                population,
                format!(
                    "Invalid population value {}: must be at least {}",
                    population, MIN_POPULATION
                ),
            ));
        }

        require_text(row, columns::COUNTRY, row_num)?;
        require_text(row, columns::CONTINENT, row_num)?;

        Ok(())
    }
}

fn non_null(value: FieldValue<'_>) -> Option<String> {
    match value {
        FieldValue::Null => None,
        other => Some(other.display()),
    }
}

fn format_error(row_num: usize, column: &str, value: FieldValue<'_>) -> ValidationError {
    ValidationError::for_field(
        Some(row_num),
        column,
        Some(value.display()),
        format!("Invalid {} format: '{}'", column, value.display()),
    )
}

fn range_error(
    row_num: usize,
    column: &str,
    value: impl ToString,
    reason: String,
) -> ValidationError {
    ValidationError::for_field(Some(row_num), column, Some(value.to_string()), reason)
}

fn require_integer<R: RowSource + ?Sized>(
    row: &R,
    column: &str,
    row_num: usize,
) -> Result<i64, ValidationError> {
    let value = row.field(column);
    parse_integer(value).ok_or_else(|| format_error(row_num, column, value))
}

fn require_float<R: RowSource + ?Sized>(
    row: &R,
    column: &str,
    row_num: usize,
) -> Result<f64, ValidationError> {
    let value = row.field(column);
    parse_float(value).ok_or_else(|| format_error(row_num, column, value))
}

fn require_text<R: RowSource + ?Sized>(
    row: &R,
    column: &str,
    row_num: usize,
) -> Result<(), ValidationError> {
    let value = row.field(column);
    match parse_text(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::for_field(
            Some(row_num),
            column,
            non_null(value),
            format!("Invalid {} format: expected non-empty text", column),
        )),
    }
}
