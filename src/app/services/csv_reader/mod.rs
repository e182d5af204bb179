//! Delimited file reader for economic indicator data
//!
//! This module turns comma, semicolon or tab separated files into validated
//! [`EconomicRecord`](crate::app::models::EconomicRecord)s.
//!
//! ## Architecture
//!
//! - [`reader`] - File access, delimiter sampling and the row pipeline
//! - [`dialect`] - Delimiter detection from a leading sample
//! - [`validator`] - Header and row validation with row/field context
//! - [`converter`] - Conversion of validated rows into typed records
//! - [`field_parsers`] - Cell level integer/float/text parsing
//! - [`row`] - Row value types accepted by the validator
//!
//! ## Usage
//!
//! ```rust,no_run
//! use macro_analyzer::app::services::csv_reader::CsvEconomicReader;
//!
//! # fn example() -> macro_analyzer::Result<()> {
//! let reader = CsvEconomicReader::new();
//! let records = reader.read(&["data2023.csv", "data2024.csv"])?;
//!
//! println!("Loaded {} records", records.len());
//! # Ok(())
//! # }
//! ```

pub mod converter;
pub mod dialect;
pub mod field_parsers;
pub mod reader;
pub mod row;
pub mod validator;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use converter::EconomicDataConverter;
pub use reader::{CsvEconomicReader, FileRecords, ReaderOptions};
pub use row::{FieldValue, RawValue, RowSource};
pub use validator::{EconomicDataValidator, ValidationError};
