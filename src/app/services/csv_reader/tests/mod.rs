//! Test utilities for the delimited file reader
//!
//! Shared fixtures for the validator, converter and reader test modules.

use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

use super::RawValue;


/// Header line with every required column
pub const STANDARD_HEADER: &str =
    "country,year,gdp,gdp_growth,inflation,unemployment,population,continent";

/// A valid row as text, the way the reader produces it
pub fn sample_text_row() -> HashMap<String, String> {
    [
        ("country", "Testland"),
        ("year", "2023"),
        ("gdp", "1000.5"),
        ("gdp_growth", "2.5"),
        ("inflation", "3.0"),
        ("unemployment", "4.5"),
        ("population", "50"),
        ("continent", "Testinia"),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect()
}

/// The same valid row with already-typed numbers
pub fn sample_typed_row() -> HashMap<String, RawValue> {
    HashMap::from([
        ("country".to_string(), RawValue::from("Testland")),
        ("year".to_string(), RawValue::Integer(2023)),
        ("gdp".to_string(), RawValue::Float(1000.5)),
        ("gdp_growth".to_string(), RawValue::Float(2.5)),
        ("inflation".to_string(), RawValue::Float(3.0)),
        ("unemployment".to_string(), RawValue::Float(4.5)),
        ("population".to_string(), RawValue::Integer(50)),
        ("continent".to_string(), RawValue::from("Testinia")),
    ])
}

/// Standard header followed by the given data lines
pub fn csv_with_rows(rows: &[&str]) -> String {
    let mut content = String::from(STANDARD_HEADER);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    content
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
