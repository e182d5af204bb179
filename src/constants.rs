//! Application constants for the macro analyzer
//!
//! This module contains the column names, validation bounds and default
//! values used throughout the reading, aggregation and reporting pipeline.

// =============================================================================
// Input Columns
// =============================================================================

/// Column names as they appear (lower-cased) in input headers
pub mod columns {
    pub const COUNTRY: &str = "country";
    pub const YEAR: &str = "year";
    pub const GDP: &str = "gdp";
    pub const GDP_GROWTH: &str = "gdp_growth";
    pub const INFLATION: &str = "inflation";
    pub const UNEMPLOYMENT: &str = "unemployment";
    pub const POPULATION: &str = "population";
    pub const CONTINENT: &str = "continent";
}

/// Every column a header must provide, in canonical order.
///
/// Error messages list missing columns in this order.
pub const REQUIRED_COLUMNS: &[&str] = &[
    columns::COUNTRY,
    columns::YEAR,
    columns::GDP,
    columns::GDP_GROWTH,
    columns::INFLATION,
    columns::UNEMPLOYMENT,
    columns::POPULATION,
    columns::CONTINENT,
];

// =============================================================================
// Validation Bounds
// =============================================================================

/// Earliest accepted observation year (inclusive)
pub const MIN_YEAR: i64 = 1900;

/// Latest accepted observation year (inclusive)
pub const MAX_YEAR: i64 = 2100;

/// Smallest accepted population
pub const MIN_POPULATION: i64 = 1;

// =============================================================================
// Reader Defaults
// =============================================================================

/// Number of leading bytes inspected for delimiter detection
pub const DEFAULT_SAMPLE_SIZE: usize = 1024;

/// Candidate delimiters, in tie-break order
pub const DEFAULT_DELIMITERS: &str = ",;\t";

/// Delimiter used when detection fails
pub const FALLBACK_DELIMITER: u8 = b',';

/// Row number of the header line; data rows start right after it
pub const HEADER_ROW_NUMBER: usize = 1;

// =============================================================================
// Analysis Defaults
// =============================================================================

/// Report used when none is requested
pub const DEFAULT_REPORT: &str = "average_gdp";

/// Calculator used when none is requested
pub const DEFAULT_CALCULATOR: &str = "gdp";

/// Decimal places kept for aggregated averages
pub const AVERAGE_DECIMALS: i32 = 2;

// =============================================================================
// Configuration and Logging
// =============================================================================

/// Directory name under the user config dir
pub const CONFIG_DIR_NAME: &str = "macro-analyzer";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "MACRO_ANALYZER_";

/// Default log level for the binary
pub const DEFAULT_LOG_LEVEL: &str = "error";

/// Accepted log level names
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_columns_are_unique_and_lowercase() {
        let mut seen = std::collections::HashSet::new();
        for column in REQUIRED_COLUMNS {
            assert!(seen.insert(*column), "duplicate column {}", column);
            assert_eq!(*column, column.to_lowercase());
        }
        assert_eq!(REQUIRED_COLUMNS.len(), 8);
    }

    #[test]
    fn test_year_bounds() {
        assert!(MIN_YEAR < MAX_YEAR);
        assert_eq!(MIN_YEAR, 1900);
        assert_eq!(MAX_YEAR, 2100);
    }

    #[test]
    fn test_default_delimiters() {
        assert_eq!(DEFAULT_DELIMITERS.as_bytes(), b",;\t");
        assert_eq!(FALLBACK_DELIMITER, b',');
    }
}
