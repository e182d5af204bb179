//! Macro Analyzer Library
//!
//! A Rust library for turning delimited macroeconomic indicator files
//! (country, year, GDP, inflation, ...) into per-country tabular reports.
//!
//! This library provides tools for:
//! - Reading comma, semicolon or tab separated files with delimiter detection
//! - Validating every row before it becomes a typed record
//! - Aggregating records per country with pluggable calculators
//! - Rendering reports selected by name from a report registry

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod analyzer;
    pub mod models;
    pub mod services {
        pub mod csv_reader;
        pub mod reports;
        pub mod statistics;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::analyzer::{MacroEconomicAnalyzer, analyze_economic_data};
pub use app::models::{CountryStatistics, EconomicRecord};
pub use app::services::csv_reader::ValidationError;
pub use config::Config;

/// Result type alias for the macro analyzer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the read -> validate -> aggregate -> report pipeline
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Input file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Header or row failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Caller supplied an unusable argument (empty file list, unknown report, ...)
    #[error("{message}")]
    InvalidArgument { message: String },

    /// A converted row lacked a required key
    #[error("Missing required field '{field}'")]
    MissingField { field: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Delimited text could not be parsed
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error came from header or row validation
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
