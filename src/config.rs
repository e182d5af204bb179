//! Configuration management for the macro analyzer
//!
//! Provides configuration structures for the reader, the analysis pipeline and
//! logging. Values are layered: built-in defaults, then a TOML file, then
//! `MACRO_ANALYZER_*` environment variables. Command line flags are applied on
//! top by the CLI.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::services::statistics::CalculatorKind;
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CALCULATOR, DEFAULT_DELIMITERS, DEFAULT_LOG_LEVEL,
    DEFAULT_REPORT, DEFAULT_SAMPLE_SIZE, ENV_PREFIX, LOG_LEVELS,
};
use crate::{Error, Result};

/// Delimiter detection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Leading bytes inspected for delimiter detection
    pub sample_size: usize,

    /// Candidate delimiters in tie-break order
    pub delimiters: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            delimiters: DEFAULT_DELIMITERS.to_string(),
        }
    }
}

/// Report and calculator selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Report rendered when none is requested
    pub default_report: String,

    /// Calculator name (`gdp`, `unemployment-trend`, `population-by-continent`)
    pub calculator: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_report: DEFAULT_REPORT.to_string(),
            calculator: DEFAULT_CALCULATOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Base log level when no verbosity flag is given
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Global configuration for the macro analyzer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reader: ReaderConfig,
    pub analysis: AnalysisConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "Invalid config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Configuration file `load_layered` reads, if any
    ///
    /// An explicit path is returned as given; otherwise the per-user config
    /// file when it exists.
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => default_config_path().filter(|path| path.is_file()),
        }
    }

    /// Build the layered configuration
    ///
    /// An explicit `path` must exist. Without one, the per-user config file is
    /// used when present. Environment overrides are applied last and the
    /// result is validated.
    pub fn load_layered(path: Option<&Path>) -> Result<Self> {
        let mut config = match Self::resolve_path(path) {
            Some(path) => Self::load_from_file(&path)?,
            None => Self::default(),
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `MACRO_ANALYZER_*` overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_env_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides using `lookup` to resolve variable names
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| lookup(&format!("{}{}", ENV_PREFIX, suffix));

        if let Some(report) = var("REPORT") {
            self.analysis.default_report = report;
        }
        if let Some(calculator) = var("CALCULATOR") {
            self.analysis.calculator = calculator;
        }
        if let Some(level) = var("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(sample_size) = var("SAMPLE_SIZE") {
            self.reader.sample_size = sample_size.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "{}SAMPLE_SIZE must be a positive integer, got '{}'",
                    ENV_PREFIX, sample_size
                ))
            })?;
        }

        Ok(())
    }

    /// Check value ranges and names
    pub fn validate(&self) -> Result<()> {
        if self.reader.sample_size == 0 {
            return Err(Error::configuration("reader.sample_size must be greater than 0"));
        }

        if self.reader.delimiters.is_empty() {
            return Err(Error::configuration("reader.delimiters must not be empty"));
        }
        if let Some(bad) = self
            .reader
            .delimiters
            .chars()
            .find(|c| !DEFAULT_DELIMITERS.contains(*c))
        {
            return Err(Error::configuration(format!(
                "Unsupported delimiter {:?} in reader.delimiters",
                bad
            )));
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(Error::configuration(format!(
                "Unknown log level '{}'. Expected one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        self.calculator_kind()?;
        Ok(())
    }

    /// The configured calculator as a typed selector
    pub fn calculator_kind(&self) -> Result<CalculatorKind> {
        self.analysis
            .calculator
            .parse::<CalculatorKind>()
            .map_err(|e| Error::configuration(e.to_string()))
    }
}

/// Per-user configuration file location, if a config directory is known
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.reader.sample_size, 1024);
        assert_eq!(config.reader.delimiters, ",;\t");
        assert_eq!(config.analysis.default_report, "average_gdp");
        assert_eq!(config.analysis.calculator, "gdp");
        assert_eq!(config.logging.level, "error");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = config_file(
            r#"
[analysis]
calculator = "unemployment-trend"
"#,
        );

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.analysis.calculator, "unemployment-trend");
        assert_eq!(config.analysis.default_report, "average_gdp");
        assert_eq!(config.reader.sample_size, 1024);
        assert_eq!(
            config.calculator_kind().unwrap(),
            CalculatorKind::UnemploymentTrend
        );
    }

    #[test]
    fn test_invalid_toml() {
        let file = config_file("[reader\nsample_size = ");
        let error = Config::load_from_file(file.path()).unwrap_err();
        assert!(matches!(error, Error::Configuration { .. }));
    }

    #[test]
    fn test_explicit_missing_file_fails() {
        let error = Config::load_layered(Some(Path::new("/no/such/config.toml"))).unwrap_err();
        assert!(error.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_resolve_path_prefers_explicit_file() {
        let file = config_file("[logging]\nlevel = \"info\"\n");

        assert_eq!(
            Config::resolve_path(Some(file.path())),
            Some(file.path().to_path_buf())
        );
        assert_eq!(
            Config::resolve_path(Some(Path::new("/no/such/config.toml"))),
            Some(PathBuf::from("/no/such/config.toml"))
        );
        if let Some(path) = Config::resolve_path(None) {
            assert!(path.is_file());
        }
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("MACRO_ANALYZER_REPORT", "custom"),
            ("MACRO_ANALYZER_CALCULATOR", "population-by-continent"),
            ("MACRO_ANALYZER_LOG_LEVEL", "debug"),
            ("MACRO_ANALYZER_SAMPLE_SIZE", "2048"),
        ]);

        let mut config = Config::default();
        config
            .apply_env_overrides_from(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.analysis.default_report, "custom");
        assert_eq!(config.analysis.calculator, "population-by-continent");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.reader.sample_size, 2048);
    }

    #[test]
    fn test_env_bad_sample_size() {
        let mut config = Config::default();
        let result = config.apply_env_overrides_from(|key| {
            (key == "MACRO_ANALYZER_SAMPLE_SIZE").then(|| "lots".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.reader.sample_size = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.reader.delimiters = "|".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.reader.delimiters.clear();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.analysis.calculator = "median".to_string();
        let message = config.validate().unwrap_err().to_string();
        assert!(message.contains("median"));
    }

    #[test]
    fn test_default_config_path_location() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("macro-analyzer/config.toml"));
        }
    }
}
