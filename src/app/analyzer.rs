//! Read -> aggregate -> report pipeline
//!
//! [`MacroEconomicAnalyzer`] wires a [`CsvEconomicReader`], a
//! [`StatisticsCalculator`] and a [`ReportRegistry`] together. Each piece can
//! be swapped; the defaults are the standard reader, the GDP calculator and
//! the process-wide registry.
//!
//! ```rust,no_run
//! use macro_analyzer::MacroEconomicAnalyzer;
//!
//! # fn example() -> macro_analyzer::Result<()> {
//! let analyzer = MacroEconomicAnalyzer::new();
//! let table = analyzer.analyze(&["data2023.csv"], "average_gdp")?;
//! println!("{}", table);
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::app::services::csv_reader::CsvEconomicReader;
use crate::app::services::reports::{ReportRegistry, report_registry};
use crate::app::services::statistics::{GdpCalculator, StatisticsCalculator};
use crate::{Error, Result};

/// Facade over reading, aggregation and report generation
pub struct MacroEconomicAnalyzer<'r> {
    reader: CsvEconomicReader,
    calculator: Box<dyn StatisticsCalculator>,
    registry: &'r ReportRegistry,
}

impl MacroEconomicAnalyzer<'static> {
    /// Create an analyzer with the default reader, GDP calculator and the
    /// process-wide registry
    pub fn new() -> Self {
        Self {
            reader: CsvEconomicReader::new(),
            calculator: Box::new(GdpCalculator::new()),
            registry: report_registry(),
        }
    }
}

impl Default for MacroEconomicAnalyzer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> MacroEconomicAnalyzer<'r> {
    pub fn with_reader(mut self, reader: CsvEconomicReader) -> Self {
        self.reader = reader;
        self
    }

    pub fn with_calculator(mut self, calculator: Box<dyn StatisticsCalculator>) -> Self {
        self.calculator = calculator;
        self
    }

    /// Use `registry` for report lookup instead of the process-wide one
    pub fn with_registry<'a>(self, registry: &'a ReportRegistry) -> MacroEconomicAnalyzer<'a> {
        MacroEconomicAnalyzer {
            reader: self.reader,
            calculator: self.calculator,
            registry,
        }
    }

    pub fn calculator_name(&self) -> &'static str {
        self.calculator.name()
    }

    /// Read `paths`, aggregate the records and render `report_name`
    ///
    /// Reading errors propagate unchanged. An unregistered report name fails
    /// with an argument error listing the registered names.
    pub fn analyze<P: AsRef<Path>>(&self, paths: &[P], report_name: &str) -> Result<String> {
        info!(
            "Analyzing {} file(s) with report '{}' and calculator '{}'",
            paths.len(),
            report_name,
            self.calculator.name()
        );

        let records = self.reader.read(paths)?;
        let statistics = self.calculator.calculate(&records);

        let report = self.registry.create(report_name).ok_or_else(|| {
            Error::invalid_argument(format!(
                "Unknown report type: '{}'. Available reports: {}",
                report_name,
                self.registry.names().join(", ")
            ))
        })?;

        info!(
            "Generating '{}' from {} country statistics",
            report.name(),
            statistics.len()
        );
        Ok(report.generate(&statistics))
    }

    /// Registered report names mapped to their descriptions
    pub fn available_reports(&self) -> BTreeMap<String, String> {
        self.registry.list_reports()
    }
}

/// Analyze `paths` with every default and render `report_name`
pub fn analyze_economic_data<P: AsRef<Path>>(paths: &[P], report_name: &str) -> Result<String> {
    MacroEconomicAnalyzer::new().analyze(paths, report_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{CountryStatistics, EconomicRecord};
    use crate::app::services::reports::Report;
    use crate::app::services::statistics::UnemploymentTrendCalculator;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const DATA: &str = "\
country,year,gdp,gdp_growth,inflation,unemployment,population,continent
USA,2020,21433.2,-3.4,1.2,8.1,331,North America
USA,2021,23315.1,5.9,4.7,5.4,332,North America
Germany,2021,4259.9,2.6,3.1,3.6,83,Europe
";

    fn data_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", DATA).unwrap();
        file
    }

    struct CountriesOnly;

    impl Report for CountriesOnly {
        fn name(&self) -> &str {
            "countries"
        }

        fn description(&self) -> &str {
            "Country names, one per line"
        }

        fn generate(&self, statistics: &[CountryStatistics]) -> String {
            statistics
                .iter()
                .map(|s| s.country().to_string())
                .collect::<Vec<_>>()
                .join("\n")
        }
    }

    #[test]
    fn test_analyze_default_report() {
        let file = data_file();
        let output = MacroEconomicAnalyzer::new()
            .analyze(&[file.path()], "average_gdp")
            .unwrap();

        assert!(output.contains('+'));
        assert!(output.contains('|'));
        assert!(output.contains("22,374.15"));
        assert!(output.find("USA").unwrap() < output.find("Germany").unwrap());
    }

    #[test]
    fn test_unknown_report_lists_available() {
        let file = data_file();
        let error = MacroEconomicAnalyzer::new()
            .analyze(&[file.path()], "unknown-report")
            .unwrap_err();

        assert!(matches!(error, Error::InvalidArgument { .. }));
        assert_eq!(
            error.to_string(),
            "Unknown report type: 'unknown-report'. Available reports: average_gdp"
        );
    }

    #[test]
    fn test_read_errors_propagate_before_report_lookup() {
        let missing = ["/no/such/file.csv"];
        let error = MacroEconomicAnalyzer::new()
            .analyze(&missing, "unknown-report")
            .unwrap_err();
        assert!(matches!(error, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_custom_registry() {
        let mut registry = ReportRegistry::with_defaults();
        registry.register("countries", || Box::new(CountriesOnly));

        let analyzer = MacroEconomicAnalyzer::new().with_registry(&registry);
        let file = data_file();

        assert_eq!(
            analyzer.analyze(&[file.path()], "countries").unwrap(),
            "USA\nGermany"
        );
        let reports = analyzer.available_reports();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports["countries"], "Country names, one per line");
    }

    #[test]
    fn test_custom_calculator() {
        let analyzer =
            MacroEconomicAnalyzer::new().with_calculator(Box::new(UnemploymentTrendCalculator));
        assert_eq!(analyzer.calculator_name(), "unemployment-trend");

        let file = data_file();
        let output = analyzer.analyze(&[file.path()], "average_gdp").unwrap();
        assert!(!output.contains("USA"));
        assert!(output.contains("Country"));
    }

    #[test]
    fn test_available_reports() {
        let reports = MacroEconomicAnalyzer::new().available_reports();
        assert_eq!(
            reports.get("average_gdp").map(String::as_str),
            Some("Average GDP by country (arithmetic mean across all years)")
        );
    }

    #[test]
    fn test_convenience_function() {
        let file = data_file();
        let output = analyze_economic_data(&[file.path()], "average_gdp").unwrap();
        assert!(output.contains("4,259.90"));

        let empty: [&str; 0] = [];
        let error = analyze_economic_data(&empty, "average_gdp").unwrap_err();
        assert!(error.to_string().contains("No files provided"));
    }

    #[test]
    fn test_converted_records_revalidate() {
        let file = data_file();
        let records: Vec<EconomicRecord> = CsvEconomicReader::new().read(&[file.path()]).unwrap();
        let validator = crate::app::services::csv_reader::EconomicDataValidator::new();

        for (i, record) in records.iter().enumerate() {
            assert!(validator.validate_row(&record.to_row(), i + 2).is_ok());
        }
    }
}
