//! Average GDP by country as an ASCII grid table

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};
use tracing::debug;

use super::Report;
use super::format::format_thousands;
use crate::app::models::CountryStatistics;

pub const NAME: &str = "average_gdp";
pub const DESCRIPTION: &str = "Average GDP by country (arithmetic mean across all years)";

/// One table row
#[derive(Debug, Tabled)]
struct AverageGdpRow {
    #[tabled(rename = "#")]
    rank: usize,

    #[tabled(rename = "Country")]
    country: String,

    #[tabled(rename = "Average GDP (USD billions)")]
    average_gdp: String,

    #[tabled(rename = "Years")]
    years: usize,
}

/// Ranked table of average GDP per country
///
/// Rows are numbered from 1 in the order the statistics arrive. An empty
/// statistics list renders just the header.
#[derive(Debug, Clone, Copy, Default)]
pub struct AverageGdpReport;

impl AverageGdpReport {
    pub fn new() -> Self {
        Self
    }
}

impl Report for AverageGdpReport {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn generate(&self, statistics: &[CountryStatistics]) -> String {
        debug!("Rendering {} rows for {}", statistics.len(), NAME);

        let rows: Vec<AverageGdpRow> = statistics
            .iter()
            .enumerate()
            .map(|(i, stat)| AverageGdpRow {
                rank: i + 1,
                country: stat.country().to_string(),
                average_gdp: format_thousands(stat.average_gdp()),
                years: stat.years_count(),
            })
            .collect();

        Table::new(rows)
            .with(Style::ascii())
            .with(Modify::new(Columns::single(0)).with(Alignment::right()))
            .with(Modify::new(Columns::new(2..)).with(Alignment::right()))
            .to_string()
    }
}
