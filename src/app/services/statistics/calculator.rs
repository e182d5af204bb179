//! Calculator trait and name-based selection

use std::fmt;
use std::str::FromStr;

use super::gdp::GdpCalculator;
use super::placeholders::{PopulationByContinentCalculator, UnemploymentTrendCalculator};
use crate::Error;
use crate::app::models::{CountryStatistics, EconomicRecord};

/// Aggregates records into per-country statistics
pub trait StatisticsCalculator: Send + Sync {
    /// Short name used in logs and for selection
    fn name(&self) -> &'static str;

    /// Aggregate `records`; never fails, empty input gives an empty result
    fn calculate(&self, records: &[EconomicRecord]) -> Vec<CountryStatistics>;
}

/// Selectable calculator variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalculatorKind {
    #[default]
    Gdp,
    UnemploymentTrend,
    PopulationByContinent,
}

impl CalculatorKind {
    /// Every variant, in display order
    pub const ALL: [CalculatorKind; 3] = [
        CalculatorKind::Gdp,
        CalculatorKind::UnemploymentTrend,
        CalculatorKind::PopulationByContinent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CalculatorKind::Gdp => "gdp",
            CalculatorKind::UnemploymentTrend => "unemployment-trend",
            CalculatorKind::PopulationByContinent => "population-by-continent",
        }
    }

    /// Construct the calculator for this variant
    pub fn build(&self) -> Box<dyn StatisticsCalculator> {
        match self {
            CalculatorKind::Gdp => Box::new(GdpCalculator::new()),
            CalculatorKind::UnemploymentTrend => Box::new(UnemploymentTrendCalculator),
            CalculatorKind::PopulationByContinent => Box::new(PopulationByContinentCalculator),
        }
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculatorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| {
                let available: Vec<&str> = Self::ALL.iter().map(|kind| kind.as_str()).collect();
                Error::invalid_argument(format!(
                    "Unknown calculator '{}'. Available calculators: {}",
                    s,
                    available.join(", ")
                ))
            })
    }
}
