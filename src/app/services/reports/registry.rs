//! Name to constructor mapping for reports

use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use super::Report;
use super::average_gdp::{self, AverageGdpReport};

/// Builds a fresh report instance
pub type ReportConstructor = fn() -> Box<dyn Report>;

/// Registry of reports keyed by name
#[derive(Debug, Clone, Default)]
pub struct ReportRegistry {
    constructors: HashMap<String, ReportConstructor>,
}

impl ReportRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in reports
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(average_gdp::NAME, || Box::new(AverageGdpReport::new()));
        registry
    }

    /// Bind `name` to `constructor`, replacing any existing binding
    pub fn register(&mut self, name: impl Into<String>, constructor: ReportConstructor) {
        let name = name.into();
        if self.constructors.insert(name.clone(), constructor).is_some() {
            debug!("Replaced report registration: {}", name);
        } else {
            debug!("Registered report: {}", name);
        }
    }

    /// Construct the report registered under `name`
    pub fn create(&self, name: &str) -> Option<Box<dyn Report>> {
        self.constructors.get(name).map(|constructor| constructor())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered names mapped to their descriptions, sorted by name
    pub fn list_reports(&self) -> BTreeMap<String, String> {
        self.constructors
            .iter()
            .map(|(name, constructor)| (name.clone(), constructor().description().to_string()))
            .collect()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.constructors.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

static GLOBAL_REGISTRY: Lazy<ReportRegistry> = Lazy::new(|| {
    debug!("Initialising process-wide report registry");
    ReportRegistry::with_defaults()
});

/// The process-wide registry, built with the default reports on first use
pub fn report_registry() -> &'static ReportRegistry {
    &GLOBAL_REGISTRY
}
