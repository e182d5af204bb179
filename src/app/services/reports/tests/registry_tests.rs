//! Tests for the report registry

use super::*;
use crate::app::services::reports::{ReportRegistry, report_registry};

#[test]
fn test_defaults_contain_average_gdp() {
    let registry = ReportRegistry::with_defaults();

    assert_eq!(registry.names(), vec!["average_gdp".to_string()]);
    let report = registry.create("average_gdp").unwrap();
    assert_eq!(report.name(), "average_gdp");
}

#[test]
fn test_create_unknown_is_none() {
    let registry = ReportRegistry::with_defaults();
    assert!(registry.create("unknown-report").is_none());
    assert!(ReportRegistry::new().create("average_gdp").is_none());
}

#[test]
fn test_register_and_list() {
    let mut registry = ReportRegistry::with_defaults();
    registry.register("count_only", || Box::new(CountOnlyReport));

    let listing = registry.list_reports();
    let names: Vec<&String> = listing.keys().collect();
    assert_eq!(names, vec!["average_gdp", "count_only"]);

    // Description falls back to the name
    assert_eq!(listing["count_only"], "count_only");
    assert_eq!(
        listing["average_gdp"],
        "Average GDP by country (arithmetic mean across all years)"
    );
}

#[test]
fn test_register_overwrites() {
    let mut registry = ReportRegistry::with_defaults();
    registry.register("average_gdp", || Box::new(CountOnlyReport));

    assert_eq!(registry.len(), 1);
    let report = registry.create("average_gdp").unwrap();
    assert_eq!(report.generate(&sample_statistics()), "3 countries");
}

#[test]
fn test_names_are_sorted() {
    let mut registry = ReportRegistry::new();
    assert!(registry.is_empty());

    registry.register("zeta", || Box::new(CountOnlyReport));
    registry.register("alpha", || Box::new(CountOnlyReport));
    registry.register("mid", || Box::new(CountOnlyReport));

    assert_eq!(registry.names(), vec!["alpha", "mid", "zeta"]);
    assert!(registry.contains("mid"));
}

#[test]
fn test_global_registry_is_shared() {
    let first = report_registry();
    let second = report_registry();

    assert!(std::ptr::eq(first, second));
    assert!(first.contains("average_gdp"));
}

#[test]
fn test_global_registry_from_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| report_registry().names()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec!["average_gdp".to_string()]);
    }
}
