//! Tests for the average GDP table

use super::*;
use crate::app::services::reports::AverageGdpReport;

#[test]
fn test_name_and_description() {
    let report = AverageGdpReport::new();
    assert_eq!(report.name(), "average_gdp");
    assert_eq!(
        report.description(),
        "Average GDP by country (arithmetic mean across all years)"
    );
}

#[test]
fn test_table_header_and_borders() {
    let output = AverageGdpReport::new().generate(&sample_statistics());
    let lines: Vec<&str> = output.lines().collect();

    assert!(lines[0].starts_with('+'));
    assert!(lines[1].contains("| # "));
    assert!(lines[1].contains("Country"));
    assert!(lines[1].contains("Average GDP (USD billions)"));
    assert!(lines[1].contains("Years"));
    assert!(output.contains('|'));
}

#[test]
fn test_rows_are_numbered_in_given_order() {
    let output = AverageGdpReport::new().generate(&sample_statistics());

    let usa = output.find("United States").unwrap();
    let germany = output.find("Germany").unwrap();
    let chile = output.find("Chile").unwrap();
    assert!(usa < germany && germany < chile);

    let first_row = output.lines().find(|line| line.contains("United States")).unwrap();
    assert!(first_row.trim_start_matches('|').trim_start().starts_with('1'));
}

#[test]
fn test_numbers_use_thousands_separators() {
    let output = AverageGdpReport::new().generate(&sample_statistics());

    assert!(output.contains("22,374.15"));
    assert!(output.contains("4,254.50"));
    assert!(output.contains("317.00"));
}

#[test]
fn test_numeric_columns_right_aligned() {
    let output = AverageGdpReport::new().generate(&sample_statistics());
    let chile_row = output.lines().find(|line| line.contains("Chile")).unwrap();

    // Shorter values are padded on the left
    assert!(chile_row.contains(" 317.00 |"));
    assert!(chile_row.contains("     317.00"));
}

#[test]
fn test_empty_statistics_render_header_only() {
    let output = AverageGdpReport::new().generate(&[]);

    assert!(output.contains("Country"));
    assert!(output.contains("Average GDP (USD billions)"));
    assert_eq!(output.lines().count(), 3);
}
