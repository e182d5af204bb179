//! Field parsing utilities for economic indicator rows
//!
//! Helpers that turn a single cell into an integer, a float or trimmed text.
//! They return `None` on any parse failure; callers decide how to report it.

use super::row::FieldValue;

/// Parse an integer cell
///
/// Text is trimmed before parsing. Floats are accepted only when they carry
/// no fractional part.
pub fn parse_integer(value: FieldValue<'_>) -> Option<i64> {
    match value {
        FieldValue::Text(text) => text.trim().parse::<i64>().ok(),
        FieldValue::Integer(value) => Some(value),
        FieldValue::Float(value) => {
            if value.is_finite()
                && value.fract() == 0.0
                && value >= i64::MIN as f64
                && value <= i64::MAX as f64
            {
                Some(value as i64)
            } else {
                None
            }
        }
        FieldValue::Null => None,
    }
}

/// Parse a finite float cell
pub fn parse_float(value: FieldValue<'_>) -> Option<f64> {
    let parsed = match value {
        FieldValue::Text(text) => text.trim().parse::<f64>().ok()?,
        FieldValue::Integer(value) => value as f64,
        FieldValue::Float(value) => value,
        FieldValue::Null => return None,
    };

    parsed.is_finite().then_some(parsed)
}

/// Trimmed, non-blank text cell
pub fn parse_text(value: FieldValue<'_>) -> Option<&str> {
    match value {
        FieldValue::Text(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then_some(trimmed)
        }
        _ => None,
    }
}
