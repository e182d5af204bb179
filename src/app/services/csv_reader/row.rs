//! Row value types shared by the validator and converter
//!
//! Rows read from files hold text only. Rows built in code may carry
//! already-typed numbers, so validation works over a borrowed view that
//! covers both cases.

use std::collections::HashMap;
use std::hash::BuildHasher;

/// Owned cell value for rows assembled in code
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Null,
}

impl RawValue {
    /// Borrowed view used during validation
    pub fn as_field(&self) -> FieldValue<'_> {
        match self {
            Self::Text(text) => FieldValue::Text(text),
            Self::Integer(value) => FieldValue::Integer(*value),
            Self::Float(value) => FieldValue::Float(*value),
            Self::Null => FieldValue::Null,
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Borrowed cell value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(i64),
    Float(f64),
    Null,
}

impl FieldValue<'_> {
    /// Absent, null, empty or whitespace-only
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Null => true,
            Self::Integer(_) | Self::Float(_) => false,
        }
    }

    /// Value as it should appear in an error message
    pub fn display(&self) -> String {
        match self {
            Self::Text(text) => (*text).to_string(),
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Null => "null".to_string(),
        }
    }
}

/// Column lookup over a row mapping
///
/// Absent columns are reported as [`FieldValue::Null`].
pub trait RowSource {
    fn field(&self, column: &str) -> FieldValue<'_>;
}

impl<S: BuildHasher> RowSource for HashMap<String, String, S> {
    fn field(&self, column: &str) -> FieldValue<'_> {
        self.get(column)
            .map_or(FieldValue::Null, |value| FieldValue::Text(value))
    }
}

impl<S: BuildHasher> RowSource for HashMap<String, RawValue, S> {
    fn field(&self, column: &str) -> FieldValue<'_> {
        self.get(column).map_or(FieldValue::Null, RawValue::as_field)
    }
}

impl<S: BuildHasher> RowSource for HashMap<&str, RawValue, S> {
    fn field(&self, column: &str) -> FieldValue<'_> {
        self.get(column).map_or(FieldValue::Null, RawValue::as_field)
    }
}
