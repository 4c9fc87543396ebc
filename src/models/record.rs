// ABOUTME: Permissive field-mapping records for inbound request bodies
// ABOUTME: Coerces numeric strings, drops unparsable values and never fails on individual fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

//! Inbound field records.
//!
//! The HTTP layer forwards form data where numbers frequently arrive as
//! strings (`"45"`, `"4.8s"`, `""`). A [`FieldRecord`] reads those leniently:
//! a value is a number when its leading text parses as one, and anything else
//! is simply absent.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::LazyLock;

use crate::errors::{AppError, AppResult};

/// Leading numeric prefix, mirroring how form fields like `"4.8s"` or `"45kg"` are read
static LEADING_NUMBER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").ok());

/// A JSON object of caller-supplied fields with lenient accessors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldRecord(Map<String, Value>);

impl FieldRecord {
    /// Build from any JSON value; non-objects become an empty record
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self(fields),
            _ => Self::default(),
        }
    }

    /// Decode a request body
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when the body is not JSON or not a JSON object
    pub fn from_json_str(body: &str) -> AppResult<Self> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| AppError::invalid_format(format!("request body is not JSON: {e}")))?;
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(AppError::invalid_format(format!(
                "request body must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Whether the record carries no fields at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw access to a field
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Numeric field, accepting numbers and numeric strings
    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(parse_lenient_number)
    }

    /// First present numeric field among aliases
    #[must_use]
    pub fn first_number(&self, keys: &[&str]) -> Option<f64> {
        keys.iter().find_map(|key| self.number(key))
    }

    /// Trimmed, non-empty text field; numbers are rendered as text
    #[must_use]
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_owned())
            }
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// First present text field among aliases
    #[must_use]
    pub fn first_text(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| self.text(key))
    }

    /// Nested record; absent or non-object values yield an empty record
    #[must_use]
    pub fn record(&self, key: &str) -> Self {
        self.0
            .get(key)
            .cloned()
            .map_or_else(Self::default, Self::from_value)
    }
}

impl From<Map<String, Value>> for FieldRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Read a JSON value as a finite number, the way a form field would be read
///
/// Numbers pass through; strings are trimmed and their leading numeric
/// prefix is parsed (`"4.8s"` is 4.8). Everything else is absent.
#[must_use]
pub fn parse_lenient_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_leading_number(s),
        _ => None,
    }
}

/// Parse the leading numeric prefix of a string
#[must_use]
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let pattern = LEADING_NUMBER.as_ref()?;
    let matched = pattern.find(text.trim())?;
    matched
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

pub(crate) const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> FieldRecord {
        FieldRecord::from_value(value)
    }

    #[test]
    fn test_number_accepts_numeric_strings_with_units() {
        let fields = record(json!({ "weight": "45kg", "sprint30m": " 4.8 ", "age": 12 }));

        assert_eq!(fields.number("weight"), Some(45.0));
        assert_eq!(fields.number("sprint30m"), Some(4.8));
        assert_eq!(fields.number("age"), Some(12.0));
    }

    #[test]
    fn test_unparsable_and_empty_values_are_absent() {
        let fields = record(json!({ "a": "fast", "b": "", "c": null, "d": true, "e": [1] }));

        for key in ["a", "b", "c", "d", "e", "missing"] {
            assert_eq!(fields.number(key), None, "{key} should be absent");
        }
    }

    #[test]
    fn test_text_trims_and_renders_numbers() {
        let fields = record(json!({ "goals": "  传球技术 ", "level": 3, "blank": "   " }));

        assert_eq!(fields.text("goals").as_deref(), Some("传球技术"));
        assert_eq!(fields.text("level").as_deref(), Some("3"));
        assert_eq!(fields.text("blank"), None);
    }

    #[test]
    fn test_from_json_str_rejects_non_objects() {
        assert!(FieldRecord::from_json_str("[1, 2]").is_err());
        assert!(FieldRecord::from_json_str("not json").is_err());
        assert!(FieldRecord::from_json_str(r#"{"age": "12"}"#).is_ok());
    }

    #[test]
    fn test_nested_record_defaults_to_empty() {
        let fields = record(json!({ "physical": { "sprint30m": "4.5" }, "skills": "n/a" }));

        assert_eq!(fields.record("physical").number("sprint30m"), Some(4.5));
        assert!(fields.record("skills").is_empty());
        assert!(fields.record("match").is_empty());
    }
}
