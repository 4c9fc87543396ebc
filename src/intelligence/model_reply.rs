// ABOUTME: Tagged parsing of raw model replies into JSON objects
// ABOUTME: Shape coercion helpers so reconcilers never trust an unchecked field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Coach Contributors

//! Model reply parsing.
//!
//! A reply is either a JSON object (`Parsed`) or it is not (`Unparsable`).
//! There is no partial recovery: text around the JSON, code fences and
//! truncated objects all count as unparsable and route the caller to its
//! deterministic fallback.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::models::record::json_kind;

/// Result of reading a raw model reply
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// The reply is a JSON object
    Parsed(Map<String, Value>),
    /// No reply, malformed JSON, or JSON that is not an object
    Unparsable,
}

impl ParseOutcome {
    /// Whether the reply produced an object
    #[must_use]
    pub const fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }
}

/// Strictly parse a model reply; surrounding whitespace is the only tolerance
#[must_use]
pub fn parse_model_reply(reply: Option<&str>) -> ParseOutcome {
    let Some(text) = reply.map(str::trim).filter(|text| !text.is_empty()) else {
        debug!("No model reply supplied");
        return ParseOutcome::Unparsable;
    };

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(fields)) => ParseOutcome::Parsed(fields),
        Ok(other) => {
            warn!(
                "Model reply is JSON but not an object ({}), using fallback",
                json_kind(&other)
            );
            ParseOutcome::Unparsable
        }
        Err(e) => {
            warn!("Model reply is not valid JSON: {e}, using fallback");
            ParseOutcome::Unparsable
        }
    }
}

/// String field, or `None` when absent or not a string
#[must_use]
pub fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// Array field as strings; non-arrays become empty and non-string items are rendered
#[must_use]
pub fn list_field(fields: &Map<String, Value>, key: &str) -> Vec<String> {
    fields
        .get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(item_text).collect())
        .unwrap_or_default()
}

/// Object field, or `None` when absent or not an object
#[must_use]
pub fn object_field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    fields.get(key).and_then(Value::as_object)
}

/// Free text that may arrive as a string or a list of strings
///
/// Lists are joined with `separator`; objects inside a list are kept as JSON.
#[must_use]
pub fn joined_text_field(fields: &Map<String, Value>, key: &str, separator: &str) -> Option<String> {
    match fields.get(key)? {
        Value::String(text) => Some(text.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(item_text)
                .collect::<Vec<_>>()
                .join(separator),
        ),
        _ => None,
    }
}

fn item_text(item: &Value) -> Option<String> {
    match item {
        Value::String(text) => Some(text.clone()),
        Value::Null => None,
        Value::Number(_) | Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
            Some(item.to_string())
        }
    }
}
