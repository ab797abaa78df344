//! Structural access to raw catalog records.
//!
//! Records stay as `serde_json::Value` so fields the merge does not know
//! about pass through untouched and in order.

use crate::MergeConfig;
use serde_json::{Map, Value};
use std::fmt;

/// Why a record could not take part in matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordDefect {
    NotAnObject,
    MissingField(String),
    NotAString(String),
}

impl fmt::Display for RecordDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordDefect::NotAnObject => write!(f, "record is not a JSON object"),
            RecordDefect::MissingField(field) => write!(f, "missing '{}'", field),
            RecordDefect::NotAString(field) => write!(f, "'{}' is not a string", field),
        }
    }
}

/// Borrowed view of an image-bearing record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageRecord<'a> {
    /// `None` when the name is JSON `null`
    pub name: Option<&'a str>,
    pub image_refs: &'a Value,
}

impl<'a> ImageRecord<'a> {
    /// Read name and image references, unwrapping the configured envelope
    /// (`{"character": {...}}`) when present.
    pub fn from_value(value: &'a Value, config: &MergeConfig) -> Result<Self, RecordDefect> {
        let object = value.as_object().ok_or(RecordDefect::NotAnObject)?;
        let object = match config.envelope_field.as_deref() {
            Some(envelope) => match object.get(envelope) {
                Some(Value::Object(inner)) => inner,
                _ => object,
            },
            None => object,
        };

        let name = name_of(object, &config.name_field)?;
        let image_refs = object
            .get(&config.image_field)
            .ok_or_else(|| RecordDefect::MissingField(config.image_field.clone()))?;

        Ok(Self { name, image_refs })
    }
}

/// Read the name field of a record.
///
/// `Ok(None)` for an explicit `null`, which normalizes to the empty key.
pub fn name_of<'a>(object: &'a Map<String, Value>, field: &str) -> Result<Option<&'a str>, RecordDefect> {
    match object.get(field) {
        None => Err(RecordDefect::MissingField(field.to_string())),
        Some(Value::Null) => Ok(None),
        Some(Value::String(name)) => Ok(Some(name.as_str())),
        Some(_) => Err(RecordDefect::NotAString(field.to_string())),
    }
}
