// Catalog loading from JSON files
use crate::{Result, StorageError};
use serde_json::Value;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Jikan API responses wrap their payload in `{"data": [...]}`.
const DATA_FIELD: &str = "data";

/// Load a catalog file into memory.
///
/// Accepts a top-level JSON array, or an object whose `data` field is an
/// array. A missing file and an unparseable file are distinct errors.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Value>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => StorageError::NotFound {
            path: path.to_path_buf(),
        },
        _ => StorageError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let records = parse_catalog(&text).map_err(|e| match e {
        ParseFailure::Json(e) => StorageError::Malformed {
            path: path.to_path_buf(),
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        },
        ParseFailure::Shape(found) => StorageError::NotACollection {
            path: path.to_path_buf(),
            found,
        },
    })?;

    debug!("Loaded {} records from {:?}", records.len(), path);
    Ok(records)
}

enum ParseFailure {
    Json(serde_json::Error),
    Shape(&'static str),
}

fn parse_catalog(text: &str) -> std::result::Result<Vec<Value>, ParseFailure> {
    let value: Value = serde_json::from_str(text).map_err(ParseFailure::Json)?;
    match value {
        Value::Array(records) => Ok(records),
        Value::Object(mut object) => match object.remove(DATA_FIELD) {
            Some(Value::Array(records)) => Ok(records),
            _ => Err(ParseFailure::Shape("an object without a \"data\" array")),
        },
        other => Err(ParseFailure::Shape(kind_of(&other))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
