//! JSON ingestion implementation.
//!
//! Supported inputs:
//! - A JSON array of objects: `[{"a":1}, {"a":2}]`
//! - A single JSON object
//! - Newline-delimited JSON (NDJSON): `{"a":1}\n{"a":2}\n`
//!
//! Every value becomes text. Nested objects are flattened into dot-path columns (`user.name`).

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{PipelineError, PipelineResult};
use crate::types::{Row, RowTable};

/// Ingest a JSON file into a [`RowTable`].
pub fn ingest_json_from_path(path: impl AsRef<Path>) -> PipelineResult<RowTable> {
    let text = fs::read_to_string(path)?;
    ingest_json_from_str(&text)
}

/// Ingest JSON from an in-memory string into a [`RowTable`].
pub fn ingest_json_from_str(input: &str) -> PipelineResult<RowTable> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PipelineError::InvalidInput {
            message: "json input is empty".to_string(),
        });
    }

    // First try parsing as a single JSON value (array or object).
    if let Ok(v) = serde_json::from_str::<Value>(trimmed) {
        match v {
            Value::Array(items) => ingest_json_values(&items),
            Value::Object(_) => ingest_json_values(std::slice::from_ref(&v)),
            _ => Err(PipelineError::InvalidInput {
                message: "json must be an object, an array of objects, or NDJSON".to_string(),
            }),
        }
    } else {
        // Fall back to NDJSON.
        let mut values = Vec::new();
        for (i, line) in trimmed.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let v = serde_json::from_str::<Value>(line).map_err(|e| PipelineError::InvalidInput {
                message: format!("invalid ndjson at line {}: {}", i + 1, e),
            })?;
            values.push(v);
        }
        ingest_json_values(&values)
    }
}

/// Convert already-parsed JSON objects (e.g. an HTTP response body) into rows.
///
/// The column list is every key seen, in first-seen order.
pub fn ingest_json_values(values: &[Value]) -> PipelineResult<RowTable> {
    let mut rows = Vec::with_capacity(values.len());
    let mut columns: Vec<String> = Vec::new();
    for (idx0, v) in values.iter().enumerate() {
        let obj = v.as_object().ok_or_else(|| PipelineError::InvalidInput {
            message: format!("row {} is not a json object", idx0 + 1),
        })?;
        let mut cells = Vec::new();
        flatten_object("", obj, &mut cells);
        let row: Row = cells.into_iter().collect();
        for name in row.columns() {
            if !columns.iter().any(|c| c == name) {
                columns.push(name.to_owned());
            }
        }
        rows.push(row);
    }
    Ok(RowTable::with_columns(columns, rows))
}

fn flatten_object(prefix: &str, obj: &Map<String, Value>, out: &mut Vec<(String, String)>) {
    for (key, value) in obj {
        let name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Null => {}
            Value::Object(inner) => flatten_object(&name, inner, out),
            Value::String(s) => out.push((name, s.clone())),
            // Numbers, bools and arrays keep their JSON text.
            other => out.push((name, other.to_string())),
        }
    }
}
