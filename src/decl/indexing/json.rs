//! Index dumps produced by external tools

use super::record::IndexedRecord;
use super::{IndexError, SourceIndexer};
use serde_json::Value;
use tracing::debug;

/// Records read from a JSON dump
///
/// The dump is either a file-level object whose `key.substructure` lists the top-level
/// declarations (what SourceKit prints for a whole file), or a bare array of records.
#[derive(Debug, Clone)]
pub struct JsonIndex {
    dump: String,
}

impl JsonIndex {
    pub fn new(dump: impl Into<String>) -> Self {
        Self { dump: dump.into() }
    }

    /// Top-level records of the dump
    pub fn records(&self) -> Result<Vec<IndexedRecord>, IndexError> {
        let value: Value =
            serde_json::from_str(&self.dump).map_err(|e| IndexError::Malformed(e.to_string()))?;

        let records = match value {
            Value::Array(_) => serde_json::from_value::<Vec<IndexedRecord>>(value)
                .map_err(|e| IndexError::Malformed(e.to_string()))?,
            Value::Object(_) => {
                serde_json::from_value::<IndexedRecord>(value)
                    .map_err(|e| IndexError::Malformed(e.to_string()))?
                    .substructure
            }
            other => return Err(IndexError::UnexpectedShape(shape_name(&other).to_string())),
        };

        debug!(records = records.len(), "loaded index dump");
        Ok(records)
    }
}

impl SourceIndexer for JsonIndex {
    fn name(&self) -> &str {
        "json"
    }

    /// The dump already describes the source, so the source text itself is not read
    fn index(&self, _source: &str) -> Result<Vec<IndexedRecord>, IndexError> {
        self.records()
    }
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
