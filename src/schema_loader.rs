//! Compiled JSON Schema support for the environment-set contract.
//!
//! Keeps schema handling in one place: callers load a schema from disk and
//! get back a compiled validator plus the document it was compiled from.

use anyhow::{Context, Result};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

/// A compiled schema plus the raw document backing it.
pub(crate) struct LoadedSchema {
    pub compiled: JSONSchema,
    // The validator borrows the schema document internally; the Arc keeps
    // that borrow valid for the struct's lifetime.
    raw: Arc<Value>,
}

impl LoadedSchema {
    /// The schema's `title`, for error reporting.
    pub fn title(&self) -> Option<&str> {
        self.raw.get("title").and_then(Value::as_str)
    }
}

pub(crate) fn load_json_schema(path: &Path) -> Result<LoadedSchema> {
    let schema_value: Value = serde_json::from_reader(
        File::open(path).with_context(|| format!("opening schema {}", path.display()))?,
    )
    .with_context(|| format!("parsing schema {}", path.display()))?;

    let raw = Arc::new(schema_value);
    let raw_static: &'static Value = unsafe { &*(Arc::as_ptr(&raw)) };
    let compiled = JSONSchema::compile(raw_static)
        .with_context(|| format!("compiling schema {}", path.display()))?;

    Ok(LoadedSchema { compiled, raw })
}
