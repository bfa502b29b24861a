//! Working-directory token substitution.
//!
//! Descriptor payloads may embed `{pwd}` wherever a string appears (driver
//! binaries, launch arguments, nested option blocks). Substitution walks
//! scalars, arrays, and nested objects; every token occurrence is replaced
//! with the working-directory path and the remaining `/` separators in that
//! string are rewritten so embedded path segments come out platform-correct.
//! Strings without the token are left untouched.

use crate::Capabilities;
use serde_json::Value;
use std::path::Path;

/// Placeholder token standing for the working directory.
pub const PWD_TOKEN: &str = "{pwd}";

/// Recursively substitute `{pwd}` throughout a capability value.
pub fn expand_pwd(value: &Value, cwd: &Path) -> Value {
    match value {
        Value::String(text) => Value::String(expand_pwd_str(text, cwd)),
        Value::Array(items) => Value::Array(items.iter().map(|item| expand_pwd(item, cwd)).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, item)| (key.clone(), expand_pwd(item, cwd)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Substitute `{pwd}` across every field of a capability map.
pub fn expand_pwd_capabilities(capabilities: &Capabilities, cwd: &Path) -> Capabilities {
    capabilities
        .iter()
        .map(|(key, value)| (key.clone(), expand_pwd(value, cwd)))
        .collect()
}

fn expand_pwd_str(text: &str, cwd: &Path) -> String {
    if !text.contains(PWD_TOKEN) {
        return text.to_string();
    }
    let replaced = text.replace(PWD_TOKEN, &cwd.to_string_lossy());
    normalize_separators(&replaced, std::path::MAIN_SEPARATOR)
}

// Only strings that carried the token are normalized; other strings keep
// whatever separators the caller wrote.
fn normalize_separators(text: &str, separator: char) -> String {
    if separator == '/' {
        text.to_string()
    } else {
        text.replace('/', &separator.to_string())
    }
}
