//! Environment-set documents.
//!
//! A document bundles the three inputs of a resolve call: base
//! capabilities, environment descriptor templates, and an optional catalog
//! snapshot. `environments` accepts a single descriptor or a list, matching
//! what callers actually write. Documents are validated against the shipped
//! JSON Schema before deserialization so malformed input fails with a
//! pointable error instead of resolving to something surprising.

use crate::Capabilities;
use crate::catalog::CatalogEntry;
use crate::error::ResolveError;
use crate::resolve::resolve_environments;
use crate::schema_loader::load_json_schema;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// The JSON input consumed by `resolve-matrix`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct EnvironmentSet {
    #[serde(default)]
    pub capabilities: Capabilities,
    #[serde(default, deserialize_with = "one_or_many")]
    pub environments: Vec<Capabilities>,
    #[serde(default)]
    pub available: Option<Vec<CatalogEntry>>,
}

impl EnvironmentSet {
    /// Resolve this document into concrete environments.
    pub fn resolve<F>(&self, current_dir: F) -> Result<Vec<Capabilities>, ResolveError>
    where
        F: FnOnce() -> PathBuf,
    {
        resolve_environments(
            &self.capabilities,
            &self.environments,
            self.available.as_deref(),
            current_dir,
        )
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<Capabilities>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(Capabilities),
        Many(Vec<Capabilities>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(descriptor) => vec![descriptor],
        OneOrMany::Many(descriptors) => descriptors,
    })
}

/// Canonical location of the environment-set schema for this checkout.
pub fn default_schema_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("schema/environment_set.schema.json")
}

/// Validate a raw document against the shipped schema.
pub fn validate_environment_set(document: &Value) -> Result<()> {
    validate_environment_set_with_schema(document, &default_schema_path())
}

pub fn validate_environment_set_with_schema(document: &Value, schema_path: &Path) -> Result<()> {
    let schema = load_json_schema(schema_path)?;
    if let Err(errors) = schema.compiled.validate(document) {
        let details = errors
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        bail!(
            "document failed schema validation ({}):\n{}",
            schema.title().unwrap_or("unnamed schema"),
            details
        );
    }
    Ok(())
}

/// Parse and validate an environment-set document from a JSON string.
pub fn parse_environment_set(data: &str) -> Result<EnvironmentSet> {
    let document: Value =
        serde_json::from_str(data).context("parsing environment set document")?;
    validate_environment_set(&document)?;
    serde_json::from_value(document).context("deserializing environment set document")
}

/// Read, validate, and parse an environment-set document from disk.
pub fn load_environment_set(path: &Path) -> Result<EnvironmentSet> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading environment set {}", path.display()))?;
    parse_environment_set(&data)
        .with_context(|| format!("loading environment set {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_a_full_document() {
        let set = parse_environment_set(
            &json!({
                "capabilities": {"platformName": "windows"},
                "environments": [
                    {"browserName": "chrome", "version": "latest"}
                ],
                "available": [
                    {"browserName": "chrome", "platform": "windows", "version": "72"}
                ]
            })
            .to_string(),
        )
        .expect("parse document");

        assert_eq!(set.environments.len(), 1);
        assert_eq!(
            set.available.as_deref().unwrap()[0].version,
            "72".to_string()
        );

        let resolved = set.resolve(|| PathBuf::from("/work")).expect("resolve");
        assert_eq!(resolved[0]["version"], json!("72"));
    }

    #[test]
    fn a_single_descriptor_object_is_accepted() {
        let set = parse_environment_set(
            &json!({"environments": {"browserName": "chrome"}}).to_string(),
        )
        .expect("parse document");
        assert_eq!(set.environments.len(), 1);
        assert_eq!(set.environments[0]["browserName"], json!("chrome"));
    }

    #[test]
    fn empty_documents_default_every_section() {
        let set = parse_environment_set("{}").expect("parse document");
        assert!(set.capabilities.is_empty());
        assert!(set.environments.is_empty());
        assert!(set.available.is_none());
    }

    #[test]
    fn unknown_top_level_keys_fail_schema_validation() {
        let err = parse_environment_set(
            &json!({"environment": [{"browserName": "chrome"}]}).to_string(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("validation"));
    }

    #[test]
    fn catalog_entries_without_identity_fail_schema_validation() {
        let err = parse_environment_set(
            &json!({"available": [{"platform": "windows"}]}).to_string(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("validation"));
    }
}
