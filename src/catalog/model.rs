//! Deserializable representation of a catalog snapshot.
//!
//! Entries mirror what browser-provisioning services report: the identifying
//! browser/platform/version triple plus whatever extra metadata the service
//! attaches. Extra keys ride along untyped and still participate in
//! descriptor filtering.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// One concretely available browser/platform/version combination.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "browserName")]
    pub browser_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Version string, numeric-shaped (`"72"`) or symbolic (`"beta"`).
    pub version: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CatalogEntry {
    pub fn new(
        browser_name: impl Into<String>,
        platform: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            browser_name: browser_name.into(),
            platform: Some(platform.into()),
            version: version.into(),
            extra: Map::new(),
        }
    }

    /// Field lookup by descriptor key.
    ///
    /// Returns `None` when this entry does not track the key at all, which
    /// excludes the key from filtering entirely.
    pub fn field(&self, key: &str) -> Option<Value> {
        match key {
            "browserName" => Some(Value::String(self.browser_name.clone())),
            "platform" => self.platform.clone().map(Value::String),
            "version" => Some(Value::String(self.version.clone())),
            other => self.extra.get(other).cloned(),
        }
    }
}

/// Read and parse a catalog snapshot (a JSON array of entries) from disk.
pub fn load_catalog_from_path(path: &Path) -> Result<Vec<CatalogEntry>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    let catalog: Vec<CatalogEntry> = serde_json::from_str(&data)
        .with_context(|| format!("parsing catalog {}", path.display()))?;
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn extra_metadata_survives_a_round_trip() {
        let entry: CatalogEntry = serde_json::from_value(json!({
            "browserName": "chrome",
            "platform": "windows",
            "version": "72",
            "descriptor": {},
            "intern": {"browserName": "chrome"}
        }))
        .unwrap();
        assert_eq!(entry.browser_name, "chrome");
        assert_eq!(entry.platform.as_deref(), Some("windows"));
        assert_eq!(entry.version, "72");
        assert!(entry.extra.contains_key("descriptor"));

        let back = serde_json::to_value(&entry).unwrap();
        assert_eq!(back["intern"]["browserName"], json!("chrome"));
    }

    #[test]
    fn field_lookup_covers_typed_and_extra_keys() {
        let entry: CatalogEntry = serde_json::from_value(json!({
            "browserName": "chrome",
            "version": "72",
            "deviceName": "pixel"
        }))
        .unwrap();
        assert_eq!(entry.field("browserName"), Some(json!("chrome")));
        assert_eq!(entry.field("deviceName"), Some(json!("pixel")));
        // No platform reported: the key is absent, not empty.
        assert_eq!(entry.field("platform"), None);
        assert_eq!(entry.field("platformVersion"), None);
    }

    #[test]
    fn loads_a_snapshot_from_disk() {
        let mut file = NamedTempFile::new().expect("temp catalog");
        write!(
            file,
            r#"[{{"browserName": "ie", "platform": "windows", "version": "11"}}]"#
        )
        .unwrap();
        let catalog = load_catalog_from_path(file.path()).expect("load catalog");
        assert_eq!(catalog, vec![CatalogEntry::new("ie", "windows", "11")]);
    }

    #[test]
    fn rejects_entries_without_identity() {
        let mut file = NamedTempFile::new().expect("temp catalog");
        write!(file, r#"[{{"platform": "windows"}}]"#).unwrap();
        assert!(load_catalog_from_path(file.path()).is_err());
    }
}
