//! Catalog narrowing for version resolution.
//!
//! Filtering keeps the entries a descriptor is actually talking about:
//! every key the descriptor and the entry both track must agree. Keys the
//! catalog never exposes cannot filter anything and are ignored, as are the
//! version fields themselves (they hold the expression being resolved).

use crate::Capabilities;
use crate::catalog::CatalogEntry;
use std::collections::BTreeSet;

const VERSION_KEYS: &[&str] = &["version", "browserVersion"];

/// Narrow a catalog to the entries matching a descriptor's fields.
///
/// No side effects; an empty subset means "no candidate versions" and is the
/// caller's problem to surface.
pub fn filter_catalog<'a>(
    descriptor: &Capabilities,
    catalog: &'a [CatalogEntry],
) -> Vec<&'a CatalogEntry> {
    catalog
        .iter()
        .filter(|entry| entry_matches(descriptor, entry))
        .collect()
}

fn entry_matches(descriptor: &Capabilities, entry: &CatalogEntry) -> bool {
    descriptor
        .iter()
        .filter(|(key, _)| !VERSION_KEYS.contains(&key.as_str()))
        .all(|(key, wanted)| match entry.field(key) {
            Some(have) => have == *wanted,
            None => true,
        })
}

/// Distinct `version` strings of a filtered subset, first-seen order.
///
/// Distinctness is by version string: entries that differ only in an
/// unfiltered dimension (say, the same browser/version on two platforms)
/// count as one candidate.
pub fn available_versions(entries: &[&CatalogEntry]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut versions = Vec::new();
    for entry in entries {
        if seen.insert(entry.version.as_str()) {
            versions.push(entry.version.clone());
        }
    }
    versions
}
