use envmatrix::{Capabilities, CatalogEntry};
use serde_json::Value;
use std::path::PathBuf;

pub fn caps(value: Value) -> Capabilities {
    value.as_object().expect("fixture must be an object").clone()
}

// Mirrors what a provisioning service reports for chrome: numeric history on
// two platforms plus release channels, duplicates included.
pub fn chrome_catalog() -> Vec<CatalogEntry> {
    let mut catalog: Vec<CatalogEntry> = ["72", "71", "70", "69", "alpha", "beta", "dev", "alpha"]
        .iter()
        .map(|version| CatalogEntry::new("chrome", "windows", *version))
        .collect();
    catalog.extend(
        ["72", "71", "70", "69"]
            .iter()
            .map(|version| CatalogEntry::new("chrome", "mac", *version)),
    );
    catalog
}

pub fn ie_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("ie", "windows", "11"),
        CatalogEntry::new("ie", "windows", "10"),
    ]
}

pub fn full_catalog() -> Vec<CatalogEntry> {
    let mut catalog = chrome_catalog();
    catalog.extend(ie_catalog());
    catalog
}

pub fn fixed_cwd() -> impl FnOnce() -> PathBuf {
    || PathBuf::from("/foo")
}
