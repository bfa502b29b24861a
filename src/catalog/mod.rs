//! Catalog of concretely available environments.
//!
//! The catalog is the externally supplied list of browser/platform/version
//! combinations a provisioning service can actually start. Version aliases
//! and ranges resolve against it after `filter` narrows the entries to the
//! ones a descriptor is talking about.

pub mod filter;
pub mod model;

pub use filter::{available_versions, filter_catalog};
pub use model::{CatalogEntry, load_catalog_from_path};
