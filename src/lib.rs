//! Environment-matrix resolution for browser test runs.
//!
//! The crate turns declarative environment descriptors into the concrete
//! list of environments a test run should target: array-valued descriptor
//! fields expand as permutation axes over a base capability set, `version`
//! fields may use a small alias/range grammar resolved against a catalog of
//! concretely available browser/platform/version combinations, and `{pwd}`
//! tokens anywhere in the payload are rewritten to the working directory.
//! Resolution is synchronous and pure apart from one injected read of the
//! working directory; failures carry a typed [`ResolveError`] kind callers
//! can branch on.

pub mod catalog;
pub mod error;
pub mod input;
pub mod permutation;
pub mod pwd;
pub mod resolve;
mod schema_loader;
pub mod version;

pub use catalog::{CatalogEntry, available_versions, filter_catalog, load_catalog_from_path};
pub use error::ResolveError;
pub use input::{
    EnvironmentSet, default_schema_path, load_environment_set, parse_environment_set,
    validate_environment_set,
};
pub use permutation::expand_permutations;
pub use pwd::{PWD_TOKEN, expand_pwd, expand_pwd_capabilities};
pub use resolve::resolve_environments;
pub use version::{
    VersionExpr, VersionTerm, is_version_expression, parse_version_expr, resolve_version_spec,
};

/// Ordered capability dictionary.
///
/// Field declaration order is semantically significant: permutation axes
/// take their odometer significance from it. `serde_json`'s map preserves
/// insertion order here via the `preserve_order` feature; swapping in an
/// order-agnostic mapping would silently break expansion order.
pub type Capabilities = serde_json::Map<String, serde_json::Value>;
