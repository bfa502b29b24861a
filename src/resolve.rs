//! Environment resolution pipeline.
//!
//! `resolve_environments` is the crate entry point: each descriptor expands
//! its permutation axes over the base capabilities, every permutation has
//! its version expression resolved against the catalog (one permutation may
//! fan into several concrete environments), and `{pwd}` tokens are rewritten
//! before the per-descriptor blocks are concatenated in declaration order.
//! Blocks never interleave or cross-multiply with each other.

use crate::Capabilities;
use crate::catalog::{CatalogEntry, available_versions, filter_catalog};
use crate::error::ResolveError;
use crate::permutation::expand_permutations;
use crate::pwd::expand_pwd_capabilities;
use crate::version::{is_version_expression, resolve_version_spec};
use serde_json::Value;
use std::path::PathBuf;

const VERSION_KEY: &str = "version";
const BROWSER_VERSION_KEY: &str = "browserVersion";

/// Resolve environment descriptors into the concrete environments a test
/// run should target.
///
/// `current_dir` is invoked exactly once; the resolver performs no other
/// I/O. Any grammar or range violation aborts the whole call, so a failure
/// never yields partial results.
pub fn resolve_environments<F>(
    capabilities: &Capabilities,
    environments: &[Capabilities],
    available: Option<&[CatalogEntry]>,
    current_dir: F,
) -> Result<Vec<Capabilities>, ResolveError>
where
    F: FnOnce() -> PathBuf,
{
    let cwd = current_dir();

    // An empty descriptor list still targets one environment: the base.
    let base_only = [Capabilities::new()];
    let environments = if environments.is_empty() {
        &base_only[..]
    } else {
        environments
    };

    let mut resolved = Vec::new();
    for descriptor in environments {
        for permutation in expand_permutations(capabilities, descriptor) {
            for environment in resolve_permutation_versions(permutation, available)? {
                resolved.push(expand_pwd_capabilities(&environment, &cwd));
            }
        }
    }
    Ok(resolved)
}

/// Resolve one permutation's version expression into 1..k concrete
/// permutations.
///
/// `browserVersion` is accepted as the expression when `version` is absent.
/// Once resolved, both fields carry the identical concrete value; a
/// permutation without either field passes through untouched, with no
/// `browserVersion` synthesized.
fn resolve_permutation_versions(
    permutation: Capabilities,
    available: Option<&[CatalogEntry]>,
) -> Result<Vec<Capabilities>, ResolveError> {
    let requested = permutation
        .get(VERSION_KEY)
        .or_else(|| permutation.get(BROWSER_VERSION_KEY))
        .filter(|value| !value.is_null())
        .cloned();
    let Some(requested) = requested else {
        return Ok(vec![permutation]);
    };

    let expression = match &requested {
        Value::String(text) if is_version_expression(text) => text.clone(),
        _ => {
            // Already concrete (number, numeric string, or release channel
            // name): mirror it across both version fields.
            let mut environment = permutation;
            environment.insert(VERSION_KEY.to_string(), requested.clone());
            environment.insert(BROWSER_VERSION_KEY.to_string(), requested);
            return Ok(vec![environment]);
        }
    };

    let entries = match available {
        Some(catalog) => filter_catalog(&permutation, catalog),
        None => Vec::new(),
    };
    let versions = resolve_version_spec(&expression, &available_versions(&entries))?;

    Ok(versions
        .into_iter()
        .map(|version| {
            let mut environment = permutation.clone();
            environment.insert(VERSION_KEY.to_string(), Value::String(version.clone()));
            environment.insert(BROWSER_VERSION_KEY.to_string(), Value::String(version));
            environment
        })
        .collect())
}
