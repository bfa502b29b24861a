//! Version alias and range grammar.
//!
//! `latest` and `latest-N` name the newest numeric versions a catalog
//! advertises for a matched filter; `LOW..HIGH` expands to every numeric
//! catalog version inside the inclusive bound. Parsing is decoupled from
//! catalog resolution so each error kind in [`ResolveError`] stays
//! independently testable.

use crate::error::ResolveError;
use std::cmp::Ordering;

/// One endpoint of a version expression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VersionTerm {
    /// A concrete numeric version such as `72` or `11.5`.
    Number(f64),
    /// The N-th newest numeric catalog version; offset 0 is the newest.
    Latest { offset: usize },
}

/// A parsed version expression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VersionExpr {
    Term(VersionTerm),
    Range { low: VersionTerm, high: VersionTerm },
}

/// Returns true when `spec` must be interpreted with the alias/range grammar.
///
/// Only a `..` separator or a leading `latest` piece triggers the grammar.
/// Numeric-shaped strings and bare symbolic names (release channels like
/// `beta`) are concrete values, not expressions.
pub fn is_version_expression(spec: &str) -> bool {
    spec.contains("..") || spec.split('-').next().map(str::trim) == Some("latest")
}

/// Parse a version expression into its typed form.
pub fn parse_version_expr(spec: &str) -> Result<VersionExpr, ResolveError> {
    let endpoints: Vec<&str> = spec.split("..").collect();
    match endpoints.as_slice() {
        [term] => Ok(VersionExpr::Term(parse_term(term)?)),
        [low, high] => Ok(VersionExpr::Range {
            low: parse_term(low)?,
            high: parse_term(high)?,
        }),
        _ => Err(ResolveError::InvalidVersionSyntax {
            spec: spec.to_string(),
        }),
    }
}

fn parse_term(raw: &str) -> Result<VersionTerm, ResolveError> {
    let term = raw.trim();
    let mut pieces = term.split('-').map(str::trim);
    let head = pieces.next().unwrap_or_default();
    if head == "latest" {
        let offset = match (pieces.next(), pieces.next()) {
            (None, _) => 0,
            (Some(offset), None) => {
                offset
                    .parse::<usize>()
                    .map_err(|_| ResolveError::InvalidAliasSyntax {
                        alias: term.to_string(),
                    })?
            }
            (Some(_), Some(_)) => {
                return Err(ResolveError::InvalidAliasSyntax {
                    alias: term.to_string(),
                });
            }
        };
        return Ok(VersionTerm::Latest { offset });
    }

    match parse_numeric(term) {
        Some(value) => Ok(VersionTerm::Number(value)),
        None => Err(ResolveError::InvalidAliasSyntax {
            alias: term.to_string(),
        }),
    }
}

/// Numeric-shaped version strings parse as finite floats; anything else
/// (release channels, `inf`, `NaN`) is symbolic.
pub(crate) fn parse_numeric(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Resolve a version expression against the distinct versions available for
/// a matched catalog filter.
///
/// Returns the concrete version strings the expression names: exactly one
/// for a number or alias, one per in-range catalog version (ascending) for
/// a range. `available` may be empty when no catalog was supplied; alias
/// resolution then fails out of bounds.
pub fn resolve_version_spec(
    spec: &str,
    available: &[String],
) -> Result<Vec<String>, ResolveError> {
    let expr = parse_version_expr(spec)?;

    // Symbolic versions never become alias candidates; only the numeric
    // subset is ordered and indexed.
    let mut numeric: Vec<(f64, String)> = available
        .iter()
        .filter_map(|version| parse_numeric(version).map(|value| (value, version.clone())))
        .collect();
    numeric.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    match expr {
        VersionExpr::Term(VersionTerm::Number(_)) => Ok(vec![spec.trim().to_string()]),
        VersionExpr::Term(term @ VersionTerm::Latest { .. }) => {
            let (_, version) = resolve_term(term, &numeric)?;
            Ok(vec![version])
        }
        VersionExpr::Range { low, high } => {
            let (low_value, low_display) = resolve_term(low, &numeric)?;
            let (high_value, high_display) = resolve_term(high, &numeric)?;
            if low_value > high_value {
                return Err(ResolveError::InvalidRange {
                    spec: spec.to_string(),
                    low: low_display,
                    high: high_display,
                });
            }
            let in_catalog = |wanted: f64| numeric.iter().any(|(value, _)| *value == wanted);
            if !in_catalog(low_value) || !in_catalog(high_value) {
                return Err(ResolveError::VersionUnavailable {
                    spec: spec.to_string(),
                });
            }
            Ok(numeric
                .iter()
                .filter(|(value, _)| *value >= low_value && *value <= high_value)
                .map(|(_, version)| version.clone())
                .collect())
        }
    }
}

fn resolve_term(
    term: VersionTerm,
    numeric: &[(f64, String)],
) -> Result<(f64, String), ResolveError> {
    match term {
        VersionTerm::Number(value) => Ok((value, display_number(value))),
        VersionTerm::Latest { offset } => {
            if offset >= numeric.len() {
                return Err(ResolveError::OffsetOutOfBounds {
                    alias: display_alias(offset),
                    available: numeric.len(),
                });
            }
            let (value, version) = &numeric[numeric.len() - 1 - offset];
            Ok((*value, version.clone()))
        }
    }
}

fn display_alias(offset: usize) -> String {
    if offset == 0 {
        "latest".to_string()
    } else {
        format!("latest-{offset}")
    }
}

fn display_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
