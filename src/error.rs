//! Error taxonomy for environment resolution.
//!
//! Grammar and catalog violations each get their own variant so callers can
//! branch on the failure category instead of matching message text. All of
//! them are fatal to the enclosing resolve call; there is no recovery path
//! inside the resolver.

use thiserror::Error;

/// Failures raised while expanding descriptors and resolving versions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    /// A version expression contained more than one `..` separator.
    #[error("invalid version syntax \"{spec}\": only one \"..\" separator is allowed")]
    InvalidVersionSyntax { spec: String },

    /// An alias was malformed: non-numeric offset, more than one `-`
    /// separator, or a range endpoint that is neither a number nor an alias.
    #[error("invalid alias syntax \"{alias}\": expected \"latest\" or \"latest-N\"")]
    InvalidAliasSyntax { alias: String },

    /// A range's resolved low endpoint exceeded its high endpoint.
    #[error("invalid range \"{spec}\": {low}..{high} is not ascending")]
    InvalidRange {
        spec: String,
        low: String,
        high: String,
    },

    /// `latest-N` asked for more history than the catalog advertises.
    #[error("unable to resolve \"{alias}\": only {available} versions are available")]
    OffsetOutOfBounds { alias: String, available: usize },

    /// A concrete range endpoint is missing from the filtered catalog.
    #[error("the version range \"{spec}\" is unavailable")]
    VersionUnavailable { spec: String },
}
