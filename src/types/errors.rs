//! Error types used across Driftgate.
use thiserror::Error;

/// Compile failure for a wildcard pattern. Carried into [`Error::Pattern`] with
/// the offending rule id once the pattern's origin is known.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason} (pattern: {pattern})")]
pub struct PatternError {
    pub pattern: String,
    pub reason: String,
}

/// Validation and boundary errors. Matching and aggregation are total over
/// validated inputs, so evaluation itself introduces no further variants.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed Report or Policy structure: wrong version, missing or invalid
    /// rule fields, unsupported file format, or a parse failure at the boundary.
    #[error("schema error: {0}")]
    Schema(String),
    /// Unparseable wildcard pattern in a rule condition.
    #[error("pattern error in rule '{rule_id}': {source}")]
    Pattern {
        rule_id: String,
        #[source]
        source: PatternError,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient alias for results returning a `types::Error`.
pub type Result<T> = std::result::Result<T, Error>;
