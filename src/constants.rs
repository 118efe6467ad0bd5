/// Facts envelope schema version emitted on every audit record.
pub const FACTS_SCHEMA_VERSION: i64 = 1;

/// The only policy document version this crate evaluates.
pub const POLICY_VERSION: i64 = 1;

/// Zeroed timestamp used in audit facts so emitted records stay reproducible.
pub const TS_ZERO: &str = "1970-01-01T00:00:00Z";
