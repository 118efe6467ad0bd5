use thiserror::Error;

/// Facade-level error. No verdict exists when one of these is returned; gating
/// callers must treat it as the highest-severity failure.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("schema error: {0}")]
    Schema(String),
    #[error("pattern error: {0}")]
    Pattern(String),
    #[error("io error: {0}")]
    Io(String),
}

impl ApiError {
    /// Stable identifier emitted in facts.
    #[must_use]
    pub const fn id_str(&self) -> &'static str {
        match self {
            ApiError::Schema(_) => "E_SCHEMA",
            ApiError::Pattern(_) => "E_PATTERN",
            ApiError::Io(_) => "E_IO",
        }
    }

    /// Every error gates as hard as a FAIL verdict.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        crate::types::Verdict::Fail.exit_code()
    }
}

impl From<crate::types::Error> for ApiError {
    fn from(e: crate::types::Error) -> Self {
        use crate::types::Error::{Io, Pattern, Schema};
        match e {
            Schema(msg) => ApiError::Schema(msg),
            p @ Pattern { .. } => ApiError::Pattern(p.to_string()),
            Io(err) => ApiError::Io(err.to_string()),
        }
    }
}
