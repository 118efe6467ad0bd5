//! Report snapshot types. A `Report` is produced once per invocation by external
//! detection collaborators and treated as read-only; the diff engine performs no
//! defensive re-validation beyond the comparisons it makes.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{Error, Result};

/// Outcome of a single environment check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
    Error,
}

impl CheckStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Warn => "WARN",
            CheckStatus::Fail => "FAIL",
            CheckStatus::Error => "ERROR",
        }
    }
}

/// Classified purpose of the inspected project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Script,
    Library,
    Application,
    Service,
}

impl Intent {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Intent::Script => "script",
            Intent::Library => "library",
            Intent::Application => "application",
            Intent::Service => "service",
        }
    }
}

/// A detected capability with its supporting evidence. Only the boolean takes
/// part in diffing; evidence is supplementary detail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    pub detected: bool,
    #[serde(default)]
    pub evidence: Vec<String>,
}

/// A single environment check result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Detected run command with supporting evidence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunCommand {
    pub command: String,
    #[serde(default)]
    pub evidence: Vec<String>,
}

/// A generated improvement recommendation. Diffing compares titles only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub evidence: Vec<String>,
}

/// Immutable snapshot of a project's detected environment state.
///
/// `tool_version`, `generated_at`, and `project_path` are metadata only and are
/// never compared by the diff engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub tool_version: String,
    #[serde(default)]
    pub generated_at: String,
    #[serde(default)]
    pub project_path: String,
    pub intent: Intent,
    #[serde(default)]
    pub capabilities: BTreeMap<String, Capability>,
    #[serde(default)]
    pub checks: Vec<CheckResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_command: Option<RunCommand>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl Report {
    /// Parse a report from its serialized JSON form.
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| Error::Schema(format!("invalid report: {e}")))
    }

    /// Read and parse a report file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}
