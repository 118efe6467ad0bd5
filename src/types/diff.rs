//! Diff value objects. `DiffItem`s are produced fresh per diff call and never
//! cached across invocations.

use serde::{Deserialize, Serialize};

/// Report section a change belongs to. Serialized lowercase; lexicographic
/// ordering of the serialized names is the section ordering of a diff.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Capabilities,
    Checks,
    Intent,
    Recommendations,
    RunCommand,
}

impl Section {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Section::Capabilities => "capabilities",
            Section::Checks => "checks",
            Section::Intent => "intent",
            Section::Recommendations => "recommendations",
            Section::RunCommand => "run_command",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Added,
    Removed,
    Changed,
}

impl ChangeType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ChangeType::Added => "added",
            ChangeType::Removed => "removed",
            ChangeType::Changed => "changed",
        }
    }
}

/// One atomic detected difference between two reports.
///
/// Invariant: `before` is absent iff `change_type == Added`; `after` is absent
/// iff `change_type == Removed`; both are present iff `Changed`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffItem {
    pub section: Section,
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub change_type: ChangeType,
    pub before: Option<String>,
    pub after: Option<String>,
}

impl DiffItem {
    /// Dotted reference used in explanations and for dotted-path pattern
    /// matching: `section.key` with `.field` appended when present.
    #[must_use]
    pub fn dotted_path(&self) -> String {
        match &self.field {
            Some(f) => format!("{}.{}.{}", self.section.as_str(), self.key, f),
            None => format!("{}.{}", self.section.as_str(), self.key),
        }
    }
}

/// Complete ordered diff between two reports. `from_report` and `to_report`
/// carry the source reports' `generated_at` strings as opaque identifiers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffReport {
    pub from_report: String,
    pub to_report: String,
    pub changes: Vec<DiffItem>,
}
