use serde::{Deserialize, Serialize};

use crate::types::{ChangeType, Verdict};

/// Action a rule contributes when it matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RuleAction {
    Fail,
    Warn,
}

impl RuleAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RuleAction::Fail => "FAIL",
            RuleAction::Warn => "WARN",
        }
    }

    /// Severity this action contributes to the overall verdict.
    #[must_use]
    pub const fn severity(self) -> Verdict {
        match self {
            RuleAction::Fail => Verdict::Fail,
            RuleAction::Warn => Verdict::Warn,
        }
    }
}

/// Conditions a diff item must satisfy for a rule to trigger.
///
/// Every field is optional; an absent field matches any value of that
/// dimension. Present fields combine as a pure conjunction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Condition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Literal key or glob pattern; may also target the dotted `section.key`
    /// path (e.g. `checks.*`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_type: Option<ChangeType>,
    /// Acceptable before-values (OR semantics), compared after normalization.
    #[serde(default, rename = "from", skip_serializing_if = "Option::is_none")]
    pub from_values: Option<Vec<String>>,
    /// Acceptable after-values (OR semantics), compared after normalization.
    #[serde(default, rename = "to", skip_serializing_if = "Option::is_none")]
    pub to_values: Option<Vec<String>>,
}

/// A single declarative rule. `action` and `enabled` are required in the
/// document form; their absence is a schema error, not a default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyRule {
    pub id: String,
    #[serde(default)]
    pub description: String,
    pub when: Condition,
    pub action: RuleAction,
    pub enabled: bool,
}

/// Complete policy definition: a version gate plus an ordered rule list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Policy {
    pub version: i64,
    pub rules: Vec<PolicyRule>,
}
