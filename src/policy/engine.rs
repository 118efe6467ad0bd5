//! Policy evaluation engine.
//!
//! Pure rule matching over the diff sequence. A rule either genuinely skips
//! (disabled), matches with its triggering items recorded in diff order, or
//! evaluates without matching. The overall verdict is the maximum severity
//! among matched rules; rule order affects reporting order only, never the
//! verdict.

use serde::Serialize;

use crate::normalize::normalize_str;
use crate::pattern::Pattern;
use crate::types::{DiffItem, Error, Result, Verdict};

use super::types::{Condition, Policy, RuleAction};

/// Per-rule evaluation outcome. `evaluated == false` means the rule was
/// disabled and skipped, which is distinct from "evaluated, not matched".
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    pub rule_id: String,
    pub evaluated: bool,
    pub matched: bool,
    /// Severity contribution: the rule's action when matched, `None` otherwise.
    pub action: Option<RuleAction>,
    /// All satisfying diff items, in diff order.
    pub triggered_by: Vec<DiffItem>,
}

/// Result of evaluating a policy against a diff sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub verdict: Verdict,
    pub outcomes: Vec<RuleOutcome>,
    pub rules_evaluated: usize,
    pub changes_checked: usize,
}

/// Evaluate `policy` against an ordered diff sequence.
///
/// The policy is validated atomically first; a schema or pattern problem aborts
/// before any rule runs. Over validated inputs, matching and aggregation are
/// total and cannot fail.
pub fn evaluate(policy: &Policy, changes: &[DiffItem]) -> Result<Evaluation> {
    policy.validate()?;

    let mut outcomes = Vec::with_capacity(policy.rules.len());
    let mut rules_evaluated = 0;
    for rule in &policy.rules {
        if !rule.enabled {
            outcomes.push(RuleOutcome {
                rule_id: rule.id.clone(),
                evaluated: false,
                matched: false,
                action: None,
                triggered_by: Vec::new(),
            });
            continue;
        }
        rules_evaluated += 1;

        let key_pattern = match &rule.when.key {
            Some(key) => Some(Pattern::new(key).map_err(|source| Error::Pattern {
                rule_id: rule.id.clone(),
                source,
            })?),
            None => None,
        };

        let triggered_by: Vec<DiffItem> = changes
            .iter()
            .filter(|item| condition_matches(&rule.when, key_pattern.as_ref(), item))
            .cloned()
            .collect();
        let matched = !triggered_by.is_empty();
        outcomes.push(RuleOutcome {
            rule_id: rule.id.clone(),
            evaluated: true,
            matched,
            action: matched.then_some(rule.action),
            triggered_by,
        });
    }

    let verdict = outcomes
        .iter()
        .filter_map(|o| o.action.map(RuleAction::severity))
        .max()
        .unwrap_or(Verdict::Pass);

    Ok(Evaluation {
        verdict,
        outcomes,
        rules_evaluated,
        changes_checked: changes.len(),
    })
}

/// Conjunction of the present condition fields; an absent field is always
/// satisfied.
fn condition_matches(cond: &Condition, key_pattern: Option<&Pattern>, item: &DiffItem) -> bool {
    if let Some(section) = &cond.section {
        if section != item.section.as_str() {
            return false;
        }
    }
    if let Some(pattern) = key_pattern {
        // A pattern may target the bare key or the synthesized dotted path.
        let dotted = format!("{}.{}", item.section.as_str(), item.key);
        if !pattern.matches(&item.key) && !pattern.matches(&dotted) {
            return false;
        }
    }
    if let Some(field) = &cond.field {
        if item.field.as_deref() != Some(field.as_str()) {
            return false;
        }
    }
    if let Some(change_type) = cond.change_type {
        if change_type != item.change_type {
            return false;
        }
    }
    if let Some(from_values) = &cond.from_values {
        match &item.before {
            None => return false,
            Some(before) => {
                let token = normalize_str(before);
                if !from_values.iter().any(|v| normalize_str(v) == token) {
                    return false;
                }
            }
        }
    }
    if let Some(to_values) = &cond.to_values {
        match &item.after {
            None => return false,
            Some(after) => {
                let token = normalize_str(after);
                if !to_values.iter().any(|v| normalize_str(v) == token) {
                    return false;
                }
            }
        }
    }
    true
}
