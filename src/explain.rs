//! Deterministic explanation generator.
//!
//! Traces why the verdict was reached without re-evaluating anything. Every
//! placeholder is filled from the Value Normalizer's canonical tokens, so the
//! same `(policy, evaluation)` pair always renders character-identical text.
//! No I/O, no state between calls.

use serde::Serialize;

use crate::normalize::normalize_str;
use crate::policy::{Evaluation, Policy, RuleAction, RuleOutcome};
use crate::types::{DiffItem, Verdict};

/// Trace for a single rule: outcome flags plus the rendered reason text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RuleTrace {
    pub rule_id: String,
    pub description: String,
    pub evaluated: bool,
    pub matched: bool,
    pub action: Option<RuleAction>,
    /// Dotted `section.key[.field]` references of the triggering items.
    pub triggered_by: Vec<String>,
    pub reason: String,
}

/// Full explanation of a policy evaluation, in policy file order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub verdict: Verdict,
    pub total_rules: usize,
    pub rules_evaluated: usize,
    pub rules_matched: usize,
    pub rules: Vec<RuleTrace>,
}

/// Render the explanation for an evaluation. Pure function of its inputs;
/// `evaluation` must come from the same `policy` (outcomes are zipped with the
/// rules in file order).
#[must_use]
pub fn explain(policy: &Policy, evaluation: &Evaluation) -> Explanation {
    let mut rules = Vec::with_capacity(evaluation.outcomes.len());
    let mut rules_matched = 0;
    for (rule, outcome) in policy.rules.iter().zip(&evaluation.outcomes) {
        if outcome.matched {
            rules_matched += 1;
        }
        rules.push(RuleTrace {
            rule_id: outcome.rule_id.clone(),
            description: rule.description.clone(),
            evaluated: outcome.evaluated,
            matched: outcome.matched,
            action: outcome.action,
            triggered_by: outcome.triggered_by.iter().map(DiffItem::dotted_path).collect(),
            reason: render_reason(rule.when.section.as_deref(), outcome),
        });
    }
    Explanation {
        verdict: evaluation.verdict,
        total_rules: policy.rules.len(),
        rules_evaluated: evaluation.rules_evaluated,
        rules_matched,
        rules,
    }
}

/// Exactly one of three templates, chosen by outcome.
fn render_reason(condition_section: Option<&str>, outcome: &RuleOutcome) -> String {
    if !outcome.evaluated {
        return format!("Rule '{}' was skipped because it is disabled.", outcome.rule_id);
    }
    if !outcome.matched {
        let section = condition_section.unwrap_or("any");
        return format!(
            "This rule was evaluated but did not match because no changes \
             satisfying its conditions were found in the '{section}' section."
        );
    }
    let lines: Vec<String> = outcome.triggered_by.iter().map(render_match_line).collect();
    lines.join("\n")
}

fn render_match_line(item: &DiffItem) -> String {
    let descriptor = item.field.as_deref().unwrap_or(&item.key);
    let before = item.before.as_deref().map_or_else(|| "none".to_string(), normalize_str);
    let after = item.after.as_deref().map_or_else(|| "none".to_string(), normalize_str);
    format!(
        "This rule matched because changes were detected in the '{}' section \
         where the '{}' changed from [{}] to [{}]. Triggered by: {}",
        item.section.as_str(),
        descriptor,
        before,
        after,
        item.dotted_path()
    )
}
