//! Deterministic artifact exporters for diff and explanation results.
//!
//! These render the structured outputs as stable pretty JSON or Markdown for
//! downstream consumers; they never change what the core computed.

use crate::explain::Explanation;
use crate::types::{ChangeType, DiffReport, Section};

/// Serialize a diff report as pretty JSON.
#[must_use]
pub fn diff_to_json(diff: &DiffReport) -> String {
    serde_json::to_string_pretty(diff).unwrap_or_else(|_| "{}".to_string())
}

/// Serialize an explanation as pretty JSON.
#[must_use]
pub fn explanation_to_json(explanation: &Explanation) -> String {
    serde_json::to_string_pretty(explanation).unwrap_or_else(|_| "{}".to_string())
}

const SECTION_ORDER: [Section; 5] = [
    Section::Capabilities,
    Section::Intent,
    Section::Checks,
    Section::Recommendations,
    Section::RunCommand,
];

fn section_title(section: Section) -> &'static str {
    match section {
        Section::Capabilities => "Capability Changes",
        Section::Intent => "Intent Changes",
        Section::Checks => "Environment Check Changes",
        Section::Recommendations => "Recommendation Changes",
        Section::RunCommand => "Run Command Changes",
    }
}

const fn change_symbol(change_type: ChangeType) -> char {
    match change_type {
        ChangeType::Added => '+',
        ChangeType::Removed => '-',
        ChangeType::Changed => '~',
    }
}

/// Render a diff report as Markdown, grouped by section in display order.
#[must_use]
pub fn diff_to_markdown(diff: &DiffReport) -> String {
    let mut lines = vec![
        "# Diff Report".to_string(),
        String::new(),
        format!("**From:** {}", diff.from_report),
        format!("**To:** {}", diff.to_report),
        String::new(),
    ];

    if diff.changes.is_empty() {
        lines.push("**No changes detected** - reports are identical.".to_string());
        lines.push(String::new());
        return lines.join("\n");
    }

    lines.push(format!("**Total Changes:** {}", diff.changes.len()));
    lines.push(String::new());

    for section in SECTION_ORDER {
        let items: Vec<_> = diff.changes.iter().filter(|c| c.section == section).collect();
        if items.is_empty() {
            continue;
        }
        lines.push(format!("## {}", section_title(section)));
        lines.push(String::new());
        for item in items {
            let label = match &item.field {
                Some(f) => format!("{}.{}", item.key, f),
                None => item.key.clone(),
            };
            lines.push(format!("### {} {}", change_symbol(item.change_type), label));
            lines.push(String::new());
            lines.push(format!("**Type:** {}", item.change_type.as_str()));
            lines.push(String::new());
            if let Some(before) = &item.before {
                lines.push(format!("**Before:** {before}"));
                lines.push(String::new());
            }
            if let Some(after) = &item.after {
                lines.push(format!("**After:** {after}"));
                lines.push(String::new());
            }
        }
    }

    lines.join("\n")
}

/// Render an explanation as Markdown with per-rule traces.
#[must_use]
pub fn explanation_to_markdown(explanation: &Explanation) -> String {
    let mut lines = vec![
        "# Policy Explanation".to_string(),
        String::new(),
        format!("**Overall Verdict:** {}", explanation.verdict.as_str()),
        format!("**Total Rules:** {}", explanation.total_rules),
        format!("**Rules Evaluated:** {}", explanation.rules_evaluated),
        format!("**Rules Matched:** {}", explanation.rules_matched),
        String::new(),
        "## Rule Evaluation Traces".to_string(),
        String::new(),
    ];

    for trace in &explanation.rules {
        lines.push(format!("### {}", trace.rule_id));
        lines.push(String::new());
        if !trace.description.is_empty() {
            lines.push(format!("**Description:** {}", trace.description));
            lines.push(String::new());
        }
        let status = if !trace.evaluated {
            "SKIPPED (disabled)".to_string()
        } else if trace.matched {
            format!("MATCHED ({})", trace.action.map_or("", |a| a.as_str()))
        } else {
            "NOT MATCHED".to_string()
        };
        lines.push(format!("**Status:** {status}"));
        lines.push(String::new());
        lines.push("**Reason:**".to_string());
        lines.push(String::new());
        for reason_line in trace.reason.lines() {
            lines.push(format!("  {reason_line}"));
        }
        lines.push(String::new());
        if !trace.triggered_by.is_empty() {
            lines.push("**Matched Changes:**".to_string());
            lines.push(String::new());
            for change in &trace.triggered_by {
                lines.push(format!("- `{change}`"));
            }
            lines.push(String::new());
        }
    }

    lines.join("\n")
}
