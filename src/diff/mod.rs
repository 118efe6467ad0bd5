//! Deterministic report diff engine.
//!
//! Pure comparison only: no interpretation, no scoring, no heuristics. Each
//! section is diffed independently and the combined output is sorted by
//! `(section, key, field)` so it never depends on input list order, insertion
//! order, or hashing. Diffing a report against itself yields an empty sequence.

use std::collections::BTreeSet;

use crate::types::{ChangeType, DiffItem, DiffReport, Report, Section};

/// Compute the ordered, deduplicated diff between two report snapshots.
#[must_use]
pub fn diff_reports(old: &Report, new: &Report) -> DiffReport {
    let mut changes = Vec::new();
    changes.extend(diff_capabilities(old, new));
    changes.extend(diff_checks(old, new));
    changes.extend(diff_intent(old, new));
    changes.extend(diff_run_command(old, new));
    changes.extend(diff_recommendations(old, new));

    changes.sort_by(|a, b| {
        (a.section.as_str(), &a.key, a.field.as_deref().unwrap_or(""))
            .cmp(&(b.section.as_str(), &b.key, b.field.as_deref().unwrap_or("")))
    });
    changes.dedup();

    DiffReport {
        from_report: old.generated_at.clone(),
        to_report: new.generated_at.clone(),
        changes,
    }
}

/// Capability diffs are driven by the boolean alone; evidence differences never
/// emit an item.
fn diff_capabilities(old: &Report, new: &Report) -> Vec<DiffItem> {
    let names: BTreeSet<&String> = old.capabilities.keys().chain(new.capabilities.keys()).collect();
    let mut changes = Vec::new();
    for name in names {
        let before = old.capabilities.get(name);
        let after = new.capabilities.get(name);
        match (before, after) {
            (None, Some(cap)) => changes.push(DiffItem {
                section: Section::Capabilities,
                key: name.clone(),
                field: None,
                change_type: ChangeType::Added,
                before: None,
                after: Some(cap.detected.to_string()),
            }),
            (Some(cap), None) => changes.push(DiffItem {
                section: Section::Capabilities,
                key: name.clone(),
                field: None,
                change_type: ChangeType::Removed,
                before: Some(cap.detected.to_string()),
                after: None,
            }),
            (Some(o), Some(n)) if o.detected != n.detected => changes.push(DiffItem {
                section: Section::Capabilities,
                key: name.clone(),
                field: None,
                change_type: ChangeType::Changed,
                before: Some(o.detected.to_string()),
                after: Some(n.detected.to_string()),
            }),
            _ => {}
        }
    }
    changes
}

/// Checks are matched by name; a check present in both sides emits one changed
/// item per differing field, with `field` set accordingly.
fn diff_checks(old: &Report, new: &Report) -> Vec<DiffItem> {
    let names: BTreeSet<&String> = old
        .checks
        .iter()
        .map(|c| &c.name)
        .chain(new.checks.iter().map(|c| &c.name))
        .collect();
    let mut changes = Vec::new();
    for name in names {
        let before = old.checks.iter().find(|c| &c.name == name);
        let after = new.checks.iter().find(|c| &c.name == name);
        match (before, after) {
            (None, Some(check)) => changes.push(DiffItem {
                section: Section::Checks,
                key: name.clone(),
                field: None,
                change_type: ChangeType::Added,
                before: None,
                after: Some(check.status.as_str().to_string()),
            }),
            (Some(check), None) => changes.push(DiffItem {
                section: Section::Checks,
                key: name.clone(),
                field: None,
                change_type: ChangeType::Removed,
                before: Some(check.status.as_str().to_string()),
                after: None,
            }),
            (Some(o), Some(n)) => {
                if o.status != n.status {
                    changes.push(DiffItem {
                        section: Section::Checks,
                        key: name.clone(),
                        field: Some("status".to_string()),
                        change_type: ChangeType::Changed,
                        before: Some(o.status.as_str().to_string()),
                        after: Some(n.status.as_str().to_string()),
                    });
                }
                if o.message != n.message {
                    changes.push(DiffItem {
                        section: Section::Checks,
                        key: name.clone(),
                        field: Some("message".to_string()),
                        change_type: ChangeType::Changed,
                        before: Some(o.message.clone()),
                        after: Some(n.message.clone()),
                    });
                }
            }
            (None, None) => {}
        }
    }
    changes
}

fn diff_intent(old: &Report, new: &Report) -> Vec<DiffItem> {
    if old.intent == new.intent {
        return Vec::new();
    }
    vec![DiffItem {
        section: Section::Intent,
        key: "project_intent".to_string(),
        field: None,
        change_type: ChangeType::Changed,
        before: Some(old.intent.as_str().to_string()),
        after: Some(new.intent.as_str().to_string()),
    }]
}

fn diff_run_command(old: &Report, new: &Report) -> Vec<DiffItem> {
    let key = "command".to_string();
    match (&old.run_command, &new.run_command) {
        (None, Some(rc)) => vec![DiffItem {
            section: Section::RunCommand,
            key,
            field: None,
            change_type: ChangeType::Added,
            before: None,
            after: Some(rc.command.clone()),
        }],
        (Some(rc), None) => vec![DiffItem {
            section: Section::RunCommand,
            key,
            field: None,
            change_type: ChangeType::Removed,
            before: Some(rc.command.clone()),
            after: None,
        }],
        (Some(o), Some(n)) if o.command != n.command => vec![DiffItem {
            section: Section::RunCommand,
            key,
            field: None,
            change_type: ChangeType::Changed,
            before: Some(o.command.clone()),
            after: Some(n.command.clone()),
        }],
        _ => Vec::new(),
    }
}

/// Recommendations have no changed concept; title presence is the only signal.
fn diff_recommendations(old: &Report, new: &Report) -> Vec<DiffItem> {
    let titles: BTreeSet<&String> = old
        .recommendations
        .iter()
        .map(|r| &r.title)
        .chain(new.recommendations.iter().map(|r| &r.title))
        .collect();
    let mut changes = Vec::new();
    for title in titles {
        let in_old = old.recommendations.iter().any(|r| &r.title == title);
        let in_new = new.recommendations.iter().any(|r| &r.title == title);
        if !in_old {
            changes.push(DiffItem {
                section: Section::Recommendations,
                key: title.clone(),
                field: None,
                change_type: ChangeType::Added,
                before: None,
                after: Some(title.clone()),
            });
        } else if !in_new {
            changes.push(DiffItem {
                section: Section::Recommendations,
                key: title.clone(),
                field: None,
                change_type: ChangeType::Removed,
                before: Some(title.clone()),
                after: None,
            });
        }
    }
    changes
}
