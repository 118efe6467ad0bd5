mod common;

use common::{base_report, with_check_status};
use driftgate::diff::diff_reports;
use driftgate::types::{Capability, CheckStatus, ChangeType, Intent, Recommendation, Section};

#[test]
fn diffing_a_report_against_itself_is_empty() {
    let report = base_report();
    let diff = diff_reports(&report, &report);
    assert!(diff.changes.is_empty());
}

#[test]
fn check_status_change_emits_one_item_with_field_set() {
    let old = base_report();
    let new = with_check_status("Python Version", CheckStatus::Fail);
    let diff = diff_reports(&old, &new);
    assert_eq!(diff.changes.len(), 1);
    let item = &diff.changes[0];
    assert_eq!(item.section, Section::Checks);
    assert_eq!(item.key, "Python Version");
    assert_eq!(item.field.as_deref(), Some("status"));
    assert_eq!(item.change_type, ChangeType::Changed);
    assert_eq!(item.before.as_deref(), Some("PASS"));
    assert_eq!(item.after.as_deref(), Some("FAIL"));
}

#[test]
fn status_and_message_changes_emit_separate_items() {
    let old = base_report();
    let mut new = base_report();
    new.checks[0].status = CheckStatus::Warn;
    new.checks[0].message = "Python 3.8 detected".to_string();
    let diff = diff_reports(&old, &new);
    let fields: Vec<_> = diff.changes.iter().filter_map(|c| c.field.as_deref()).collect();
    assert_eq!(fields, vec!["message", "status"]);
}

#[test]
fn check_added_and_removed_carry_status_token() {
    let old = base_report();
    let mut new = base_report();
    new.checks.remove(0);
    let diff = diff_reports(&old, &new);
    assert_eq!(diff.changes.len(), 1);
    assert_eq!(diff.changes[0].change_type, ChangeType::Removed);
    assert_eq!(diff.changes[0].before.as_deref(), Some("PASS"));
    assert!(diff.changes[0].after.is_none());

    let reversed = diff_reports(&new, &old);
    assert_eq!(reversed.changes[0].change_type, ChangeType::Added);
    assert!(reversed.changes[0].before.is_none());
    assert_eq!(reversed.changes[0].after.as_deref(), Some("PASS"));
}

#[test]
fn capability_boolean_flip_emits_changed() {
    let old = base_report();
    let mut new = base_report();
    new.capabilities.get_mut("has_isolated_environment").unwrap().detected = false;
    let diff = diff_reports(&old, &new);
    assert_eq!(diff.changes.len(), 1);
    let item = &diff.changes[0];
    assert_eq!(item.section, Section::Capabilities);
    assert_eq!(item.key, "has_isolated_environment");
    assert_eq!(item.change_type, ChangeType::Changed);
    assert_eq!(item.before.as_deref(), Some("true"));
    assert_eq!(item.after.as_deref(), Some("false"));
}

#[test]
fn capability_evidence_only_difference_emits_nothing() {
    let old = base_report();
    let mut new = base_report();
    new.capabilities
        .get_mut("has_python_files")
        .unwrap()
        .evidence
        .push("extra.py".to_string());
    let diff = diff_reports(&old, &new);
    assert!(diff.changes.is_empty());
}

#[test]
fn capability_absent_in_one_side_is_added_or_removed() {
    let old = base_report();
    let mut new = base_report();
    new.capabilities.insert(
        "has_reproducible_environment".to_string(),
        Capability {
            detected: true,
            evidence: vec![],
        },
    );
    let diff = diff_reports(&old, &new);
    assert_eq!(diff.changes.len(), 1);
    assert_eq!(diff.changes[0].change_type, ChangeType::Added);
    assert_eq!(diff.changes[0].after.as_deref(), Some("true"));

    let reversed = diff_reports(&new, &old);
    assert_eq!(reversed.changes[0].change_type, ChangeType::Removed);
}

#[test]
fn intent_change_emits_single_item() {
    let old = base_report();
    let mut new = base_report();
    new.intent = Intent::Service;
    let diff = diff_reports(&old, &new);
    assert_eq!(diff.changes.len(), 1);
    let item = &diff.changes[0];
    assert_eq!(item.section, Section::Intent);
    assert_eq!(item.key, "project_intent");
    assert_eq!(item.before.as_deref(), Some("application"));
    assert_eq!(item.after.as_deref(), Some("service"));
}

#[test]
fn run_command_add_remove_and_change() {
    let old = base_report();
    let mut new = base_report();
    new.run_command = None;
    let diff = diff_reports(&old, &new);
    assert_eq!(diff.changes.len(), 1);
    assert_eq!(diff.changes[0].section, Section::RunCommand);
    assert_eq!(diff.changes[0].key, "command");
    assert_eq!(diff.changes[0].change_type, ChangeType::Removed);

    let added = diff_reports(&new, &old);
    assert_eq!(added.changes[0].change_type, ChangeType::Added);

    let mut renamed = base_report();
    renamed.run_command.as_mut().unwrap().command = "uvicorn app:app".to_string();
    let changed = diff_reports(&old, &renamed);
    assert_eq!(changed.changes[0].change_type, ChangeType::Changed);
    assert_eq!(changed.changes[0].before.as_deref(), Some("python main.py"));
    assert_eq!(changed.changes[0].after.as_deref(), Some("uvicorn app:app"));
}

#[test]
fn recommendations_diff_by_title_only() {
    let old = base_report();
    let mut new = base_report();
    new.recommendations[0].description = "reworded".to_string();
    assert!(diff_reports(&old, &new).changes.is_empty());

    new.recommendations.push(Recommendation {
        title: "Add a README".to_string(),
        description: String::new(),
        evidence: vec![],
    });
    let diff = diff_reports(&old, &new);
    assert_eq!(diff.changes.len(), 1);
    assert_eq!(diff.changes[0].section, Section::Recommendations);
    assert_eq!(diff.changes[0].key, "Add a README");
    assert_eq!(diff.changes[0].change_type, ChangeType::Added);
}

#[test]
fn every_item_satisfies_the_change_type_partition() {
    let old = base_report();
    let mut new = with_check_status("Dependencies", CheckStatus::Error);
    new.intent = Intent::Library;
    new.run_command = None;
    new.capabilities.remove("has_python_files");
    let diff = diff_reports(&old, &new);
    assert!(!diff.changes.is_empty());
    for item in &diff.changes {
        match item.change_type {
            ChangeType::Added => assert!(item.before.is_none() && item.after.is_some()),
            ChangeType::Removed => assert!(item.before.is_some() && item.after.is_none()),
            ChangeType::Changed => assert!(item.before.is_some() && item.after.is_some()),
        }
    }
}

#[test]
fn output_is_sorted_and_stable_across_runs() {
    let old = base_report();
    let mut new = with_check_status("Python Version", CheckStatus::Fail);
    new.intent = Intent::Script;
    new.capabilities.get_mut("has_isolated_environment").unwrap().detected = false;
    new.checks[1].message = "lock file out of date".to_string();

    let first = diff_reports(&old, &new);
    let second = diff_reports(&old, &new);
    assert_eq!(first, second);

    let keys: Vec<_> = first
        .changes
        .iter()
        .map(|c| {
            (
                c.section.as_str(),
                c.key.clone(),
                c.field.clone().unwrap_or_default(),
            )
        })
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}
