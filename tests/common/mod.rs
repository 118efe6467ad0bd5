use std::collections::BTreeMap;

use driftgate::types::{
    Capability, CheckResult, CheckStatus, Intent, Recommendation, Report, RunCommand,
};

/// Representative snapshot used as the baseline across tests.
pub fn base_report() -> Report {
    let mut capabilities = BTreeMap::new();
    capabilities.insert(
        "has_python_files".to_string(),
        Capability {
            detected: true,
            evidence: vec!["main.py".to_string()],
        },
    );
    capabilities.insert(
        "has_isolated_environment".to_string(),
        Capability {
            detected: true,
            evidence: vec![".venv/".to_string()],
        },
    );
    Report {
        tool_version: "0.1.0".to_string(),
        generated_at: "2026-01-01T00:00:00Z".to_string(),
        project_path: "/work/demo".to_string(),
        intent: Intent::Application,
        capabilities,
        checks: vec![
            CheckResult {
                name: "Python Version".to_string(),
                status: CheckStatus::Pass,
                message: "Python 3.12 detected".to_string(),
                details: None,
            },
            CheckResult {
                name: "Dependencies".to_string(),
                status: CheckStatus::Pass,
                message: "All dependencies installed".to_string(),
                details: None,
            },
        ],
        run_command: Some(RunCommand {
            command: "python main.py".to_string(),
            evidence: vec!["main.py".to_string()],
        }),
        recommendations: vec![Recommendation {
            title: "Pin dependency versions".to_string(),
            description: "Use a lock file".to_string(),
            evidence: vec!["requirements.txt".to_string()],
        }],
    }
}

/// Baseline with one check's status flipped.
pub fn with_check_status(name: &str, status: CheckStatus) -> Report {
    let mut report = base_report();
    for check in &mut report.checks {
        if check.name == name {
            check.status = status;
        }
    }
    report.generated_at = "2026-01-02T00:00:00Z".to_string();
    report
}
