// Facade for the gating pipeline; core logic lives in the leaf modules.

use log::Level;
use serde_json::json;
use uuid::Uuid;

use crate::diff::diff_reports;
use crate::explain::{explain, Explanation};
use crate::logging::{AuditCtx, AuditSink, FactsEmitter};
use crate::policy::{evaluate, Evaluation, Policy};
use crate::types::{DiffReport, Report, Verdict};

pub mod errors;

pub use errors::ApiError;

/// Result of a full gating run: the diff, the evaluation, and its explanation.
#[derive(Clone, Debug)]
pub struct GateReport {
    pub diff: DiffReport,
    pub evaluation: Evaluation,
    pub explanation: Explanation,
}

/// Orchestration facade over the diff/evaluate/explain pipeline.
///
/// Holds the policy and the audit sinks; each method emits one summary fact per
/// stage and otherwise delegates to the pure core functions.
pub struct Driftgate<E: FactsEmitter, A: AuditSink> {
    facts: E,
    audit: A,
    policy: Policy,
}

impl<E: FactsEmitter, A: AuditSink> Driftgate<E, A> {
    pub fn new(facts: E, audit: A, policy: Policy) -> Self {
        Self {
            facts,
            audit,
            policy,
        }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Compute the diff between two report snapshots.
    pub fn diff(&self, old: &Report, new: &Report) -> DiffReport {
        let diff = diff_reports(old, new);
        let ctx = self.audit_ctx(&diff);
        ctx.emit_summary(
            "diff",
            "success",
            json!({ "change_count": diff.changes.len() }),
        );
        self.audit.log(
            Level::Info,
            &format!("diff computed: {} change(s)", diff.changes.len()),
        );
        diff
    }

    /// Evaluate the held policy against a diff. The fact decision mirrors the
    /// verdict; schema/pattern failures emit a failure fact with the stable
    /// error id and produce no verdict.
    pub fn evaluate(&self, diff: &DiffReport) -> Result<Evaluation, ApiError> {
        let ctx = self.audit_ctx(diff);
        match evaluate(&self.policy, &diff.changes) {
            Ok(evaluation) => {
                let decision = match evaluation.verdict {
                    Verdict::Pass => "success",
                    Verdict::Warn => "warn",
                    Verdict::Fail => "failure",
                };
                ctx.emit_summary(
                    "policy.evaluate",
                    decision,
                    json!({
                        "verdict": evaluation.verdict.as_str(),
                        "rules_evaluated": evaluation.rules_evaluated,
                        "changes_checked": evaluation.changes_checked,
                    }),
                );
                Ok(evaluation)
            }
            Err(e) => {
                let api_err = ApiError::from(e);
                ctx.emit_summary(
                    "policy.evaluate",
                    "failure",
                    json!({
                        "error_id": api_err.id_str(),
                        "exit_code": api_err.exit_code(),
                        "error": api_err.to_string(),
                    }),
                );
                self.audit
                    .log(Level::Error, &format!("policy rejected: {api_err}"));
                Err(api_err)
            }
        }
    }

    /// Render the deterministic explanation trace for an evaluation.
    pub fn explain(&self, evaluation: &Evaluation) -> Explanation {
        explain(&self.policy, evaluation)
    }

    /// Full pipeline: diff, evaluate, explain.
    pub fn gate(&self, old: &Report, new: &Report) -> Result<GateReport, ApiError> {
        let diff = self.diff(old, new);
        let evaluation = self.evaluate(&diff)?;
        let explanation = self.explain(&evaluation);
        Ok(GateReport {
            diff,
            evaluation,
            explanation,
        })
    }

    fn audit_ctx(&self, diff: &DiffReport) -> AuditCtx<'_> {
        // Content-derived id: same report pair, same id.
        let seed = format!("diff:{}:{}", diff.from_report, diff.to_report);
        let id = Uuid::new_v5(&Uuid::NAMESPACE_URL, seed.as_bytes());
        AuditCtx::new(&self.facts as &dyn FactsEmitter, id.to_string())
    }
}
