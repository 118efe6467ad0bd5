//! Audit facts emission for pipeline stages.
//!
//! The core functions stay pure; only the `Driftgate` facade emits facts, one
//! summary per stage. Every fact carries a minimal envelope (`schema_version`,
//! `ts`, `diff_id`) with a zeroed timestamp so the record stream is as
//! reproducible as the core output.

use log::Level;
use serde_json::{json, Value};

use crate::constants::{FACTS_SCHEMA_VERSION, TS_ZERO};

/// Receives one structured fact per stage decision.
pub trait FactsEmitter {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value);
}

/// Levelled human-readable audit messages.
pub trait AuditSink {
    fn log(&self, level: Level, msg: &str);
}

/// No-op sink, suitable as a default in dev and tests.
#[derive(Default)]
pub struct JsonlSink;

impl FactsEmitter for JsonlSink {
    fn emit(&self, _subsystem: &str, _event: &str, _decision: &str, _fields: Value) {}
}

impl AuditSink for JsonlSink {
    fn log(&self, _level: Level, _msg: &str) {}
}

/// Shared audit context for one gating invocation.
pub(crate) struct AuditCtx<'a> {
    pub facts: &'a dyn FactsEmitter,
    pub diff_id: String,
}

impl<'a> AuditCtx<'a> {
    pub(crate) fn new(facts: &'a dyn FactsEmitter, diff_id: String) -> Self {
        Self { facts, diff_id }
    }

    /// Emit a stage summary fact with the minimal envelope merged in.
    pub(crate) fn emit_summary(&self, event: &str, decision: &str, extra: Value) {
        let mut fields = json!({
            "schema_version": FACTS_SCHEMA_VERSION,
            "ts": TS_ZERO,
            "diff_id": self.diff_id,
        });
        if let (Some(obj), Some(add)) = (fields.as_object_mut(), extra.as_object()) {
            for (k, v) in add {
                obj.insert(k.clone(), v.clone());
            }
        }
        self.facts.emit("driftgate", event, decision, fields);
    }
}
