//! Policy loading and atomic validation.
//!
//! Policies load from YAML or JSON, dispatched on file extension. Validation
//! rejects the whole document on the first problem; no partial rule set is
//! ever handed to the engine.

use std::collections::BTreeSet;
use std::path::Path;

use crate::constants::POLICY_VERSION;
use crate::pattern::Pattern;
use crate::types::{Error, Result};

use super::types::Policy;

impl Policy {
    /// Parse and validate a policy from its JSON form.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let policy: Policy =
            serde_json::from_str(s).map_err(|e| Error::Schema(format!("invalid policy: {e}")))?;
        policy.validate()?;
        Ok(policy)
    }

    /// Parse and validate a policy from its YAML form.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let policy: Policy =
            serde_yaml::from_str(s).map_err(|e| Error::Schema(format!("invalid policy: {e}")))?;
        policy.validate()?;
        Ok(policy)
    }

    /// Read and parse a policy file, dispatching on extension
    /// (`.yml`/`.yaml`/`.json`).
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yml" | "yaml") => Self::from_yaml_str(&raw),
            Some("json") => Self::from_json_str(&raw),
            other => Err(Error::Schema(format!(
                "unsupported policy file format: {}",
                other.unwrap_or("(none)")
            ))),
        }
    }

    /// Validate this policy: version gate, rule ids, and pattern compilation.
    /// Programmatically built policies must pass through here too; the engine
    /// re-runs it before any evaluation.
    pub fn validate(&self) -> Result<()> {
        if self.version != POLICY_VERSION {
            return Err(Error::Schema(format!(
                "unsupported policy version {} (expected {POLICY_VERSION})",
                self.version
            )));
        }
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for rule in &self.rules {
            if rule.id.is_empty() {
                return Err(Error::Schema("rule with empty id".to_string()));
            }
            if !seen.insert(&rule.id) {
                return Err(Error::Schema(format!("duplicate rule id '{}'", rule.id)));
            }
            if let Some(key) = &rule.when.key {
                Pattern::new(key).map_err(|source| Error::Pattern {
                    rule_id: rule.id.clone(),
                    source,
                })?;
            }
        }
        Ok(())
    }
}
