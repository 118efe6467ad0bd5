//! Declarative policy: rule types, loading/validation, and the evaluation
//! engine. Validation is atomic — a policy either loads whole or not at all.

pub mod engine;
pub mod load;
pub mod types;

pub use engine::{evaluate, Evaluation, RuleOutcome};
pub use types::{Condition, Policy, PolicyRule, RuleAction};
