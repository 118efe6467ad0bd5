pub mod diff;
pub mod errors;
pub mod report;
pub mod verdict;

pub use diff::{ChangeType, DiffItem, DiffReport, Section};
pub use errors::{Error, Result};
pub use report::{Capability, CheckResult, CheckStatus, Intent, Recommendation, Report, RunCommand};
pub use verdict::Verdict;
