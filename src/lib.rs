#![forbid(unsafe_code)]
//! Driftgate: deterministic report diffing and declarative policy gating.
//!
//! Determinism contract:
//! - `diff`, `evaluate`, and `explain` are pure functions of their inputs; identical
//!   inputs produce byte-identical outputs across machines and over time.
//! - Report timestamps are opaque metadata and are never compared.
//! - Audit facts use a zeroed timestamp and content-derived (v5) identifiers so the
//!   emitted record stream is as reproducible as the core output.

pub mod api;
pub mod constants;
pub mod diff;
pub mod explain;
pub mod export;
pub mod logging;
pub mod normalize;
pub mod pattern;
pub mod policy;
pub mod types;

pub use api::*;
