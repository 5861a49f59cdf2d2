//! cilog-core — CI log inspection core library.
//!
//! This crate exposes the three independent tools as public modules, plus the
//! shared types used by their command-line entry points.
//!
//! # Tools
//!
//! ```text
//! stdin lines ──► normalizer ──► stdout lines (1:1)
//! passing.log ─┐
//!              ├► differ ──► unified diff
//! failing.log ─┘
//! stdin blob ──► triage ──► "Likely causes: [...]"
//! ```
//!
//! None of the modules depend on each other; every operation is a pure,
//! single-pass transformation of its input.

pub mod differ;
pub mod matcher;
pub mod normalizer;
pub mod triage;
pub mod types;

pub use differ::{unified_diff, DiffOptions, DiffStats, UnifiedDiff};
pub use normalizer::{normalize, Normalizer, PLACEHOLDER};
pub use triage::{classify, explain, TriageReport};
pub use types::{Category, Finding, Triage};
