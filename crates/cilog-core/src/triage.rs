//! Triage — maps free-form log text to likely-cause categories.
//!
//! A category matches when any of its signals occurs anywhere in the text,
//! comparing the lowercased text against each lowercased signal. Categories
//! are reported in the declaration order of [`SIGNATURES`], each at most
//! once; when nothing matches the result is the `unknown` sentinel alone.

use crate::types::{Category, Finding, Triage};
use serde::Serialize;

/// Fixed, ordered signature table: category → signal substrings.
pub const SIGNATURES: &[(Category, &[&str])] = &[
    (Category::Timeout, &["timeout", "timed out", "ETIMEDOUT"]),
    (Category::Auth, &["401", "403", "unauthorized"]),
    (Category::Dependency, &["ModuleNotFoundError", "ImportError"]),
    (Category::Network, &["ConnectionError", "DNS", "ENOTFOUND"]),
];

/// Classify a block of log text.
///
/// ```
/// use cilog_core::{classify, Category};
///
/// let t = classify("request timed out, got 403");
/// assert_eq!(t.categories(), &[Category::Timeout, Category::Auth]);
/// ```
pub fn classify(text: &str) -> Triage {
    let matched = explain(text).into_iter().map(|f| f.category).collect();
    Triage::from_matches(matched)
}

/// Per-category evidence for `text`: every matched category with the
/// signals that hit. Empty when nothing matched (no `unknown` entry).
pub fn explain(text: &str) -> Vec<Finding> {
    let haystack = text.to_lowercase();
    let findings: Vec<Finding> = SIGNATURES
        .iter()
        .filter_map(|(category, signals)| {
            let hits: Vec<&'static str> = signals
                .iter()
                .copied()
                .filter(|sig| haystack.contains(&sig.to_lowercase()))
                .collect();
            (!hits.is_empty()).then(|| Finding {
                category: *category,
                signals: hits,
            })
        })
        .collect();
    tracing::debug!(
        bytes = text.len(),
        matched = findings.len(),
        "triaged log text"
    );
    findings
}

/// Machine-readable triage output: the reported causes plus the evidence
/// behind each one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriageReport {
    pub causes: Triage,
    pub findings: Vec<Finding>,
}

impl TriageReport {
    pub fn new(text: &str) -> Self {
        let findings = explain(text);
        let causes = Triage::from_matches(findings.iter().map(|f| f.category).collect());
        Self { causes, findings }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
