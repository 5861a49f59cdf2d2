//! Core types for cilog-core.
//!
//! This module defines the values shared by the triage classifier and its
//! command-line entry point: the [`Category`] discriminant, the per-category
//! [`Finding`] evidence, and the ordered [`Triage`] result.

use serde::Serialize;

/// A likely-cause category reported by the triage classifier.
///
/// Variant order is the declaration order of the signature table; derived
/// `Ord` therefore sorts categories the way the classifier reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Timeout,
    Auth,
    Dependency,
    Network,
    /// Sentinel for "no signal matched". Never part of the signature table
    /// and never combined with a real category.
    Unknown,
}

impl Category {
    /// Lowercase category name as printed by the triage tool.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Timeout => "timeout",
            Category::Auth => "auth",
            Category::Dependency => "dependency",
            Category::Network => "network",
            Category::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evidence for one matched category: the signals (in table order) whose
/// lowercased form occurred in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub category: Category,
    pub signals: Vec<&'static str>,
}

/// Ordered, duplicate-free list of categories produced by
/// [`classify`](crate::triage::classify).
///
/// Always holds at least one element: either real categories in declaration
/// order, or the single [`Category::Unknown`] sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Triage(Vec<Category>);

impl Triage {
    /// Build a result from matched categories, substituting the `unknown`
    /// sentinel when nothing matched.
    pub(crate) fn from_matches(matched: Vec<Category>) -> Self {
        if matched.is_empty() {
            Triage(vec![Category::Unknown])
        } else {
            Triage(matched)
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.0
    }

    /// Category names in report order.
    pub fn names(&self) -> Vec<&'static str> {
        self.0.iter().map(Category::as_str).collect()
    }

    /// `true` when no signal matched.
    pub fn is_unknown(&self) -> bool {
        self.0 == [Category::Unknown]
    }

    pub fn contains(&self, category: Category) -> bool {
        self.0.contains(&category)
    }
}

/// Renders as a quoted list, e.g. `['timeout', 'auth']`.
impl std::fmt::Display for Triage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, category) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{category}'")?;
        }
        f.write_str("]")
    }
}
