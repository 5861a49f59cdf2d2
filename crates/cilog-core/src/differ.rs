//! Differ — unified line diff between two log captures.
//!
//! Matching runs and hunk grouping come from [`crate::matcher`], so the
//! alignment is the one `difflib.unified_diff` picks: the longest common run
//! first, even when lines repeat. Each group is rendered in the conventional
//! unified format:
//!
//! ```text
//! --- <from>
//! +++ <to>
//! @@ -1,3 +1,3 @@
//!  a
//! -b
//! +x
//!  c
//! ```
//!
//! Rendered lines never carry a trailing newline; callers add one when
//! printing.

use crate::matcher::{Opcode, SequenceMatcher, Tag};
use std::ops::Range;

/// Lines of context around each change unless the caller asks otherwise.
pub const DEFAULT_CONTEXT: usize = 3;

/// Header labels and context radius for [`unified_diff`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOptions {
    /// Text after `--- `; empty by default.
    pub from_label: String,
    /// Text after `+++ `; empty by default.
    pub to_label: String,
    pub context: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            from_label: String::new(),
            to_label: String::new(),
            context: DEFAULT_CONTEXT,
        }
    }
}

impl DiffOptions {
    pub fn labels(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from_label = from.into();
        self.to_label = to.into();
        self
    }

    pub fn context(mut self, context: usize) -> Self {
        self.context = context;
        self
    }
}

/// Summary counts for one rendered diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub hunks: usize,
    pub added: usize,
    pub removed: usize,
}

impl DiffStats {
    pub fn is_empty(&self) -> bool {
        self.hunks == 0
    }
}

impl std::fmt::Display for DiffStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let plural = if self.hunks == 1 { "" } else { "s" };
        write!(
            f,
            "{} hunk{plural}, +{} -{}",
            self.hunks, self.added, self.removed
        )
    }
}

/// A rendered unified diff and its counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnifiedDiff {
    pub lines: Vec<String>,
    pub stats: DiffStats,
}

impl UnifiedDiff {
    pub fn new<T: AsRef<str>>(a: &[T], b: &[T], opts: &DiffOptions) -> Self {
        let a: Vec<&str> = a.iter().map(AsRef::as_ref).collect();
        let b: Vec<&str> = b.iter().map(AsRef::as_ref).collect();

        let groups = SequenceMatcher::new(&a, &b).grouped_opcodes(opts.context);

        let mut diff = UnifiedDiff::default();
        if groups.is_empty() {
            tracing::debug!(old = a.len(), new = b.len(), "captures are identical");
            return diff;
        }

        diff.lines.push(format!("--- {}", opts.from_label));
        diff.lines.push(format!("+++ {}", opts.to_label));
        for group in &groups {
            diff.push_hunk(group, &a, &b);
        }
        tracing::debug!(
            old = a.len(),
            new = b.len(),
            hunks = diff.stats.hunks,
            added = diff.stats.added,
            removed = diff.stats.removed,
            "rendered unified diff"
        );
        diff
    }

    fn push_hunk(&mut self, group: &[Opcode], a: &[&str], b: &[&str]) {
        let (Some(first), Some(last)) = (group.first(), group.last()) else {
            return;
        };
        let old = first.a.start..last.a.end;
        let new = first.b.start..last.b.end;
        self.lines.push(format!(
            "@@ -{} +{} @@",
            format_range(&old),
            format_range(&new)
        ));
        self.stats.hunks += 1;

        for op in group {
            let (old, new) = (op.a.clone(), op.b.clone());
            if op.tag == Tag::Equal {
                self.lines.extend(a[old].iter().map(|l| format!(" {l}")));
                continue;
            }
            if matches!(op.tag, Tag::Delete | Tag::Replace) {
                self.stats.removed += old.len();
                self.lines.extend(a[old].iter().map(|l| format!("-{l}")));
            }
            if matches!(op.tag, Tag::Insert | Tag::Replace) {
                self.stats.added += new.len();
                self.lines.extend(b[new].iter().map(|l| format!("+{l}")));
            }
        }
    }
}

/// Render the unified diff of `a` → `b` as newline-free lines. Identical
/// inputs yield an empty vector (no headers).
pub fn unified_diff<T: AsRef<str>>(a: &[T], b: &[T], opts: &DiffOptions) -> Vec<String> {
    UnifiedDiff::new(a, b, opts).lines
}

/// `start` for a one-line range, `start,len` otherwise. An empty range
/// names the line before it, so an empty side reads `0,0`.
fn format_range(range: &Range<usize>) -> String {
    match range.len() {
        1 => (range.start + 1).to_string(),
        0 => format!("{},0", range.start),
        len => format!("{},{}", range.start + 1, len),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
