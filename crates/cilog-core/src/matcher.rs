//! Matcher — matching-block search behind the differ.
//!
//! Finds the longest contiguous run common to both sequences, then recurses
//! on the unmatched stretches to its left and right. The resulting blocks are
//! turned into edit opcodes and grouped into context-bounded hunks.
//!
//! Output is identical to Python's `difflib.SequenceMatcher` with no junk
//! function, including its popularity rule: once the second sequence has
//! [`POPULAR_MIN_LEN`] or more elements, an element that occurs more than
//! `len / 100 + 1` times in it never seeds a match (it can still extend one).
//! Blank lines and closing braces in long CI logs are typical of these.

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Range;

/// Second-sequence length from which popular elements stop seeding matches.
pub const POPULAR_MIN_LEN: usize = 200;

/// A matching run: `a[a..a + size] == b[b..b + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Match {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Equal,
    Replace,
    Delete,
    Insert,
}

/// One edit step: `a[a]` becomes `b[b]` according to `tag`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opcode {
    pub tag: Tag,
    pub a: Range<usize>,
    pub b: Range<usize>,
}

impl Opcode {
    fn new(tag: Tag, a: Range<usize>, b: Range<usize>) -> Self {
        Self { tag, a, b }
    }
}

pub struct SequenceMatcher<'a, T> {
    a: &'a [T],
    b: &'a [T],
    /// Element → ascending positions in `b`, popular elements removed.
    b2j: HashMap<&'a T, Vec<usize>>,
}

impl<'a, T: Eq + Hash> SequenceMatcher<'a, T> {
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        let mut b2j: HashMap<&T, Vec<usize>> = HashMap::new();
        for (j, item) in b.iter().enumerate() {
            b2j.entry(item).or_default().push(j);
        }
        if b.len() >= POPULAR_MIN_LEN {
            let limit = b.len() / 100 + 1;
            let before = b2j.len();
            b2j.retain(|_, positions| positions.len() <= limit);
            tracing::trace!(popular = before - b2j.len(), limit, "dropped popular elements");
        }
        Self { a, b, b2j }
    }

    /// Longest matching run inside `a_range` × `b_range`. Ties go to the run
    /// starting earliest in `a`, then earliest in `b`. A zero-size match
    /// means nothing matches.
    pub fn find_longest_match(&self, a_range: Range<usize>, b_range: Range<usize>) -> Match {
        let (mut best_i, mut best_j, mut best_size) = (a_range.start, b_range.start, 0);
        // Length of the run ending at (i - 1, j), keyed by j.
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in a_range.clone() {
            let mut next: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions
                    .iter()
                    .skip_while(|&&j| j < b_range.start)
                    .take_while(|&&j| j < b_range.end)
                {
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = next;
        }

        // Popular elements never seed a run but may widen one.
        while best_i > a_range.start
            && best_j > b_range.start
            && self.a[best_i - 1] == self.b[best_j - 1]
        {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < a_range.end
            && best_j + best_size < b_range.end
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }
        Match {
            a: best_i,
            b: best_j,
            size: best_size,
        }
    }

    /// Non-adjacent matching runs in ascending order, terminated by the
    /// zero-size sentinel `(a.len(), b.len(), 0)`.
    pub fn matching_blocks(&self) -> Vec<Match> {
        let (len_a, len_b) = (self.a.len(), self.b.len());
        let mut queue = vec![(0..len_a, 0..len_b)];
        let mut blocks = Vec::new();
        while let Some((a_range, b_range)) = queue.pop() {
            let m = self.find_longest_match(a_range.clone(), b_range.clone());
            if m.size == 0 {
                continue;
            }
            if a_range.start < m.a && b_range.start < m.b {
                queue.push((a_range.start..m.a, b_range.start..m.b));
            }
            if m.a + m.size < a_range.end && m.b + m.size < b_range.end {
                queue.push((m.a + m.size..a_range.end, m.b + m.size..b_range.end));
            }
            blocks.push(m);
        }
        blocks.sort();

        let mut merged: Vec<Match> = Vec::with_capacity(blocks.len() + 1);
        for m in blocks {
            match merged.last_mut() {
                Some(prev) if prev.a + prev.size == m.a && prev.b + prev.size == m.b => {
                    prev.size += m.size;
                }
                _ => merged.push(m),
            }
        }
        merged.push(Match {
            a: len_a,
            b: len_b,
            size: 0,
        });
        merged
    }

    /// Edit steps turning `a` into `b`, covering both sequences end to end.
    pub fn opcodes(&self) -> Vec<Opcode> {
        let (mut i, mut j) = (0, 0);
        let mut codes = Vec::new();
        for m in self.matching_blocks() {
            let tag = match (i < m.a, j < m.b) {
                (true, true) => Some(Tag::Replace),
                (true, false) => Some(Tag::Delete),
                (false, true) => Some(Tag::Insert),
                (false, false) => None,
            };
            if let Some(tag) = tag {
                codes.push(Opcode::new(tag, i..m.a, j..m.b));
            }
            i = m.a + m.size;
            j = m.b + m.size;
            if m.size > 0 {
                codes.push(Opcode::new(Tag::Equal, m.a..i, m.b..j));
            }
        }
        codes
    }

    /// Opcodes split into hunks with at most `context` equal elements on
    /// either side of each change. Identical sequences yield no groups.
    pub fn grouped_opcodes(&self, context: usize) -> Vec<Vec<Opcode>> {
        let mut codes = self.opcodes();
        if codes.is_empty() {
            codes.push(Opcode::new(Tag::Equal, 0..1, 0..1));
        }
        if let Some(first) = codes.first_mut().filter(|c| c.tag == Tag::Equal) {
            first.a.start = first.a.start.max(first.a.end.saturating_sub(context));
            first.b.start = first.b.start.max(first.b.end.saturating_sub(context));
        }
        if let Some(last) = codes.last_mut().filter(|c| c.tag == Tag::Equal) {
            last.a.end = last.a.end.min(last.a.start + context);
            last.b.end = last.b.end.min(last.b.start + context);
        }

        let mut groups = Vec::new();
        let mut group = Vec::new();
        for mut code in codes {
            if code.tag == Tag::Equal && code.a.len() > 2 * context {
                group.push(Opcode::new(
                    Tag::Equal,
                    code.a.start..code.a.end.min(code.a.start + context),
                    code.b.start..code.b.end.min(code.b.start + context),
                ));
                groups.push(std::mem::take(&mut group));
                code.a.start = code.a.start.max(code.a.end.saturating_sub(context));
                code.b.start = code.b.start.max(code.b.end.saturating_sub(context));
            }
            group.push(code);
        }
        let only_equal = group.len() == 1 && group[0].tag == Tag::Equal;
        if !group.is_empty() && !only_equal {
            groups.push(group);
        }
        groups
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
