//! Normalizer — masks volatile substrings in log lines so captures from
//! different runs can be compared.
//!
//! Each noise pattern is applied in list order against the output of the
//! previous one, every match replaced by [`PLACEHOLDER`]. The result is then
//! trimmed. The placeholder contains no digits and no `::debug::` marker, so
//! no pattern can match text produced by an earlier one.

use regex::{NoExpand, Regex};
use std::io::Write;
use std::sync::LazyLock;

/// Literal token substituted for every noise match.
pub const PLACEHOLDER: &str = "<TS>";

/// Fixed, ordered noise patterns.
///
/// 1. ISO-8601-like date and time (`YYYY-MM-DDTHH:MM:SS`).
/// 2. A `::debug::` marker and everything after it on the line.
pub const NOISE_PATTERNS: &[&str] = &[
    r"\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}",
    r"::debug::.*",
];

static DEFAULT: LazyLock<Normalizer> = LazyLock::new(Normalizer::default);

/// Normalize one line with the built-in noise patterns.
///
/// ```
/// assert_eq!(
///     cilog_core::normalize("2024-05-01T10:22:33 build started"),
///     "<TS> build started"
/// );
/// ```
pub fn normalize(line: &str) -> String {
    DEFAULT.normalize(line)
}

/// Compiled noise-pattern list.
#[derive(Debug, Clone)]
pub struct Normalizer {
    patterns: Vec<Regex>,
}

impl Default for Normalizer {
    fn default() -> Self {
        let patterns = NOISE_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("built-in noise pattern must compile"))
            .collect::<Vec<_>>();
        tracing::debug!(count = patterns.len(), "compiled noise patterns");
        Self { patterns }
    }
}

impl Normalizer {
    /// Replace every noise match with [`PLACEHOLDER`], then trim.
    pub fn normalize(&self, line: &str) -> String {
        let mut out = line.to_string();
        for pattern in &self.patterns {
            out = pattern.replace_all(&out, NoExpand(PLACEHOLDER)).into_owned();
        }
        out.trim().to_string()
    }

    /// Normalize every line from `lines` into `output`, one line out per line
    /// in, preserving order. Returns the number of lines written.
    ///
    /// Input lines are expected without terminators; a single `\n` is
    /// written after each normalized line.
    pub fn normalize_stream<I, W>(&self, lines: I, mut output: W) -> std::io::Result<usize>
    where
        I: IntoIterator<Item = std::io::Result<String>>,
        W: Write,
    {
        let mut count = 0usize;
        for line in lines {
            writeln!(output, "{}", self.normalize(&line?))?;
            count += 1;
        }
        output.flush()?;
        tracing::debug!(lines = count, "normalized stream");
        Ok(count)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
