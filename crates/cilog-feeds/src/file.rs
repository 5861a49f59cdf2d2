//! File feed — whole-file captures for the differ.

use crate::ReadError;
use cilog_core::differ::{DiffOptions, UnifiedDiff};
use std::path::Path;

/// Baseline capture the differ reads by default, relative to the working
/// directory.
pub const PASSING_PATH: &str = "logs/parsed/passing.log";

/// Capture compared against the baseline by default.
pub const FAILING_PATH: &str = "logs/parsed/failing.log";

/// Read a file fully and split it into lines, lossily decoded. See
/// [`split_lines`] for what ends a line.
pub fn read_lines(path: &Path) -> Result<Vec<String>, ReadError> {
    let bytes = std::fs::read(path).map_err(|source| ReadError::File {
        path: path.to_path_buf(),
        source,
    })?;
    let lines = split_lines(&String::from_utf8_lossy(&bytes));
    tracing::debug!(path = %path.display(), lines = lines.len(), "read capture");
    Ok(lines)
}

/// Split `text` at every line boundary and drop the boundaries. `\r\n` counts
/// as one boundary; so do a lone `\r`, `\n`, the vertical tab, form feed,
/// file/group/record separators, NEL and the Unicode line and paragraph
/// separators. A trailing boundary does not start an extra empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let Some((end, c)) = rest.char_indices().find(|&(_, c)| is_line_boundary(c)) else {
            lines.push(rest.to_string());
            break;
        };
        lines.push(rest[..end].to_string());
        let mut next = end + c.len_utf8();
        if c == '\r' && rest[next..].starts_with('\n') {
            next += 1;
        }
        rest = &rest[next..];
    }
    lines
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Diff the `passing` capture against the `failing` one.
///
/// Both files are read before diffing; the first unreadable path is
/// reported.
pub fn diff_files(
    passing: &Path,
    failing: &Path,
    opts: &DiffOptions,
) -> Result<UnifiedDiff, ReadError> {
    let a = read_lines(passing)?;
    let b = read_lines(failing)?;
    Ok(UnifiedDiff::new(&a, &b, opts))
}
