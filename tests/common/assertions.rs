//! Domain-specific assertion macros for cilog harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! tool invariant was violated and on what input.

use regex::Regex;
use std::sync::LazyLock;

/// Assert that triaging `$text` reports exactly the categories `$expected`
/// (category names, in report order).
///
/// ```rust
/// assert_causes!("got 403", ["auth"]);
/// ```
#[macro_export]
macro_rules! assert_causes {
    ($text:expr, $expected:expr) => {{
        let text: &str = $text;
        let actual = cilog_core::classify(text).names();
        let expected: Vec<&str> = $expected.iter().map(|s: &&str| *s).collect();
        pretty_assertions::assert_eq!(
            actual,
            expected,
            "assert_causes! failed for input {:?}",
            text
        );
    }};
}

/// Assert that a normalized line contains no timestamp and no debug marker.
#[macro_export]
macro_rules! assert_masked {
    ($line:expr) => {{
        let line: &str = &$line;
        if $crate::common::has_timestamp(line) || line.contains("::debug::") {
            panic!("assert_masked! failed: noise survived normalization:\n  {:?}", line);
        }
    }};
}

static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(cilog_core::normalizer::NOISE_PATTERNS[0]).expect("timestamp pattern compiles")
});

/// `true` if `line` still holds a stamp the normalizer's timestamp pattern
/// would match.
pub fn has_timestamp(line: &str) -> bool {
    TIMESTAMP.is_match(line)
}
