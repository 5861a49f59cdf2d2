//! Static CI log corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of representative lines as they
//! appear in GitHub Actions / generic CI job output.

/// Lines carrying ISO-8601 timestamps and `::debug::` markers.
pub const CORPUS_NOISY: &[&str] = &[
    "2024-05-01T10:22:33 build started",
    "2024-05-01T10:22:34.5120000Z ##[group]Run actions/checkout@v4",
    "::debug::Getting Actions token",
    "2024-05-01T10:22:35 ::debug::cache restore key=node-modules-abc123",
    "  2024-05-01T10:22:36   npm ci   ",
    "step finished at 2024-05-01T10:22:40, next at 2024-05-01T10:22:41",
];

/// Lines with nothing for the normalizer to mask.
pub const CORPUS_CLEAN: &[&str] = &[
    "Run npm test",
    "PASS src/app.test.ts",
    "Tests:       42 passed, 42 total",
    "Done in 12.34s.",
    "debug: this is not a marker",
    "2024-05-01 10:22:33 space-separated dates are kept",
];

/// Baseline capture of a passing run, already normalized.
pub const PASSING_CAPTURE: &[&str] = &[
    "<TS> Run actions/checkout@v4",
    "<TS> Run actions/setup-python@v5",
    "<TS> Run pip install -r requirements.txt",
    "<TS> Successfully installed requests-2.31.0",
    "<TS> Run pytest",
    "<TS> ============ 12 passed in 3.10s ============",
    "<TS> Post job cleanup.",
];

/// The same job failing on a missing module.
pub const FAILING_CAPTURE: &[&str] = &[
    "<TS> Run actions/checkout@v4",
    "<TS> Run actions/setup-python@v5",
    "<TS> Run pip install -r requirements.txt",
    "<TS> ERROR: Could not find a version that satisfies the requirement reqeusts",
    "<TS> Run pytest",
    "<TS> ImportError: No module named 'requests'",
    "<TS> ============ 1 error in 0.40s ============",
    "<TS> Post job cleanup.",
];

/// Failure excerpts paired with the categories the classifier must report.
pub const TRIAGE_CASES: &[(&str, &[&str])] = &[
    ("Error: connect ETIMEDOUT 140.82.112.3:443", &["timeout"]),
    ("fatal: Authentication failed: 401 Unauthorized", &["auth"]),
    ("E   ImportError: cannot import name 'x' from 'y'", &["dependency"]),
    ("getaddrinfo ENOTFOUND registry.npmjs.org", &["network"]),
    ("request timed out, got 403", &["timeout", "auth"]),
    ("requests.exceptions.ConnectionError after timeout", &["timeout", "network"]),
    ("All checks have passed", &["unknown"]),
    ("", &["unknown"]),
];
