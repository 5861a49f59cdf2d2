//! Test builders — on-disk capture layouts for the differ.
//!
//! These are designed for readability in tests, not for production use. They
//! panic on I/O failure rather than returning `Result`.

use std::path::{Path, PathBuf};

/// A temporary working directory holding `logs/parsed/{passing,failing}.log`.
///
/// # Example
///
/// ```rust
/// let dir = CaptureDir::new()
///     .passing(&["a", "b", "c"])
///     .failing(&["a", "x", "c"]);
/// let out = run_in(dir.path(), binary("cilog-diff"));
/// ```
pub struct CaptureDir {
    dir: tempfile::TempDir,
}

impl CaptureDir {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir_all(dir.path().join("logs/parsed")).expect("create logs/parsed");
        Self { dir }
    }

    pub fn passing(self, lines: &[&str]) -> Self {
        self.write("passing.log", lines)
    }

    pub fn failing(self, lines: &[&str]) -> Self {
        self.write("failing.log", lines)
    }

    /// Working directory to run the binaries from.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn capture(&self, name: &str) -> PathBuf {
        self.dir.path().join("logs/parsed").join(name)
    }

    fn write(self, name: &str, lines: &[&str]) -> Self {
        let mut text = lines.join("\n");
        if !lines.is_empty() {
            text.push('\n');
        }
        std::fs::write(self.capture(name), text).expect("write capture");
        self
    }
}

impl Default for CaptureDir {
    fn default() -> Self {
        Self::new()
    }
}
