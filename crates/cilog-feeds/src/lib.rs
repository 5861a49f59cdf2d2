//! cilog-feeds — input sources for the cilog tools.
//!
//! Each feed reads raw bytes from a source (standard input or a file on disk),
//! converts them to UTF-8 lossily, and hands plain lines or a whole text blob
//! to the pure functions in [`cilog_core`].

pub mod file;
pub mod stdin;

use std::path::PathBuf;

pub use file::{diff_files, read_lines};
pub use stdin::LineFeed;

/// Failure to read one of the tool inputs.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("cannot read {}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot read standard input")]
    Stdin(#[source] std::io::Error),
}
