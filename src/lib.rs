//! cilog — CI log inspection tools.
//!
//! Three independent command-line programs built on [`cilog_core`] and
//! [`cilog_feeds`]:
//!
//! | binary            | reads                      | writes                         |
//! |-------------------|----------------------------|--------------------------------|
//! | `cilog-normalize` | stdin, line by line        | masked lines, one per input    |
//! | `cilog-diff`      | passing + failing captures | unified diff                   |
//! | `cilog-triage`    | all of stdin               | `Likely causes: [...]`         |
//!
//! This crate only holds the process bootstrap they share: the common
//! `--debug` flag and tracing setup. Diagnostics always go to stderr so
//! stdout stays the tool's output.

use clap::Args;

/// Flags accepted by every cilog binary.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Write debug logs to stderr (filter with RUST_LOG).
    #[arg(long)]
    pub debug: bool,
}

/// Install the stderr tracing subscriber when `--debug` was given.
pub fn init_tracing(common: &CommonArgs, tool: &str) {
    if !common.debug {
        return;
    }
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();
    tracing::info!(tool, version = env!("CARGO_PKG_VERSION"), "debug log started");
}
