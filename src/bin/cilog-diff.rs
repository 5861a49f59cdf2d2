use clap::Parser;
use cilog::CommonArgs;
use cilog_core::differ::{DiffOptions, DEFAULT_CONTEXT};
use cilog_feeds::file::{FAILING_PATH, PASSING_PATH};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cilog-diff",
    version,
    about = "Unified diff of a passing log capture against a failing one"
)]
struct Cli {
    /// Baseline capture [default: logs/parsed/passing.log].
    passing: Option<PathBuf>,

    /// Capture to compare against the baseline [default: logs/parsed/failing.log].
    failing: Option<PathBuf>,

    /// Lines of context around each change [default: 3].
    #[arg(short = 'U', long)]
    context: Option<usize>,

    /// Print a hunk/line summary to stderr after the diff.
    #[arg(long)]
    stat: bool,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cilog::init_tracing(&cli.common, "cilog-diff");

    let passing = cli.passing.unwrap_or_else(|| PathBuf::from(PASSING_PATH));
    let failing = cli.failing.unwrap_or_else(|| PathBuf::from(FAILING_PATH));
    let opts = DiffOptions::default().context(cli.context.unwrap_or(DEFAULT_CONTEXT));

    let diff = cilog_feeds::diff_files(&passing, &failing, &opts)?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in &diff.lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    if cli.stat {
        eprintln!("{}", diff.stats);
    }
    tracing::info!(
        passing = %passing.display(),
        failing = %failing.display(),
        hunks = diff.stats.hunks,
        "diff finished"
    );
    Ok(())
}
