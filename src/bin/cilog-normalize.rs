use clap::Parser;
use cilog::CommonArgs;
use cilog_core::Normalizer;
use cilog_feeds::LineFeed;
use std::io::BufWriter;

#[derive(Parser)]
#[command(
    name = "cilog-normalize",
    version,
    about = "Mask timestamps and debug noise in log lines read from stdin"
)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cilog::init_tracing(&cli.common, "cilog-normalize");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let lines = Normalizer::default().normalize_stream(
        LineFeed::new(stdin.lock()),
        BufWriter::new(stdout.lock()),
    )?;

    tracing::info!(lines, "normalize finished");
    Ok(())
}
