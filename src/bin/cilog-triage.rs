use clap::Parser;
use cilog::CommonArgs;
use cilog_core::triage::TriageReport;

#[derive(Parser)]
#[command(
    name = "cilog-triage",
    version,
    about = "Guess likely failure causes from CI log text on stdin"
)]
struct Cli {
    /// Print a JSON report including the signals that matched.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cilog::init_tracing(&cli.common, "cilog-triage");

    let text = cilog_feeds::stdin::blob()?;

    if cli.json {
        println!("{}", TriageReport::new(&text).to_json()?);
    } else {
        println!("Likely causes: {}", cilog_core::classify(&text));
    }
    Ok(())
}
