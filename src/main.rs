use clap::Parser;
use seqfetch::{config::Args, Downloader};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout is reserved for the per-item progress lines
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let plan = args.plan()?;

    let downloader = Downloader::with_fetcher(plan, args.fetcher());

    downloader.run()?;

    Ok(())
}
