use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use changelog_scan::config::{self, DEFAULT_CHANGELOG_URL, DEFAULT_OUTPUT_CSV};
use changelog_scan::fetch::FirecrawlFetcher;

#[derive(Parser)]
#[command(name = "changelog-scan")]
#[command(version, about = "Extract and consolidate patch notes from a changelog")]
struct Cli {
    /// Changelog URL to scan
    #[arg(long, default_value = DEFAULT_CHANGELOG_URL)]
    url: String,

    /// Output CSV path
    #[arg(long, default_value = DEFAULT_OUTPUT_CSV)]
    output: PathBuf,

    /// Firecrawl API key (falls back to the FIRECRAWL_API_KEY environment
    /// variable)
    #[arg(long)]
    api_key: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let api_key = cli
        .api_key
        .or_else(config::api_key)
        .ok_or_else(|| anyhow::anyhow!("{} not found in environment", config::API_KEY_ENV))?;

    let fetcher = FirecrawlFetcher::new(&api_key);

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(changelog_scan::pipeline::run(&fetcher, &cli.url, &cli.output))
}
