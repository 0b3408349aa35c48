use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use feedgrab_core::feed::{parse_feed, FeedFetcher};
use feedgrab_core::{render, AppConfig};

#[derive(Parser)]
#[command(name = "feedgrab")]
#[command(author, version, about = "Fetch an RSS feed and print it as text or JSON")]
struct Cli {
    /// RSS feed URL
    url: String,

    /// Maximum number of items to print (0 = no limit)
    #[arg(short, long, default_value_t = 0)]
    limit: usize,

    /// Print the feed as a JSON document instead of text
    #[arg(short, long)]
    json: bool,

    /// Emit debug traces for the fetch and parse steps
    #[arg(short, long)]
    verbose: bool,

    /// Request timeout in seconds (overrides config.toml)
    #[arg(short, long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Errors are always reported; --verbose adds the debug trace lines
    let default_filter = if cli.verbose { "debug" } else { "error" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    tracing::debug!("Program started");

    if let Err(e) = run(&cli).await {
        tracing::error!("{:#}. Program terminated.", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let mut config = AppConfig::load()?;
    if let Some(secs) = cli.timeout {
        config.fetch.request_timeout_secs = secs;
    }

    let fetcher = FeedFetcher::new(&config)?;
    let response = fetcher.fetch(&cli.url).await?;
    let feed = parse_feed(&response.body)?;

    if cli.json {
        println!("{}", render::json::to_json(&feed, cli.limit)?);
    } else {
        print!("{}", render::console::render(&feed, cli.limit));
    }

    Ok(())
}
