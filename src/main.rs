// src/main.rs

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;
use url::Url;

use seolupp::domain::models::CrawlSettings;
use seolupp::error::{AppError, Result};
use seolupp::lifecycle;
use seolupp::service::{reporter, Analyzer, Crawler};

#[derive(Parser, Debug)]
#[command(
    name = "seolupp",
    version,
    about = "SEO audit for a website (same-domain crawling)"
)]
struct Cli {
    /// Start URL for the crawl (http or https)
    #[arg(long)]
    url: String,

    /// Maximum link depth from the start URL
    #[arg(long, default_value_t = 1)]
    depth: usize,

    /// Upper bound on fetched pages
    #[arg(long, default_value_t = 200)]
    max_pages: usize,

    /// Number of pages fetched concurrently
    #[arg(long, default_value_t = 8)]
    concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long = "timeout", default_value_t = 15)]
    timeout_secs: u64,

    /// Write the full JSON report to this path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_seed(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| AppError::invalid_url(format!("{raw}: {e}")))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(AppError::invalid_url(format!(
            "unsupported scheme '{}', expected http or https",
            url.scheme()
        )));
    }
    Ok(url)
}

async fn run(cli: Cli) -> Result<()> {
    let seed = parse_seed(&cli.url)?;
    let settings = CrawlSettings {
        max_depth: cli.depth,
        max_pages: cli.max_pages,
        concurrency: cli.concurrency,
        timeout: Duration::from_secs(cli.timeout_secs),
    };

    println!("Starting crawl: {seed}");
    let crawler = Crawler::new(settings)?;
    let crawl = crawler.crawl(&seed).await;

    println!("Analyzing results...");
    let report = Analyzer::analyze(&crawl);
    reporter::print_summary(&crawl.seed, &report);

    if let Some(path) = &cli.output {
        reporter::save_json(path, &crawl.seed, &report)?;
        println!();
        println!("JSON output saved to {}", path.display());
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    lifecycle::init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        log::error!("{e}");
        process::exit(1);
    }
}
