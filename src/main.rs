//! # MD News Crawler
//!
//! A one-shot crawler for the news section of the Kosovo Ministry of Defence
//! website. It downloads the news index, follows every article link,
//! extracts the structured fields of each article and writes them to a CSV
//! file.
//!
//! ## Usage
//!
//! ```sh
//! md_news_crawler --num 10 --output articles.csv
//! ```
//!
//! ## Architecture
//!
//! The application runs a single sequential pass:
//! 1. **Indexing**: Fetch the news index and enumerate its entries
//! 2. **Fetching**: Download each article page, one at a time
//! 3. **Extraction**: Build an [`models::Article`] per page; failures drop only that article
//! 4. **Ordering**: Sort newest first and restamp display times (rich variant)
//! 5. **Output**: Write the CSV file

use chrono::Local;
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod crawler;
mod dates;
mod error;
mod models;
mod ordering;
mod outputs;
mod scrapers;
mod utils;

use cli::Cli;
use crawler::{CrawlConfig, Crawler};
use outputs::csv_file;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("md_news_crawler starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // ---- Crawl ----
    let crawler = Crawler::new(CrawlConfig::from(&args))?;
    let mut report = match crawler.run().await {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "Failed to load the news index");
            return Err(e.into());
        }
    };

    // ---- Order & restamp ----
    ordering::finalize(&mut report.articles, args.variant, Local::now().naive_local());

    // ---- CSV output ----
    if let Err(e) = csv_file::write_articles_file(&args.output, &report.articles) {
        error!(path = %args.output, error = %e, "Failed writing CSV");
        return Err(e.into());
    }
    println!("Data successfully written to {}", args.output);

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        articles = report.articles.len(),
        skipped = report.skipped,
        "Execution complete"
    );

    Ok(())
}
