//! Command-line interface definitions for the news crawler.
//!
//! All options can be provided via command-line flags or environment variables.

use clap::{Parser, ValueEnum};

/// Default origin prepended to every relative path found on the site.
pub const DEFAULT_BASE_URL: &str = "https://md.rks-gov.net";
/// Path of the news listing page, relative to the origin.
pub const DEFAULT_INDEX_PATH: &str = "/page.aspx?id=1,15";

/// Extraction profile.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Title from the article page, body as HTML, rows sorted and restamped.
    #[default]
    Rich,
    /// Title from the index link, body as plain text, raw date labels.
    Simple,
}

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Crawl every entry of the index page
/// md_news_crawler
///
/// # Only the first five entries, plain-text bodies
/// md_news_crawler -n 5 --variant simple
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// The number of articles to crawl (default: all articles)
    #[arg(short = 'n', long = "num", env = "CRAWL_NUM")]
    pub num: Option<usize>,

    /// Site origin used to build article and image URLs
    #[arg(long, env = "CRAWL_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Path of the news index page
    #[arg(long, env = "CRAWL_INDEX_PATH", default_value = DEFAULT_INDEX_PATH)]
    pub index_path: String,

    /// CSV file to create (truncated if it exists)
    #[arg(short, long, env = "CRAWL_OUTPUT", default_value = "articles.csv")]
    pub output: String,

    /// Extraction profile
    #[arg(long, env = "CRAWL_VARIANT", value_enum, default_value_t = Variant::Rich)]
    pub variant: Variant,
}
