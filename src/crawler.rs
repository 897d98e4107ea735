//! Sequential crawl of the news index and its article pages.
//!
//! The index is fetched once. Its entries are then processed one at a time,
//! in document order, until the configured maximum is reached. A failure on
//! the index page aborts the crawl; a failure on one article page only drops
//! that article.

use crate::cli::{Cli, Variant};
use crate::dates::parse_label;
use crate::error::ScrapeError;
use crate::models::{Article, IndexEntry};
use crate::scrapers::article::{ContentMode, assemble_content, extract_gallery, extract_title};
use crate::scrapers::{fetch_document, index::extract_entries};
use crate::utils::{join_origin, truncate_for_log};
use kdam::{BarExt, tqdm};
use reqwest::Client;
use scraper::Html;
use tracing::{debug, info, instrument, warn};

/// Settings for one crawl.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Origin prepended to every relative path, e.g. `https://md.rks-gov.net`.
    pub base_url: String,
    /// Path of the index page, appended to `base_url` as is.
    pub index_path: String,
    /// Maximum number of index entries to process; `None` means all.
    pub max_articles: Option<usize>,
    pub variant: Variant,
}

impl CrawlConfig {
    pub fn index_url(&self) -> String {
        join_origin(&self.base_url, &self.index_path)
    }

    /// URL of an article page: origin, a `/`, then the href verbatim.
    pub fn article_url(&self, href: &str) -> String {
        join_origin(&self.base_url, &format!("/{href}"))
    }
}

impl From<&Cli> for CrawlConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            base_url: cli.base_url.clone(),
            index_path: cli.index_path.clone(),
            max_articles: cli.num,
            variant: cli.variant,
        }
    }
}

/// What a crawl produced.
#[derive(Debug, Default)]
pub struct CrawlReport {
    /// Appended articles, in index order.
    pub articles: Vec<Article>,
    /// Linked entries whose article page was requested.
    pub processed: usize,
    /// Entries dropped because of a missing link or a per-article error.
    pub skipped: usize,
}

/// Number of entries to process given an optional maximum.
pub fn crawl_limit(max_articles: Option<usize>, available: usize) -> usize {
    max_articles.map_or(available, |max| max.min(available))
}

/// Build one article from its index entry and parsed page.
///
/// Fails only when the rich variant cannot parse the entry's date.
pub fn build_article(
    entry: &IndexEntry,
    document: &Html,
    config: &CrawlConfig,
) -> Result<Article, ScrapeError> {
    let featured_image = entry.featured_image.clone().unwrap_or_default();
    let gallery_images = extract_gallery(document, &config.base_url);

    let article = match config.variant {
        Variant::Rich => {
            let published = parse_label(&entry.date_label)?;
            Article {
                title: extract_title(document),
                featured_image,
                published_date: published.display(),
                content: assemble_content(document, ContentMode::Markup),
                gallery_images,
                date: Some(published.date),
            }
        }
        Variant::Simple => Article {
            title: entry.link_text.trim().to_string(),
            featured_image,
            published_date: entry.date_label.clone(),
            content: assemble_content(document, ContentMode::Text),
            gallery_images,
            date: None,
        },
    };
    Ok(article)
}

pub struct Crawler {
    client: Client,
    config: CrawlConfig,
}

impl Crawler {
    pub fn new(config: CrawlConfig) -> Result<Self, ScrapeError> {
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    /// Fetch the index and process its entries.
    ///
    /// Only index failures are returned as errors.
    #[instrument(level = "info", skip(self), fields(base_url = %self.config.base_url))]
    pub async fn run(&self) -> Result<CrawlReport, ScrapeError> {
        let entries = self.index().await?;
        let linked = entries.iter().filter(|e| e.link.is_some()).count();
        let limit = crawl_limit(self.config.max_articles, linked);
        info!(available = entries.len(), linked, limit, "Starting crawl");

        let mut progress = tqdm!(total = limit);
        let mut report = CrawlReport::default();
        let mut cursor = entries.iter();

        while report.processed < limit {
            let Some(entry) = cursor.next() else {
                break;
            };
            // Linkless entries are passed over without using up the limit.
            let Some(href) = entry.link.as_deref() else {
                debug!(position = entry.position, "Entry has no link; skipping");
                report.skipped += 1;
                continue;
            };
            report.processed += 1;

            match self.process_entry(entry, href).await {
                Some(article) => report.articles.push(article),
                None => report.skipped += 1,
            }

            if let Err(e) = progress.update(1) {
                debug!(error = %e, "Progress bar update failed");
            }
        }
        // Ends the progress bar's line on stderr.
        eprintln!();

        info!(
            processed = report.processed,
            appended = report.articles.len(),
            skipped = report.skipped,
            "Crawl finished"
        );
        Ok(report)
    }

    async fn index(&self) -> Result<Vec<IndexEntry>, ScrapeError> {
        let url = self.config.index_url();
        let document = fetch_document(&self.client, &url).await?;
        Ok(extract_entries(&document, &self.config.base_url))
    }

    /// Fetch and extract one linked entry. `None` means the entry was skipped.
    #[instrument(level = "debug", skip_all, fields(position = entry.position))]
    async fn process_entry(&self, entry: &IndexEntry, href: &str) -> Option<Article> {
        let url = self.config.article_url(href);
        let document = match fetch_document(&self.client, &url).await {
            Ok(document) => document,
            Err(e) => {
                warn!(error = %e, %url, "Article fetch failed; skipping");
                return None;
            }
        };

        match build_article(entry, &document, &self.config) {
            Ok(article) => {
                debug!(%url, title = %truncate_for_log(&article.title, 80), "Extracted article");
                Some(article)
            }
            Err(e) => {
                warn!(error = %e, %url, "Article extraction failed; skipping");
                None
            }
        }
    }
}
