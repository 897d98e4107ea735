//! Page scrapers for the md.rks-gov.net news section.
//!
//! Scraping follows a two-phase pattern:
//!
//! 1. **Indexing**: [`index::extract_entries`] pulls one [`IndexEntry`] per
//!    article card on the listing page
//! 2. **Article pages**: [`article`] extracts the title, body content and
//!    gallery of each linked page
//!
//! Both phases load pages through [`fetch_document`]. Extraction functions
//! take an already parsed [`Html`] so they can be tested on fixtures.
//!
//! [`IndexEntry`]: crate::models::IndexEntry

use crate::error::ScrapeError;
use reqwest::{Client, StatusCode};
use scraper::Html;
use tracing::{debug, instrument};

pub mod article;
pub mod index;

/// GET `url` and parse the body as an HTML document.
///
/// Anything other than `200 OK` is reported as [`ScrapeError::Status`].
#[instrument(level = "debug", skip(client))]
pub async fn fetch_document(client: &Client, url: &str) -> Result<Html, ScrapeError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if status != StatusCode::OK {
        return Err(ScrapeError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    let body = response.text().await?;
    debug!(bytes = body.len(), "Fetched page");
    Ok(Html::parse_document(&body))
}
