//! CSV export of the scraped articles.
//!
//! One header row, then one row per article:
//!
//! ```text
//! Title,FeaturedImage,PublishedDate,Content,GalleryImages
//! ```
//!
//! `GalleryImages` holds the image URLs joined with `,`. A URL containing a
//! comma cannot be told apart from two URLs once joined.
//!
//! Fields are quoted only when they contain `,`, `"`, `\r` or `\n`. A field
//! that merely starts with a space or tab (for example an untrimmed title)
//! is written bare; readers get the leading whitespace back unchanged.

use crate::error::ScrapeError;
use crate::models::Article;
use csv::{Terminator, WriterBuilder};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use tracing::{info, instrument};

/// Column names, in output order.
pub const HEADER: [&str; 5] = [
    "Title",
    "FeaturedImage",
    "PublishedDate",
    "Content",
    "GalleryImages",
];

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    title: &'a str,
    featured_image: &'a str,
    published_date: &'a str,
    content: &'a str,
    gallery_images: String,
}

impl<'a> From<&'a Article> for CsvRow<'a> {
    fn from(article: &'a Article) -> Self {
        Self {
            title: &article.title,
            featured_image: &article.featured_image,
            published_date: &article.published_date,
            content: &article.content,
            gallery_images: article.gallery_images.join(","),
        }
    }
}

/// Write the header and every article to `writer`.
pub fn write_articles<W: Write>(writer: W, articles: &[Article]) -> Result<(), ScrapeError> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(HEADER)?;
    for article in articles {
        csv_writer.serialize(CsvRow::from(article))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the articles to it.
#[instrument(level = "info", skip(articles), fields(count = articles.len()))]
pub fn write_articles_file(path: &str, articles: &[Article]) -> Result<(), ScrapeError> {
    let file = File::create(path)?;
    write_articles(file, articles)?;
    info!(path, "Wrote CSV file");
    Ok(())
}
