//! Article page scraper.
//!
//! An article page keeps its body inside `div#div_print`: a semibold lead
//! paragraph, then the body paragraphs, then an optional `div.tz-gallery`
//! with lightbox images.

use crate::utils::join_origin;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("h3").unwrap());
static CONTENT_START_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div#div_print p.semibold").unwrap());
static GALLERY_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("div.tz-gallery").unwrap());
static GALLERY_IMAGE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.tz-gallery a.lightbox img").unwrap());

/// How body paragraphs are serialized into [`Article::content`](crate::models::Article).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMode {
    /// Outer HTML of each paragraph, tags preserved.
    Markup,
    /// Text nodes only.
    Text,
}

/// Text of every `h3` on the page, concatenated in document order.
pub fn extract_title(document: &Html) -> String {
    document
        .select(&TITLE_SELECTOR)
        .flat_map(|h3| h3.text())
        .collect()
}

/// Concatenate the non-empty siblings that follow the lead paragraph.
///
/// The run stops before the gallery container, or at the last sibling when
/// there is no gallery. A page without a lead paragraph has no content.
pub fn assemble_content(document: &Html, mode: ContentMode) -> String {
    let Some(start) = document.select(&CONTENT_START_SELECTOR).next() else {
        return String::new();
    };

    let mut content = String::new();
    for sibling in start
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .take_while(|el| !GALLERY_SELECTOR.matches(el))
    {
        let text: String = sibling.text().collect();
        if text.trim().is_empty() {
            continue;
        }
        match mode {
            ContentMode::Markup => content.push_str(&sibling.html()),
            ContentMode::Text => content.push_str(&text),
        }
    }
    content
}

/// Absolute URLs of the gallery images, in document order.
pub fn extract_gallery(document: &Html, base_url: &str) -> Vec<String> {
    document
        .select(&GALLERY_IMAGE_SELECTOR)
        .filter_map(|img| img.value().attr("src"))
        .map(|src| join_origin(base_url, src))
        .collect()
}
