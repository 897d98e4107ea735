//! News index scraper.
//!
//! The listing page renders each article as a `.portfolio-grid` card inside
//! the `#MainContent_ctl00_pnlLajmet` panel. A card carries a thumbnail, a
//! heading link to the article page and a caption with the posting date.

use crate::models::IndexEntry;
use crate::utils::join_origin;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

static ENTRY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("#MainContent_ctl00_pnlLajmet .portfolio-grid").unwrap());
static IMAGE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse(".port-img img").unwrap());
static LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("h3 a").unwrap());
static DATE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse(".caption .date").unwrap());

/// Enumerate every entry of the index page in document order.
pub fn extract_entries(document: &Html, base_url: &str) -> Vec<IndexEntry> {
    let entries: Vec<IndexEntry> = document
        .select(&ENTRY_SELECTOR)
        .enumerate()
        .map(|(position, card)| extract_entry(position, card, base_url))
        .collect();

    info!(count = entries.len(), "Indexed news entries");
    entries
}

/// Pull the fields of one card. Missing pieces stay `None` or empty.
fn extract_entry(position: usize, card: ElementRef<'_>, base_url: &str) -> IndexEntry {
    let featured_image = card
        .select(&IMAGE_SELECTOR)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(|src| join_origin(base_url, src));

    let link_el = card.select(&LINK_SELECTOR).next();
    let link = link_el
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string);
    let link_text = link_el
        .map(|a| a.text().collect::<String>())
        .unwrap_or_default();

    let date_label = card
        .select(&DATE_SELECTOR)
        .flat_map(|el| el.text())
        .collect::<String>()
        .trim()
        .to_string();

    debug!(position, ?link, %date_label, "Parsed index entry");
    IndexEntry {
        position,
        featured_image,
        link,
        link_text,
        date_label,
    }
}
