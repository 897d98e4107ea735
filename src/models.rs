//! Data models for scraped articles.
//!
//! - [`IndexEntry`]: the raw fields pulled from one entry of the index page
//! - [`Article`]: a fully extracted article, ready to be ordered and exported

use chrono::NaiveDate;

/// One entry of the news index, copied out of the parsed document.
///
/// Entries are owned so that the index document can be dropped before the
/// article pages are fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexEntry {
    /// Zero-based position on the index page.
    pub position: usize,
    /// Featured image URL, already prefixed with the site origin.
    pub featured_image: Option<String>,
    /// The `href` of the heading link, exactly as found.
    pub link: Option<String>,
    /// Text of the heading link.
    pub link_text: String,
    /// Trimmed text of the entry's date caption.
    pub date_label: String,
}

/// A scraped article.
///
/// Every field except `date` ends up in one CSV row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    /// Absolute URL, or empty when the index entry had no image.
    pub featured_image: String,
    /// Display date. Rewritten by [`crate::ordering::restamp`] in the rich variant.
    pub published_date: String,
    /// Outer markup or plain text of the body paragraphs.
    pub content: String,
    /// Absolute URLs in document order.
    pub gallery_images: Vec<String>,
    /// Parsed calendar date, used only for ordering.
    pub date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_default_is_empty() {
        let article = Article::default();
        assert!(article.title.is_empty());
        assert!(article.featured_image.is_empty());
        assert!(article.gallery_images.is_empty());
        assert_eq!(article.date, None);
    }

    #[test]
    fn test_index_entry_creation() {
        let entry = IndexEntry {
            position: 2,
            featured_image: Some("https://example.com/img.jpg".to_string()),
            link: Some("page.aspx?id=1,15,42".to_string()),
            link_text: "Headline".to_string(),
            date_label: "Postuar me: 15/03/2024".to_string(),
        };
        assert_eq!(entry.position, 2);
        assert_eq!(entry.link.as_deref(), Some("page.aspx?id=1,15,42"));
    }
}
