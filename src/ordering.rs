//! Ordering and display restamping of the collected articles.
//!
//! The source only publishes a calendar date per article, so rows sharing a
//! day would be indistinguishable once imported elsewhere. After sorting
//! newest first, each row gets a synthetic clock time that drops by one
//! minute per row. These times are presentation only and say nothing about
//! when an article was actually published.

use crate::cli::Variant;
use crate::dates::DATE_FORMAT;
use crate::models::Article;
use chrono::{Duration, NaiveDateTime};
use tracing::{debug, instrument};

/// Display format of a restamped row: `DD/MM/YYYY HH:MM`.
pub const STAMP_TIME_FORMAT: &str = "%H:%M";

/// Stable sort, most recent `date` first. Undated articles sort last.
pub fn sort_newest_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Rewrite `published_date` with the article's date and a clock time that
/// starts at `start` and decreases by one minute per article.
pub fn restamp(articles: &mut [Article], start: NaiveDateTime) {
    let mut clock = start;
    for article in articles.iter_mut() {
        let day = match article.date {
            Some(date) => date.format(DATE_FORMAT).to_string(),
            None => article.published_date.clone(),
        };
        article.published_date = format!("{} {}", day, clock.format(STAMP_TIME_FORMAT));
        clock -= Duration::minutes(1);
    }
}

/// Apply the post-processing of the selected variant.
///
/// `Rich` sorts and restamps starting from `now`; `Simple` keeps document
/// order and the raw date labels.
#[instrument(level = "info", skip(articles, now), fields(count = articles.len()))]
pub fn finalize(articles: &mut [Article], variant: Variant, now: NaiveDateTime) {
    match variant {
        Variant::Rich => {
            sort_newest_first(articles);
            restamp(articles, now);
            debug!(%now, "Restamped articles");
        }
        Variant::Simple => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn dated(title: &str, y: i32, m: u32, d: u32) -> Article {
        Article {
            title: title.to_string(),
            date: NaiveDate::from_ymd_opt(y, m, d),
            ..Default::default()
        }
    }

    fn at(h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 20)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(h, min, 30).unwrap())
    }

    #[test]
    fn test_sort_newest_first() {
        let mut articles = vec![
            dated("old", 2024, 1, 1),
            dated("new", 2024, 3, 15),
            dated("mid", 2024, 2, 10),
        ];
        sort_newest_first(&mut articles);
        let titles: Vec<_> = articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_dates() {
        let mut articles = vec![
            dated("a", 2024, 3, 15),
            dated("older", 2024, 3, 1),
            dated("b", 2024, 3, 15),
            dated("c", 2024, 3, 15),
        ];
        sort_newest_first(&mut articles);
        let titles: Vec<_> = articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c", "older"]);
    }

    #[test]
    fn test_restamp_decrements_one_minute_per_row() {
        let mut articles = vec![
            dated("a", 2024, 3, 15),
            dated("b", 2024, 3, 15),
            dated("c", 2024, 3, 14),
        ];
        restamp(&mut articles, at(10, 1));
        let stamps: Vec<_> = articles.iter().map(|a| a.published_date.as_str()).collect();
        assert_eq!(
            stamps,
            vec!["15/03/2024 10:01", "15/03/2024 10:00", "14/03/2024 09:59"]
        );
    }

    #[test]
    fn test_restamp_crosses_midnight() {
        let mut articles = vec![dated("a", 2024, 3, 15), dated("b", 2024, 3, 15)];
        restamp(&mut articles, at(0, 0));
        assert_eq!(articles[0].published_date, "15/03/2024 00:00");
        assert_eq!(articles[1].published_date, "15/03/2024 23:59");
    }

    #[test]
    fn test_finalize_rich_orders_display_times() {
        let mut articles = vec![
            dated("x", 2024, 3, 10),
            dated("y", 2024, 3, 12),
            dated("z", 2024, 3, 12),
        ];
        finalize(&mut articles, Variant::Rich, at(12, 0));

        let stamps: Vec<NaiveDateTime> = articles
            .iter()
            .map(|a| NaiveDateTime::parse_from_str(&a.published_date, "%d/%m/%Y %H:%M").unwrap())
            .collect();
        for pair in stamps.windows(2) {
            assert!(pair[0] > pair[1], "{:?} should be after {:?}", pair[0], pair[1]);
        }
        assert_eq!(articles[0].title, "y");
        assert_eq!(articles[1].title, "z");
        assert_eq!(stamps[0] - stamps[1], Duration::minutes(1));
    }

    #[test]
    fn test_finalize_simple_is_noop() {
        let mut articles = vec![
            Article {
                title: "first".to_string(),
                published_date: "Postuar me: 01/01/2024".to_string(),
                ..Default::default()
            },
            Article {
                title: "second".to_string(),
                published_date: "Postuar me: 05/01/2024".to_string(),
                ..Default::default()
            },
        ];
        let before = articles.clone();
        finalize(&mut articles, Variant::Simple, at(9, 0));
        assert_eq!(articles, before);
    }
}
