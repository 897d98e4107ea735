//! Published-date normalization.
//!
//! The index page shows dates as a localized label such as
//! `"Postuar me: 15/03/2024 "`. Only the last space-separated token is a
//! date, always written `DD/MM/YYYY`.

use crate::error::ScrapeError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Render format for calendar dates, both in and out.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").unwrap());

/// A calendar date parsed from an index label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PublishedDate {
    pub date: NaiveDate,
}

impl PublishedDate {
    /// Canonical `DD/MM/YYYY` rendering.
    pub fn display(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Return the last space-separated token of a trimmed label.
pub fn last_token(label: &str) -> &str {
    label.trim().split(' ').next_back().unwrap_or_default()
}

/// Parse the date at the end of an index label.
///
/// chrono accepts single-digit days and months for `%d`/`%m`, so the token's
/// shape is checked first to keep the two-digit contract.
pub fn parse_label(label: &str) -> Result<PublishedDate, ScrapeError> {
    let token = last_token(label);
    if !DATE_SHAPE.is_match(token) {
        return Err(ScrapeError::DateParse {
            input: token.to_string(),
        });
    }
    let date = NaiveDate::parse_from_str(token, DATE_FORMAT).map_err(|_| ScrapeError::DateParse {
        input: token.to_string(),
    })?;
    Ok(PublishedDate { date })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label_takes_last_token() {
        let parsed = parse_label("Postuar me: 15/03/2024").unwrap();
        assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(parsed.display(), "15/03/2024");
    }

    #[test]
    fn test_parse_label_trims_trailing_whitespace() {
        let parsed = parse_label("  Postuar me: 01/12/2023 \n ").unwrap();
        assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
    }

    #[test]
    fn test_parse_label_bare_date() {
        let parsed = parse_label("29/02/2024").unwrap();
        assert_eq!(parsed.display(), "29/02/2024");
    }

    #[test]
    fn test_parse_label_rejects_wrong_separator() {
        let err = parse_label("15-03-2024").unwrap_err();
        assert!(matches!(err, ScrapeError::DateParse { ref input } if input == "15-03-2024"));
    }

    #[test]
    fn test_parse_label_rejects_single_digit_fields() {
        assert!(parse_label("Postuar me: 5/3/2024").is_err());
    }

    #[test]
    fn test_parse_label_rejects_impossible_date() {
        assert!(parse_label("31/02/2024").is_err());
    }

    #[test]
    fn test_parse_label_rejects_empty() {
        assert!(parse_label("   ").is_err());
    }

    #[test]
    fn test_published_dates_compare_chronologically() {
        let older = parse_label("31/12/2023").unwrap();
        let newer = parse_label("01/01/2024").unwrap();
        assert!(newer > older);
    }
}
