//! Error type shared by the crawler, the date normalizer and the CSV writer.
//!
//! Severity is not encoded here: the orchestrator logs and drops errors that
//! concern a single article, while `main` propagates everything else.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Transport-level failure (connection, body read, ...).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with anything other than `200 OK`.
    #[error("status code {status} when fetching {url}")]
    Status { url: String, status: u16 },

    /// The date label did not end in a `DD/MM/YYYY` token.
    #[error("cannot parse date from {input:?}")]
    DateParse { input: String },

    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_names_url() {
        let err = ScrapeError::Status {
            url: "https://example.com/a".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "status code 404 when fetching https://example.com/a"
        );
    }

    #[test]
    fn test_date_parse_message_quotes_input() {
        let err = ScrapeError::DateParse {
            input: "15-03-2024".to_string(),
        };
        assert_eq!(err.to_string(), "cannot parse date from \"15-03-2024\"");
    }
}
