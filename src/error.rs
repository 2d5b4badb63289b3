// src/error.rs
use scraper::error::SelectorErrorKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Non-success status, or the site's own "404" page.
    #[error("page not found: {url}")]
    NotFound { url: String },

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid selector: {0}")]
    Selector(String),

    /// No score element on the page: the match was not played.
    #[error("match {match_id} has no score (canceled)")]
    Canceled { match_id: String },

    #[error("commentary for match {match_id} is inconsistent: {timestamps} timestamps, {comments} comments")]
    Inconsistent {
        match_id: String,
        timestamps: usize,
        comments: usize,
    },

    #[error("{page}: missing {what}")]
    MissingElement { page: String, what: &'static str },

    #[error("invalid date range: {0}")]
    DateRange(String),

    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<SelectorErrorKind<'_>> for ScrapeError {
    fn from(e: SelectorErrorKind<'_>) -> Self {
        ScrapeError::Selector(e.to_string())
    }
}

impl ScrapeError {
    /// Errors that only mean "nothing to extract here" rather than a broken run.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ScrapeError::NotFound { .. } | ScrapeError::Canceled { .. })
    }
}
