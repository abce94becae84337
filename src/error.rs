//! Error types for search-result extraction.
//!
//! Blocks that cannot yield a complete record are not errors; they are
//! filtered out by the pipeline and never surface here.

/// Error type for fetch and extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The upward search ran out of parents before reaching the result block.
    /// The caller handed in an anchor that does not live under the root.
    #[error("node <{tag}> is detached from the search root")]
    DetachedNode { tag: String },

    /// A configured CSS selector could not be parsed.
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// The search engine answered with a spelling suggestion instead of results.
    #[error("query was not specific enough or was malformed")]
    QueryNotSpecific,

    /// The search engine found nothing for the query.
    #[error("query did not match any documents")]
    NoResults,

    /// No WebDriver server accepted a connection.
    #[error("no WebDriver server available")]
    WebDriverUnavailable,

    /// Navigating to the search page or reading its source failed.
    #[error("navigation failed: {0}")]
    Navigation(String),

    /// The fetch did not complete in time.
    #[error("fetch timed out after {secs} seconds")]
    Timeout { secs: u64 },

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
