//! Checks on fetched markup before it is handed to the pipeline.

use crate::config::SelectorConfig;
use crate::error::{ExtractError, Result};
use crate::pipeline::{self, Extraction};
use scraper::Html;
use url::Url;

/// UTF-8 replacement character after being decoded as Latin-1 once more
const MOJIBAKE: &str = "ï¿½";

/// Shown instead of results when the engine offers a spelling correction
const DID_YOU_MEAN_MARKER: &str = "Did you mean:";

/// Shown when the engine has nothing at all for the query
const NO_RESULTS_MARKER: &str = "did not match any documents.";

/// Removes replacement-character garbage the search engine sometimes emits
pub fn sanitize_markup(raw: &str) -> String {
    raw.replace(MOJIBAKE, "").replace('\u{FFFD}', "")
}

/// Rejects pages that answer the query with a suggestion or with nothing
pub fn check_verdict(markup: &str) -> Result<()> {
    if markup.contains(DID_YOU_MEAN_MARKER) {
        ::log::warn!("Search engine suggested a different query");
        return Err(ExtractError::QueryNotSpecific);
    }
    if markup.contains(NO_RESULTS_MARKER) {
        ::log::warn!("Search engine found no documents");
        return Err(ExtractError::NoResults);
    }
    Ok(())
}

/// Sanitizes, verifies and parses `raw`, then runs the extraction pipeline
pub fn extract_page(raw: &str, selectors: &SelectorConfig, base: &Url) -> Result<Extraction> {
    let markup = sanitize_markup(raw);
    check_verdict(&markup)?;

    let compiled = selectors.compile()?;
    let document = Html::parse_document(&markup);
    pipeline::extract(&document, &compiled, base)
}
