use crate::error::{ExtractError, Result};
use scraper::Selector;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use url::Url;

/// CSS selectors that anchor the extraction.
///
/// These are deliberately structural (`div`, `a`, `h3`); the description is
/// located by tree shape, not by class names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Container whose direct children are the result blocks
    #[serde(default = "default_container_selector")]
    pub container: String,

    /// Which direct children of the container count as result blocks
    #[serde(default = "default_block_selector")]
    pub block: String,

    /// Candidates for the main link inside a block
    #[serde(default = "default_anchor_selector")]
    pub anchor: String,

    /// Headline inside the main link
    #[serde(default = "default_headline_selector")]
    pub headline: String,
}

/// Selectors compiled once per run
#[derive(Debug)]
pub struct CompiledSelectors {
    pub container: Selector,
    pub block: Selector,
    pub anchor: Selector,
    pub headline: Selector,
}

impl SelectorConfig {
    /// Parses every selector, naming the one that failed
    pub fn compile(&self) -> Result<CompiledSelectors> {
        Ok(CompiledSelectors {
            container: parse_selector(&self.container)?,
            block: parse_selector(&self.block)?,
            anchor: parse_selector(&self.anchor)?,
            headline: parse_selector(&self.headline)?,
        })
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            container: default_container_selector(),
            block: default_block_selector(),
            anchor: default_anchor_selector(),
            headline: default_headline_selector(),
        }
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ExtractError::InvalidSelector {
        selector: css.to_string(),
        reason: format!("{e:?}"),
    })
}

/// Configuration for fetching and extracting search results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Search endpoint; the query is appended as `q`
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// Interface language requested from the search engine (`hl`)
    #[serde(default = "default_language")]
    pub language: String,

    /// Base for resolving relative result links
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Upper bound for a single page fetch, in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    #[serde(default)]
    pub selectors: SelectorConfig,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            search_url: default_search_url(),
            language: default_language(),
            base_url: default_base_url(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            selectors: SelectorConfig::default(),
        }
    }
}

impl ScraperConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Override the WebDriver URL with `WEBDRIVER_URL` when it is set and non-empty
    pub fn apply_env(mut self) -> Self {
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.webdriver_url = webdriver_url;
            }
        }
        self
    }

    /// Full search URL for `query`, form-encoded
    pub fn search_url_for(&self, query: &str) -> Result<Url> {
        Ok(Url::parse_with_params(
            &self.search_url,
            &[("q", query), ("hl", self.language.as_str())],
        )?)
    }

    pub fn base_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.base_url)?)
    }
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_search_url() -> String {
    "https://www.google.com/search".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_base_url() -> String {
    "https://www.google.com/".to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    45
}

fn default_container_selector() -> String {
    "#main".to_string()
}

fn default_block_selector() -> String {
    "div".to_string()
}

fn default_anchor_selector() -> String {
    "a[href]".to_string()
}

fn default_headline_selector() -> String {
    "h3".to_string()
}
