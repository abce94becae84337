// Re-export modules
pub mod config;
pub mod dom;
pub mod error;
pub mod format;
pub mod links;
pub mod page;
pub mod pipeline;
pub mod results;
pub mod sources;

// Re-export commonly used types for convenience
pub use config::{ScraperConfig, SelectorConfig};
pub use error::{ExtractError, Result};
pub use pipeline::Extraction;
pub use results::{ResultCollection, ResultRecord};
pub use sources::MarkupSource;

use sources::webdriver::WebDriverSource;

/// Main builder for running a search and extracting its results
pub struct Search {
    query: String,
    config: ScraperConfig,
    webdriver_url: Option<String>,
}

impl Search {
    /// Create a new Search builder for the given query
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            config: ScraperConfig::default(),
            webdriver_url: None,
        }
    }

    /// Set the configuration
    pub fn with_config(mut self, config: ScraperConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a file
    pub fn with_config_file(self, path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config = ScraperConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a string
    pub fn with_config_str(self, config_str: &str) -> Result<Self> {
        let config = ScraperConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    /// Override the WebDriver URL (takes precedence over `WEBDRIVER_URL`)
    pub fn with_webdriver_url(mut self, webdriver_url: impl Into<String>) -> Self {
        self.webdriver_url = Some(webdriver_url.into());
        self
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Fetch the results page through WebDriver and extract it
    pub async fn run(self) -> Result<Extraction> {
        let mut config = self.config.clone().apply_env();
        if let Some(webdriver_url) = &self.webdriver_url {
            config.webdriver_url = webdriver_url.clone();
        }

        let mut source = WebDriverSource::new(config);
        let outcome = self.run_with(&mut source).await;

        if let Err(e) = source.close().await {
            ::log::warn!("Failed to close WebDriver session: {}", e);
        }
        outcome
    }

    /// Fetch the results page from `source` and extract it
    pub async fn run_with<S: MarkupSource>(&self, source: &mut S) -> Result<Extraction> {
        ::log::info!("Searching for: {}", self.query);
        let raw = source.fetch(&self.query).await?;
        self.extract(&raw)
    }

    /// Extract results from markup already in hand
    pub fn extract(&self, raw: &str) -> Result<Extraction> {
        let base = self.config.base_url()?;
        page::extract_page(raw, &self.config.selectors, &base)
    }
}
