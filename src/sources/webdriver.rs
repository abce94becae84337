use crate::config::ScraperConfig;
use crate::error::{ExtractError, Result};
use crate::sources::MarkupSource;
use fantoccini::{Client, ClientBuilder};
use tokio::time::{Duration, timeout};

/// Common WebDriver endpoints tried when the configured one refuses
const FALLBACK_WEBDRIVER_URLS: [&str; 4] = [
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4723", // Appium default
    "http://localhost:9222", // Chrome debug port default
    "http://127.0.0.1:4444", // Try with IP instead of localhost
];

/// Renders search pages in a real browser through a WebDriver server.
///
/// The session is opened on the first fetch and reused afterwards.
pub struct WebDriverSource {
    config: ScraperConfig,
    client: Option<Client>,
}

impl WebDriverSource {
    pub fn new(config: ScraperConfig) -> Self {
        Self {
            config,
            client: None,
        }
    }

    async fn client(&mut self) -> Result<&mut Client> {
        if self.client.is_none() {
            ::log::debug!("Connecting to WebDriver");
            self.client = Some(connect_to_webdriver(&self.config.webdriver_url).await?);
        }
        self.client.as_mut().ok_or(ExtractError::WebDriverUnavailable)
    }

    /// Navigates and reads the source, reconnecting once if the session was lost
    async fn load(&mut self, url: &str) -> Result<String> {
        let webdriver_url = self.config.webdriver_url.clone();

        for attempt in 0..2 {
            if attempt > 0 {
                let client = self.client().await?;
                attempt_reconnect(client, &webdriver_url).await?;
            }

            let client = self.client().await?;
            match load_source(client, url).await {
                Ok(source) => return Ok(source),
                Err(e) if is_session_lost(&e) && attempt == 0 => {
                    ::log::warn!("Lost session while loading {}", url);
                }
                Err(e) => return Err(ExtractError::Navigation(e.to_string())),
            }
        }

        Err(ExtractError::Navigation(format!("session lost twice loading {url}")))
    }
}

impl MarkupSource for WebDriverSource {
    async fn fetch(&mut self, query: &str) -> Result<String> {
        let url = self.config.search_url_for(query)?;
        let secs = self.config.fetch_timeout_secs;
        ::log::info!("Fetching results page: {}", url);

        let started = std::time::Instant::now();
        let source = match timeout(Duration::from_secs(secs), self.load(url.as_str())).await {
            Ok(result) => result?,
            Err(_) => {
                ::log::error!("Timeout fetching: {}", url);
                return Err(ExtractError::Timeout { secs });
            }
        };

        ::log::debug!(
            "Fetched {} bytes in {:.2} seconds",
            source.len(),
            started.elapsed().as_secs_f64()
        );
        Ok(source)
    }

    async fn close(self) -> Result<()> {
        if let Some(client) = self.client {
            client
                .close()
                .await
                .map_err(|e| ExtractError::Navigation(e.to_string()))?;
            ::log::debug!("Closed WebDriver session");
        }
        Ok(())
    }
}

async fn load_source(
    client: &Client,
    url: &str,
) -> std::result::Result<String, fantoccini::error::CmdError> {
    client.goto(url).await?;
    client.source().await
}

fn is_session_lost(error: &fantoccini::error::CmdError) -> bool {
    error.to_string().contains("Unable to find session")
}

/// Connects to the WebDriver instance, falling back to well-known ports
async fn connect_to_webdriver(webdriver_url: &str) -> Result<Client> {
    match ClientBuilder::native().connect(webdriver_url).await {
        Ok(client) => {
            ::log::debug!("Connected to WebDriver at {}", webdriver_url);
            return Ok(client);
        }
        Err(e) => {
            ::log::error!(
                "Failed to connect to WebDriver at {}: {}",
                webdriver_url,
                e
            );
        }
    }

    for url in FALLBACK_WEBDRIVER_URLS.iter() {
        if *url == webdriver_url {
            continue;
        }

        ::log::info!("Trying fallback WebDriver URL: {}", url);
        if let Ok(client) = ClientBuilder::native().connect(url).await {
            ::log::debug!("Connected to fallback WebDriver at {}", url);
            return Ok(client);
        }
    }

    ::log::error!(
        "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
    );
    Err(ExtractError::WebDriverUnavailable)
}

/// Replaces the client with a fresh session
async fn attempt_reconnect(client: &mut Client, webdriver_url: &str) -> Result<()> {
    ::log::warn!("Attempting to reconnect WebDriver session");
    match ClientBuilder::native().connect(webdriver_url).await {
        Ok(new_client) => {
            *client = new_client;
            ::log::info!("Successfully reconnected to WebDriver");
            Ok(())
        }
        Err(e) => {
            ::log::error!("Failed to reconnect to WebDriver: {}", e);
            Err(ExtractError::WebDriverUnavailable)
        }
    }
}
