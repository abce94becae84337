use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "serp-yield")]
#[command(about = "Extracts headline, link and description from search result pages")]
#[command(version)]
pub struct Args {
    /// Search query
    pub query: String,

    /// Read the results page from a saved file (`-` for stdin) instead of WebDriver
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// WebDriver URL (overrides the configuration and WEBDRIVER_URL)
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Save the JSON results to this file instead of printing them
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write an HTML preview of the kept results to this file
    #[arg(short, long)]
    pub preview: Option<PathBuf>,
}
