use crate::error::Result;
use crate::sources::MarkupSource;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

/// Reads a previously saved results page; `-` means standard input.
///
/// The query is ignored since the page was already rendered for one.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MarkupSource for FileSource {
    async fn fetch(&mut self, query: &str) -> Result<String> {
        if self.path.as_os_str() == "-" {
            ::log::info!("Reading results page for '{}' from stdin", query);
            let mut markup = String::new();
            tokio::io::stdin().read_to_string(&mut markup).await?;
            return Ok(markup);
        }

        ::log::info!(
            "Reading results page for '{}' from {}",
            query,
            self.path.display()
        );
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}
