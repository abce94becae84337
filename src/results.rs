use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One search result: what the headline says, where it points and what it is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Text of the result's headline
    pub headline: String,

    /// Absolute destination of the main link, redirect wrapper removed
    pub link: String,

    /// Text of the located description
    pub description: String,
}

impl ResultRecord {
    /// Builds a record only when all three fields are present
    pub fn new(
        headline: Option<String>,
        link: Option<String>,
        description: Option<String>,
    ) -> Option<Self> {
        Some(Self {
            headline: headline?,
            link: link?,
            description: description?,
        })
    }
}

/// Ordered results of one extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultCollection {
    pub results: Vec<ResultRecord>,
}

impl ResultCollection {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn push(&mut self, record: ResultRecord) {
        self.results.push(record);
    }

    /// Pretty JSON with two-space indentation, `{"results": [...]}`
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the pretty JSON to `path`
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_json_pretty()?)?;
        ::log::info!(
            "Saved {} result(s) to {}",
            self.len(),
            path.as_ref().display()
        );
        Ok(())
    }
}
