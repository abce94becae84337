pub mod file;
pub mod webdriver;

use crate::error::Result;

/// Something that can produce the raw markup of a results page for a query
#[allow(async_fn_in_trait)]
pub trait MarkupSource {
    /// Fetch the results page for `query`
    async fn fetch(&mut self, query: &str) -> Result<String>;

    /// Release whatever the source holds open
    async fn close(self) -> Result<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}
