use crate::error::ImportError;

mod request;

pub use request::RequestFetcher;

/// Retrieves the HTML for a recipe page.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, ImportError>;
}
