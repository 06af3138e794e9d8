use super::Fetcher;
use crate::config::FetchConfig;
use crate::error::ImportError;
use log::debug;
use reqwest::Client;
use std::time::Duration;

pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(config: &FetchConfig, timeout: Option<Duration>) -> Result<Self, ImportError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(config.timeout));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Fetcher for RequestFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ImportError> {
        debug!("RequestFetcher: GET {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let html = response.text().await?;
        debug!("RequestFetcher: {} bytes from {}", html.len(), url);
        Ok(html)
    }
}
