use super::html::extract_recipe_with_config;
use crate::config::IntakeConfig;
use crate::error::ImportError;
use crate::model::ParsedRecipe;
use crate::url_to_text::fetchers::{Fetcher, RequestFetcher};
use log::warn;
use std::time::Duration;

/// Fetches a recipe page and extracts its recipe.
///
/// Settings come from `config.toml` and `RECIPE_INTAKE__*` variables.
pub async fn fetch_recipe(url: &str) -> Result<ParsedRecipe, ImportError> {
    fetch_recipe_with_timeout(url, None).await
}

/// Like [`fetch_recipe`], overriding the configured request timeout.
pub async fn fetch_recipe_with_timeout(
    url: &str,
    timeout: Option<Duration>,
) -> Result<ParsedRecipe, ImportError> {
    let config = IntakeConfig::load()?;
    fetch_recipe_with_config(url, &config, timeout).await
}

pub async fn fetch_recipe_with_config(
    url: &str,
    config: &IntakeConfig,
    timeout: Option<Duration>,
) -> Result<ParsedRecipe, ImportError> {
    let fetcher = RequestFetcher::new(&config.fetch, timeout)?;
    fetch_recipe_with_fetcher(url, &fetcher, config).await
}

/// Runs the URL pipeline over any [`Fetcher`].
pub async fn fetch_recipe_with_fetcher(
    url: &str,
    fetcher: &dyn Fetcher,
    config: &IntakeConfig,
) -> Result<ParsedRecipe, ImportError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ImportError::InvalidInput("URL cannot be empty".to_string()));
    }

    let html = fetcher.fetch(url).await.inspect_err(|e| {
        warn!("Failed to fetch {}: {}", url, e);
    })?;

    extract_recipe_with_config(&html, url, &config.extractors)
}
