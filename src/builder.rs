use std::time::Duration;

use crate::config::IntakeConfig;
use crate::images_to_text::RecognizedObservation;
use crate::model::{ClassifiedLine, ParsedRecipe};
use crate::pipelines::{html, scan, url};
use crate::ImportError;

/// Represents the input source for a recipe
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Fetch the page at this URL
    Url(String),
    /// Already-fetched page HTML and the URL it came from
    Html { html: String, source_url: String },
    /// Reading-order text from a scan
    ScannedText(String),
    /// Raw OCR observations, ordered before classification
    Observations(Vec<RecognizedObservation>),
}

/// Result of a recipe import operation
#[derive(Debug, Clone)]
pub enum ImportResult {
    /// Recipe extracted from a web page
    Recipe(ParsedRecipe),
    /// Classified scan lines, ready for review and
    /// [`build_recipe`](crate::build_recipe)
    Lines(Vec<ClassifiedLine>),
}

/// Builder for configuring and executing recipe imports
#[derive(Debug, Default)]
pub struct RecipeImporterBuilder {
    source: Option<InputSource>,
    timeout: Option<Duration>,
    config: Option<IntakeConfig>,
}

impl RecipeImporterBuilder {
    /// Set the input source to a URL
    ///
    /// # Example
    /// ```
    /// use recipe_intake::RecipeImporter;
    ///
    /// let builder = RecipeImporter::builder()
    ///     .url("https://example.com/recipe");
    /// ```
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.source = Some(InputSource::Url(url.into()));
        self
    }

    /// Set the input source to page HTML that was fetched elsewhere
    ///
    /// # Example
    /// ```
    /// use recipe_intake::RecipeImporter;
    ///
    /// let builder = RecipeImporter::builder()
    ///     .html("<html>...</html>", "https://example.com/recipe");
    /// ```
    pub fn html(mut self, html: impl Into<String>, source_url: impl Into<String>) -> Self {
        self.source = Some(InputSource::Html {
            html: html.into(),
            source_url: source_url.into(),
        });
        self
    }

    /// Set the input source to scanned text, one recognized line per line
    pub fn scanned_text(mut self, text: impl Into<String>) -> Self {
        self.source = Some(InputSource::ScannedText(text.into()));
        self
    }

    /// Set the input source to OCR observations
    pub fn observations(mut self, observations: Vec<RecognizedObservation>) -> Self {
        self.source = Some(InputSource::Observations(observations));
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use recipe_intake::RecipeImporter;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeImporter::builder()
    ///     .url("https://example.com/recipe")
    ///     .timeout(Duration::from_secs(30));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Use this configuration instead of loading `config.toml` and the
    /// environment
    pub fn config(mut self, config: IntakeConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build and execute the recipe import operation
    ///
    /// # Errors
    /// Returns `ImportError` if:
    /// - No input source was specified
    /// - The input is empty
    /// - URL fetch fails
    /// - No recipe could be found in the page
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_intake::RecipeImporter;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let result = RecipeImporter::builder()
    ///     .url("https://example.com/recipe")
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<ImportResult, ImportError> {
        let source = self.source.ok_or_else(|| {
            ImportError::BuilderError(
                "No input source specified. Use .url(), .html(), .scanned_text() or .observations()"
                    .to_string(),
            )
        })?;

        let config = match self.config {
            Some(config) => config,
            None => IntakeConfig::load()?,
        };

        match source {
            InputSource::Url(target) => {
                let recipe = url::fetch_recipe_with_config(&target, &config, self.timeout).await?;
                Ok(ImportResult::Recipe(recipe))
            }
            InputSource::Html {
                html: page,
                source_url,
            } => {
                if page.trim().is_empty() {
                    return Err(ImportError::InvalidInput("HTML cannot be empty".to_string()));
                }
                let recipe = html::extract_recipe_with_config(&page, &source_url, &config.extractors)?;
                Ok(ImportResult::Recipe(recipe))
            }
            InputSource::ScannedText(text) => {
                if text.trim().is_empty() {
                    return Err(ImportError::InvalidInput(
                        "Scanned text cannot be empty".to_string(),
                    ));
                }
                Ok(ImportResult::Lines(scan::classify_text(&text)))
            }
            InputSource::Observations(observations) => {
                if observations.is_empty() {
                    return Err(ImportError::InvalidInput(
                        "No text detected in scan".to_string(),
                    ));
                }
                Ok(ImportResult::Lines(scan::classify_observations(
                    &observations,
                )))
            }
        }
    }
}

/// Main entry point for the builder API
pub struct RecipeImporter;

impl RecipeImporter {
    /// Creates a new builder for importing recipes
    ///
    /// # Example
    /// ```
    /// use recipe_intake::RecipeImporter;
    ///
    /// let builder = RecipeImporter::builder();
    /// ```
    pub fn builder() -> RecipeImporterBuilder {
        RecipeImporterBuilder::default()
    }
}
