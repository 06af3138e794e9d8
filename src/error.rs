use thiserror::Error;

/// Errors that can occur during recipe intake operations
#[derive(Error, Debug)]
pub enum ImportError {
    /// Failed to fetch the recipe page
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The page or scan produced no usable recipe
    #[error("Could not find recipe data")]
    NoRecipeFound,

    /// Input was empty or otherwise unusable
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Failed to read an input file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to read or write reviewed lines / recipe JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
