//! UniFFI bindings for recipe-intake
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! Everything is synchronous; the URL import manages its own tokio runtime.

use std::fmt;
use std::time::Duration;

use crate::{ClassifiedLine, ImportError, LineClassification, ParsedRecipe, ScannedRecipe};

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible web recipe
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiParsedRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub directions: Vec<String>,
    pub source_url: String,
    /// Empty string if the page has no image
    pub image_url: String,
    /// Seconds
    pub prep_duration: u64,
    /// Seconds
    pub cook_duration: u64,
    pub notes: String,
}

impl From<ParsedRecipe> for FfiParsedRecipe {
    fn from(recipe: ParsedRecipe) -> Self {
        FfiParsedRecipe {
            title: recipe.title,
            ingredients: recipe.ingredients,
            directions: recipe.directions,
            source_url: recipe.source_url,
            image_url: recipe.image_url.unwrap_or_default(),
            prep_duration: recipe.prep_duration,
            cook_duration: recipe.cook_duration,
            notes: recipe.notes,
        }
    }
}

/// FFI-compatible line classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiLineClassification {
    Title,
    Ingredient,
    Direction,
    Note,
    Skip,
}

impl From<LineClassification> for FfiLineClassification {
    fn from(classification: LineClassification) -> Self {
        match classification {
            LineClassification::Title => FfiLineClassification::Title,
            LineClassification::Ingredient => FfiLineClassification::Ingredient,
            LineClassification::Direction => FfiLineClassification::Direction,
            LineClassification::Note => FfiLineClassification::Note,
            LineClassification::Skip => FfiLineClassification::Skip,
        }
    }
}

impl From<FfiLineClassification> for LineClassification {
    fn from(classification: FfiLineClassification) -> Self {
        match classification {
            FfiLineClassification::Title => LineClassification::Title,
            FfiLineClassification::Ingredient => LineClassification::Ingredient,
            FfiLineClassification::Direction => LineClassification::Direction,
            FfiLineClassification::Note => LineClassification::Note,
            FfiLineClassification::Skip => LineClassification::Skip,
        }
    }
}

/// FFI-compatible classified line
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiClassifiedLine {
    pub text: String,
    pub classification: FfiLineClassification,
}

impl From<ClassifiedLine> for FfiClassifiedLine {
    fn from(line: ClassifiedLine) -> Self {
        FfiClassifiedLine {
            text: line.text,
            classification: line.classification.into(),
        }
    }
}

impl From<FfiClassifiedLine> for ClassifiedLine {
    fn from(line: FfiClassifiedLine) -> Self {
        ClassifiedLine::new(line.text, line.classification.into())
    }
}

/// FFI-compatible scanned recipe
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiScannedRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub directions: Vec<String>,
    pub notes: String,
}

impl From<ScannedRecipe> for FfiScannedRecipe {
    fn from(recipe: ScannedRecipe) -> Self {
        FfiScannedRecipe {
            title: recipe.title,
            ingredients: recipe.ingredients,
            directions: recipe.directions,
            notes: recipe.notes,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiImportError {
    /// Failed to fetch recipe from URL
    FetchError { message: String },
    /// The page has no usable recipe
    NoRecipeFound { message: String },
    /// Invalid input provided
    InvalidInput { message: String },
    /// Configuration error
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiImportError::FetchError { message } => write!(f, "Fetch error: {}", message),
            FfiImportError::NoRecipeFound { message } => {
                write!(f, "No recipe found: {}", message)
            }
            FfiImportError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            FfiImportError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiImportError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiImportError {}

impl From<ImportError> for FfiImportError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::FetchError(e) => FfiImportError::FetchError {
                message: e.to_string(),
            },
            ImportError::NoRecipeFound => FfiImportError::NoRecipeFound {
                message: ImportError::NoRecipeFound.to_string(),
            },
            ImportError::InvalidInput(msg) | ImportError::BuilderError(msg) => {
                FfiImportError::InvalidInput { message: msg }
            }
            ImportError::IoError(e) => FfiImportError::InvalidInput {
                message: e.to_string(),
            },
            ImportError::JsonError(e) => FfiImportError::InvalidInput {
                message: e.to_string(),
            },
            ImportError::ConfigError(e) => FfiImportError::ConfigError {
                message: e.to_string(),
            },
        }
    }
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiImportError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiImportError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

/// Extract a recipe from HTML the host app already downloaded
///
/// # Arguments
/// * `html` - The page HTML
/// * `source_url` - The URL the page came from
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn extract_recipe_from_html(
    html: String,
    source_url: String,
) -> Result<FfiParsedRecipe, FfiImportError> {
    let recipe = crate::extract_recipe(&html, &source_url)?;
    Ok(recipe.into())
}

/// Fetch a recipe page and extract its recipe
///
/// # Arguments
/// * `url` - The URL of the recipe webpage
/// * `timeout_seconds` - Optional timeout in seconds
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn extract_recipe_from_url(
    url: String,
    timeout_seconds: Option<u64>,
) -> Result<FfiParsedRecipe, FfiImportError> {
    let rt = create_runtime()?;
    rt.block_on(async {
        let timeout = timeout_seconds.map(Duration::from_secs);
        let recipe = crate::fetch_recipe_with_timeout(&url, timeout).await?;
        Ok(recipe.into())
    })
}

/// Classify reading-order text from the platform OCR engine
///
/// The host shows the result for review before calling
/// [`build_scanned_recipe`].
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn classify_scanned_text(text: String) -> Vec<FfiClassifiedLine> {
    crate::pipelines::scan::classify_text(&text)
        .into_iter()
        .map(Into::into)
        .collect()
}

/// Build a recipe from reviewed lines
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn build_scanned_recipe(lines: Vec<FfiClassifiedLine>) -> FfiScannedRecipe {
    let lines: Vec<ClassifiedLine> = lines.into_iter().map(Into::into).collect();
    crate::pipelines::scan::assemble(&lines).into()
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
