//! Recipe intake: structured recipes from web pages, and classified lines
//! from scanned recipe cards.
//!
//! Web pages go through [`extract_recipe`] (or [`fetch_recipe`] to download
//! them first). Scans go through [`classify_lines`], a review step in the
//! host app, then [`build_recipe`].

pub mod builder;
pub mod config;
pub mod duration;
pub mod error;
pub mod images_to_text;
pub mod model;
pub mod normalize;
pub mod pipelines;
pub mod uniffi_bindings;
pub mod url_to_text;

pub use builder::{ImportResult, InputSource, RecipeImporter, RecipeImporterBuilder};
pub use config::IntakeConfig;
pub use duration::parse_iso8601_duration;
pub use error::ImportError;
pub use images_to_text::{
    build_recipe, classify_lines, reading_order_text, BoundingBox, RecognizedCandidate,
    RecognizedObservation,
};
pub use model::{ClassifiedLine, LineClassification, ParsedRecipe, ScannedRecipe};
pub use normalize::strip_html;
pub use pipelines::html::extract_recipe;
pub use pipelines::url::{fetch_recipe, fetch_recipe_with_timeout};
pub use url_to_text::html::extractors::{parse_meta_tags, parse_recipe, scrape_directions};
