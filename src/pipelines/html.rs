use crate::config::ExtractorsConfig;
use crate::error::ImportError;
use crate::model::ParsedRecipe;
use crate::url_to_text::html::extractors::{extractor_by_name, ParsingContext};
use log::{debug, info, warn};

/// Extracts a recipe from page HTML using the default extractor order.
pub fn extract_recipe(html: &str, source_url: &str) -> Result<ParsedRecipe, ImportError> {
    extract_recipe_with_config(html, source_url, &ExtractorsConfig::default())
}

/// Runs the configured extractors in order; the first one that finds a
/// recipe wins.
pub fn extract_recipe_with_config(
    html: &str,
    source_url: &str,
    config: &ExtractorsConfig,
) -> Result<ParsedRecipe, ImportError> {
    let context = ParsingContext::new(html, source_url);

    for name in &config.order {
        let Some(extractor) = extractor_by_name(name) else {
            warn!("Unknown extractor {:?} in configuration, skipping", name);
            continue;
        };

        match extractor.parse(&context) {
            Some(recipe) => {
                info!(
                    "Extracted {:?} from {} with {}",
                    recipe.title,
                    source_url,
                    extractor.name()
                );
                return Ok(recipe);
            }
            None => debug!("{} found nothing in {}", extractor.name(), source_url),
        }
    }

    Err(ImportError::NoRecipeFound)
}
