use crate::model::ParsedRecipe;
use scraper::Html;

mod directions;
mod json_ld;
mod meta_tags;

pub use directions::scrape_directions;
pub use json_ld::{parse_recipe, JsonLdExtractor};
pub use meta_tags::{parse_meta_tags, MetaTagExtractor};

pub struct ParsingContext {
    pub url: String,
    pub document: Html,
}

impl ParsingContext {
    pub fn new(html: &str, url: &str) -> Self {
        Self {
            url: url.to_string(),
            document: Html::parse_document(html),
        }
    }
}

/// A single tier of HTML recipe extraction.
///
/// `None` means "nothing here", so the caller moves on to the next tier.
pub trait Extractor {
    fn name(&self) -> &'static str;
    fn parse(&self, context: &ParsingContext) -> Option<ParsedRecipe>;
}

/// Looks up an extractor by its configuration name.
pub fn extractor_by_name(name: &str) -> Option<Box<dyn Extractor>> {
    match name {
        "json_ld" => Some(Box::new(JsonLdExtractor)),
        "meta_tags" => Some(Box::new(MetaTagExtractor)),
        _ => None,
    }
}
