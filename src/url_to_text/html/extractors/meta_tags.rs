use super::{Extractor, ParsingContext};
use crate::model::ParsedRecipe;
use crate::normalize::strip_html;
use log::debug;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static META_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("meta[content]").unwrap());
static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());

/// Last-resort extractor: page title and preview image from Open Graph tags.
pub struct MetaTagExtractor;

/// Builds a title-only recipe from `og:title` (or `<title>`) and `og:image`.
pub fn parse_meta_tags(html: &str, source_url: &str) -> Option<ParsedRecipe> {
    MetaTagExtractor.parse(&ParsingContext::new(html, source_url))
}

fn open_graph_content(document: &Html, property: &str) -> Option<String> {
    document
        .select(&META_SELECTOR)
        .filter(|meta| {
            let element = meta.value();
            [element.attr("property"), element.attr("name")]
                .into_iter()
                .flatten()
                .any(|key| key.trim().eq_ignore_ascii_case(property))
        })
        .filter_map(|meta| meta.value().attr("content"))
        .map(strip_html)
        .find(|content| !content.is_empty())
}

fn title_tag(document: &Html) -> Option<String> {
    document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|title| strip_html(&title.inner_html()))
        .filter(|title| !title.is_empty())
}

impl Extractor for MetaTagExtractor {
    fn name(&self) -> &'static str {
        "meta_tags"
    }

    fn parse(&self, context: &ParsingContext) -> Option<ParsedRecipe> {
        debug!("MetaTagExtractor: Starting parse for URL: {}", context.url);

        let title = open_graph_content(&context.document, "og:title")
            .or_else(|| title_tag(&context.document))?;
        let image_url = open_graph_content(&context.document, "og:image");
        debug!(
            "MetaTagExtractor: title {:?}, image {:?}",
            title, image_url
        );

        Some(ParsedRecipe {
            title,
            source_url: context.url.clone(),
            image_url,
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_og_tags_in_either_attribute_order() {
        let html = r#"
            <html><head>
              <title>Ignored | Example Kitchen</title>
              <meta content="Weeknight Dal &amp; Rice" property="og:title">
              <meta property="og:image" content="https://example.com/dal.jpg">
            </head><body></body></html>
        "#;
        let recipe = parse_meta_tags(html, "https://example.com/dal").unwrap();
        assert_eq!(recipe.title, "Weeknight Dal & Rice");
        assert_eq!(recipe.image_url.as_deref(), Some("https://example.com/dal.jpg"));
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.directions.is_empty());
        assert_eq!(recipe.prep_duration, 0);
        assert_eq!(recipe.cook_duration, 0);
    }

    #[test]
    fn test_title_tag_fallback() {
        let html = "<html><head><title> Grandma&#39;s Pie </title></head></html>";
        let recipe = parse_meta_tags(html, "https://example.com/pie").unwrap();
        assert_eq!(recipe.title, "Grandma's Pie");
        assert_eq!(recipe.image_url, None);
        assert_eq!(recipe.source_url, "https://example.com/pie");
    }

    #[test]
    fn test_no_title_is_none() {
        let html = r#"<html><head><meta property="og:title" content="  "></head></html>"#;
        assert!(parse_meta_tags(html, "https://example.com").is_none());
    }
}
