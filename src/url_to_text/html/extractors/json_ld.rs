use super::directions::scrape_document;
use super::{Extractor, ParsingContext};
use crate::duration::parse_iso8601_duration;
use crate::model::ParsedRecipe;
use crate::normalize::strip_html;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

static SCRIPT_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("script[type]").unwrap());

static BLOCK_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</(?:p|li|div|br)\s*/?>|<br\s*/?>").unwrap());

pub struct JsonLdExtractor;

/// Extracts a schema.org `Recipe` from the page's JSON-LD blocks.
///
/// Returns `None` when no block describes a recipe with a usable name, so the
/// caller can fall back to [`super::parse_meta_tags`].
pub fn parse_recipe(html: &str, source_url: &str) -> Option<ParsedRecipe> {
    JsonLdExtractor.parse(&ParsingContext::new(html, source_url))
}

impl JsonLdExtractor {
    fn find_recipe_json(&self, document: &Html) -> Option<Value> {
        let scripts: Vec<_> = document
            .select(&SCRIPT_SELECTOR)
            .filter(|script| {
                script
                    .value()
                    .attr("type")
                    .is_some_and(|t| t.trim().eq_ignore_ascii_case("application/ld+json"))
            })
            .collect();
        debug!(
            "JsonLdExtractor: Found {} JSON-LD script tags",
            scripts.len()
        );

        for (index, script) in scripts.iter().enumerate() {
            let raw_json = script.text().collect::<String>();
            let json_ld = match serde_json::from_str::<Value>(raw_json.trim()) {
                Ok(json_ld) => json_ld,
                Err(e) => {
                    debug!("JsonLdExtractor: Failed to parse JSON-LD {}: {}", index, e);
                    continue;
                }
            };

            if let Some(recipe) = recipe_candidates(&json_ld)
                .into_iter()
                .find(|candidate| is_recipe_type(candidate))
            {
                debug!("JsonLdExtractor: Found Recipe in script {}", index);
                return Some(recipe.clone());
            }
            debug!("JsonLdExtractor: No recipe found in script {}", index);
        }

        None
    }

    fn convert_to_recipe(&self, json_ld_recipe: JsonLdRecipe, url: &str) -> Option<ParsedRecipe> {
        let title = json_ld_recipe
            .name
            .as_ref()
            .and_then(Value::as_str)
            .map(strip_html)
            .unwrap_or_default();
        if title.is_empty() {
            debug!("JsonLdExtractor: Recipe has no usable name");
            return None;
        }

        let ingredients = match json_ld_recipe.recipe_ingredient {
            Some(RecipeIngredients::Single(ingredient)) => vec![strip_html(&ingredient)],
            Some(RecipeIngredients::Multiple(entries)) => entries
                .into_iter()
                .filter_map(|entry| match entry {
                    IngredientEntry::Text(text) => Some(strip_html(&text)),
                    IngredientEntry::Object(ingredient) => {
                        let name = strip_html(&ingredient.name);
                        let amount = ingredient
                            .amount
                            .as_ref()
                            .and_then(scalar_to_string)
                            .unwrap_or_default();
                        if amount.trim().is_empty() {
                            Some(name)
                        } else {
                            Some(format!("{} {name}", amount.trim()))
                        }
                    }
                    IngredientEntry::Other(_) => None,
                })
                .collect(),
            Some(RecipeIngredients::Other(_)) | None => Vec::new(),
        };

        let directions: Vec<String> = match json_ld_recipe.recipe_instructions {
            Some(RecipeInstructions::Text(text)) => split_instruction_text(&text),
            Some(RecipeInstructions::Steps(entries)) => {
                let mut steps = Vec::new();
                collect_entries(entries, &mut steps);
                steps
            }
            Some(RecipeInstructions::Other(_)) | None => Vec::new(),
        }
        .iter()
        .map(|step| strip_html(step))
        .filter(|step| !step.is_empty())
        .collect();

        let image_url = json_ld_recipe
            .image
            .and_then(ImageType::into_first_url)
            .map(|url| strip_html(&url))
            .filter(|url| !url.is_empty());

        let notes = match json_ld_recipe.description {
            Some(DescriptionType::String(d)) => strip_html(&d),
            Some(DescriptionType::Object(d)) => strip_html(&d.text),
            Some(DescriptionType::Other(_)) | None => String::new(),
        };

        Some(ParsedRecipe {
            title,
            ingredients,
            directions,
            source_url: url.to_string(),
            image_url,
            prep_duration: parse_iso8601_duration(
                json_ld_recipe.prep_time.as_ref().and_then(Value::as_str),
            ),
            cook_duration: parse_iso8601_duration(
                json_ld_recipe.cook_time.as_ref().and_then(Value::as_str),
            ),
            notes,
        })
    }
}

impl Extractor for JsonLdExtractor {
    fn name(&self) -> &'static str {
        "json_ld"
    }

    fn parse(&self, context: &ParsingContext) -> Option<ParsedRecipe> {
        debug!("JsonLdExtractor: Starting parse for URL: {}", context.url);
        let recipe_json = self.find_recipe_json(&context.document)?;

        let json_ld_recipe = match JsonLdRecipe::try_from(&recipe_json) {
            Ok(recipe) => recipe,
            Err(e) => {
                debug!("JsonLdExtractor: Failed to convert to JsonLdRecipe: {}", e);
                return None;
            }
        };
        let mut recipe = self.convert_to_recipe(json_ld_recipe, &context.url)?;

        // Some sites publish a truncated instruction list in their structured
        // data; the longer list wins, even if it is the noisier one.
        let scraped = scrape_document(&context.document);
        if scraped.len() > recipe.directions.len() {
            debug!(
                "JsonLdExtractor: JSON-LD had {} step(s), HTML fallback found {}. Using HTML.",
                recipe.directions.len(),
                scraped.len()
            );
            recipe.directions = scraped;
        }

        Some(recipe)
    }
}

/// The value itself, each element of a top-level array, and the `@graph`
/// members of either, in document order.
fn recipe_candidates(json_ld: &Value) -> Vec<&Value> {
    let roots: Vec<&Value> = match json_ld {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };

    let mut candidates = Vec::new();
    for root in roots {
        candidates.push(root);
        if let Some(graph) = root.get("@graph").and_then(Value::as_array) {
            candidates.extend(graph.iter());
        }
    }
    candidates
}

fn is_recipe_type(value: &Value) -> bool {
    match value.get("@type") {
        Some(Value::String(type_str)) => type_str.eq_ignore_ascii_case("recipe"),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .any(|t| t.eq_ignore_ascii_case("recipe")),
        _ => false,
    }
}

fn split_instruction_text(text: &str) -> Vec<String> {
    let with_breaks = BLOCK_BREAK_RE.replace_all(text, "\n");
    strip_html(&with_breaks)
        .lines()
        .map(strip_html)
        .filter(|line| !line.is_empty())
        .collect()
}

fn collect_entries(entries: Vec<InstructionEntry>, steps: &mut Vec<String>) {
    for entry in entries {
        match entry {
            InstructionEntry::Text(text) => steps.push(text),
            InstructionEntry::Nested(entries) => collect_entries(entries, steps),
            InstructionEntry::Step(step) => step.collect_into(steps),
            InstructionEntry::Other(_) => {}
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct JsonLdRecipe {
    name: Option<Value>,
    description: Option<DescriptionType>,
    image: Option<ImageType>,
    #[serde(rename = "recipeIngredient")]
    recipe_ingredient: Option<RecipeIngredients>,
    #[serde(rename = "recipeInstructions")]
    recipe_instructions: Option<RecipeInstructions>,
    #[serde(rename = "prepTime")]
    prep_time: Option<Value>,
    #[serde(rename = "cookTime")]
    cook_time: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ImageObject {
    url: String,
}

#[derive(Debug, Deserialize)]
struct TextObject {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DescriptionType {
    String(String),
    Object(TextObject),
    Other(IgnoredAny),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ImageType {
    String(String),
    Multiple(Vec<ImageType>),
    Object(ImageObject),
    Other(IgnoredAny),
}

impl ImageType {
    fn into_first_url(self) -> Option<String> {
        match self {
            ImageType::String(url) => Some(url),
            ImageType::Object(image) => Some(image.url),
            ImageType::Multiple(images) => match images.into_iter().next()? {
                ImageType::String(url) => Some(url),
                ImageType::Object(image) => Some(image.url),
                _ => None,
            },
            ImageType::Other(_) => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecipeIngredients {
    Single(String),
    Multiple(Vec<IngredientEntry>),
    Other(IgnoredAny),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IngredientEntry {
    Text(String),
    Object(IngredientObject),
    Other(IgnoredAny),
}

#[derive(Debug, Deserialize)]
struct IngredientObject {
    name: String,
    amount: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecipeInstructions {
    Text(String),
    Steps(Vec<InstructionEntry>),
    Other(IgnoredAny),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InstructionEntry {
    Text(String),
    Nested(Vec<InstructionEntry>),
    Step(HowToStep),
    Other(IgnoredAny),
}

impl InstructionEntry {
    fn text_or_name(self) -> Option<String> {
        match self {
            InstructionEntry::Text(text) => non_empty(Some(text)),
            InstructionEntry::Step(step) => non_empty(step.text).or_else(|| non_empty(step.name)),
            InstructionEntry::Nested(_) | InstructionEntry::Other(_) => None,
        }
    }
}

/// A `HowToStep` or `HowToSection`; both shapes share these fields.
///
/// Fields of an unexpected shape read as absent, so one odd sibling field
/// never costs the step its usable text.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HowToStep {
    #[serde(rename = "@type")]
    schema_type: Option<Value>,
    #[serde(deserialize_with = "lenient_string")]
    text: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    name: Option<String>,
    #[serde(rename = "itemListElement", deserialize_with = "lenient_entries")]
    item_list_element: Option<Vec<InstructionEntry>>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        _ => None,
    })
}

/// An array of entries, or a single object standing in for a one-item list.
fn lenient_entries<'de, D>(deserializer: D) -> Result<Option<Vec<InstructionEntry>>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = match Value::deserialize(deserializer)? {
        Value::Array(values) => values,
        object @ Value::Object(_) => vec![object],
        _ => return Ok(None),
    };

    Ok(Some(
        values
            .into_iter()
            .filter_map(|value| serde_json::from_value(value).ok())
            .collect(),
    ))
}

impl HowToStep {
    fn is_section(&self) -> bool {
        match &self.schema_type {
            Some(Value::String(t)) => t == "HowToSection",
            Some(Value::Array(types)) => types.iter().any(|t| t == "HowToSection"),
            _ => false,
        }
    }

    fn collect_into(self, steps: &mut Vec<String>) {
        if self.is_section() {
            steps.extend(
                self.item_list_element
                    .unwrap_or_default()
                    .into_iter()
                    .filter_map(InstructionEntry::text_or_name),
            );
            return;
        }

        if let Some(text) = non_empty(self.text) {
            steps.push(text);
        } else if let Some(children) = self.item_list_element.filter(|c| !c.is_empty()) {
            steps.extend(children.into_iter().filter_map(InstructionEntry::text_or_name));
        } else if let Some(name) = non_empty(self.name) {
            steps.push(name);
        }
    }
}

impl TryFrom<&Value> for JsonLdRecipe {
    type Error = serde_json::Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value.clone())
    }
}
