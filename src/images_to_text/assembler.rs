use super::classifier::{strip_bullet, strip_step_prefix};
use crate::model::{ClassifiedLine, LineClassification, ScannedRecipe};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_TITLE: &str = "Scanned Recipe";

/// A direction line starting with this opens a new step; anything else
/// continues the step before it.
static STEP_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*(?:step\s*)?\d+[.):\s]").unwrap());

/// Rebuilds a recipe from reviewed lines.
///
/// Direction lines wrapped by the scanner are merged back into paragraphs:
/// a paragraph ends at the next step marker or at any non-direction line.
pub fn build_recipe(lines: &[ClassifiedLine]) -> ScannedRecipe {
    let mut title: Option<String> = None;
    let mut ingredients = Vec::new();
    let mut directions = Vec::new();
    let mut notes: Vec<&str> = Vec::new();
    let mut paragraph: Option<String> = None;

    for line in lines {
        match line.classification {
            LineClassification::Title => {
                let text = line.text.trim();
                if title.is_none() && !text.is_empty() {
                    title = Some(text.to_string());
                }
            }
            LineClassification::Ingredient => {
                flush(&mut paragraph, &mut directions);
                let cleaned = strip_bullet(&line.text);
                if !cleaned.is_empty() {
                    ingredients.push(cleaned);
                }
            }
            LineClassification::Direction => {
                let text = strip_bullet(&line.text);
                if text.is_empty() {
                    continue;
                }
                let content = strip_step_prefix(&text);

                if STEP_MARKER_RE.is_match(&text) {
                    flush(&mut paragraph, &mut directions);
                    paragraph = Some(content);
                } else if !content.is_empty() {
                    match paragraph.as_mut() {
                        Some(current) if !current.is_empty() => {
                            current.push(' ');
                            current.push_str(&content);
                        }
                        _ => paragraph = Some(content),
                    }
                }
            }
            LineClassification::Note => {
                flush(&mut paragraph, &mut directions);
                notes.push(line.text.trim());
            }
            LineClassification::Skip => flush(&mut paragraph, &mut directions),
        }
    }
    flush(&mut paragraph, &mut directions);

    debug!(
        "Assembler: {} ingredients, {} directions, {} note lines",
        ingredients.len(),
        directions.len(),
        notes.len()
    );

    ScannedRecipe {
        title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        ingredients,
        directions,
        notes: notes.join("\n").trim().to_string(),
    }
}

fn flush(paragraph: &mut Option<String>, directions: &mut Vec<String>) {
    if let Some(text) = paragraph.take() {
        let text = text.trim();
        if !text.is_empty() {
            directions.push(text.to_string());
        }
    }
}
