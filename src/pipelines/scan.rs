use crate::images_to_text::{build_recipe, classify_lines, reading_order_text, RecognizedObservation};
use crate::model::{ClassifiedLine, LineClassification, ScannedRecipe};
use log::info;

/// Orders OCR observations and classifies the resulting lines.
pub fn classify_observations(observations: &[RecognizedObservation]) -> Vec<ClassifiedLine> {
    let text = reading_order_text(observations);
    classify_text(&text)
}

pub fn classify_text(text: &str) -> Vec<ClassifiedLine> {
    let lines = classify_lines(text);
    let count = |kind: LineClassification| lines.iter().filter(|l| l.classification == kind).count();
    info!(
        "Classified {} lines: {} ingredients, {} directions, {} notes",
        lines.len(),
        count(LineClassification::Ingredient),
        count(LineClassification::Direction),
        count(LineClassification::Note)
    );
    lines
}

/// Builds the final recipe from lines the user has reviewed.
pub fn assemble(lines: &[ClassifiedLine]) -> ScannedRecipe {
    let recipe = build_recipe(lines);
    info!(
        "Assembled {:?}: {} ingredients, {} directions",
        recipe.title,
        recipe.ingredients.len(),
        recipe.directions.len()
    );
    recipe
}
