use recipe_intake::{build_recipe, classify_lines, ClassifiedLine, LineClassification, ScannedRecipe};
use LineClassification::*;

fn line(text: &str, classification: LineClassification) -> ClassifiedLine {
    ClassifiedLine::new(text, classification)
}

#[test]
fn test_wrapped_step_merges_into_one_paragraph() {
    let recipe = build_recipe(&[line("2. Preheat oven", Direction), line("to 350F", Direction)]);
    assert_eq!(recipe.directions, vec!["Preheat oven to 350F"]);
}

#[test]
fn test_numbered_steps_start_new_paragraphs() {
    let recipe = build_recipe(&[
        line("1. Cream the butter", Direction),
        line("and sugar until pale.", Direction),
        line("2) Beat in the eggs", Direction),
        line("one at a time.", Direction),
        line("Step 3 Fold in the flour.", Direction),
    ]);

    assert_eq!(
        recipe.directions,
        vec![
            "Cream the butter and sugar until pale.",
            "Beat in the eggs one at a time.",
            "Fold in the flour."
        ]
    );
}

#[test]
fn test_default_title() {
    let recipe = build_recipe(&[line("1 cup rice", Ingredient), line("Boil it.", Direction)]);
    assert_eq!(recipe.title, "Scanned Recipe");
}

#[test]
fn test_empty_input() {
    assert_eq!(
        build_recipe(&[]),
        ScannedRecipe {
            title: "Scanned Recipe".to_string(),
            ..Default::default()
        }
    );
}

#[test]
fn test_user_corrections_are_respected() {
    // Reviewed lines are taken at face value, whatever the text looks like.
    let recipe = build_recipe(&[
        line("Serves 4", Title),
        line("Preheat the oven", Ingredient),
        line("2 cups flour", Direction),
        line("Gluten-free flour works too", Note),
        line("Photo by Sam", Skip),
    ]);

    assert_eq!(recipe.title, "Serves 4");
    assert_eq!(recipe.ingredients, vec!["Preheat the oven"]);
    assert_eq!(recipe.directions, vec!["2 cups flour"]);
    assert_eq!(recipe.notes, "Gluten-free flour works too");
}

#[test]
fn test_classified_card_end_to_end() {
    let text = "\
Shortbread
Makes 16 fingers
Ingredients
• 225g butter
• 110g caster sugar
• 335g plain flour
Method
1. Beat the butter and sugar
until smooth, then stir in the
flour to get a smooth paste.
Notes
Keeps for a week
in an airtight tin.
";

    let recipe = build_recipe(&classify_lines(text));

    assert_eq!(recipe.title, "Shortbread");
    assert_eq!(
        recipe.ingredients,
        vec!["225g butter", "110g caster sugar", "335g plain flour"]
    );
    assert_eq!(
        recipe.directions,
        vec!["Beat the butter and sugar until smooth, then stir in the flour to get a smooth paste."]
    );
    assert_eq!(recipe.notes, "Keeps for a week\nin an airtight tin.");
}
