//! First-pass classification of scanned recipe text.
//!
//! Lines are tagged by a small state machine: section headers switch the
//! current section, metadata lines are always dropped, and lines outside any
//! section fall back to quantity/verb heuristics. The output is meant to be
//! reviewed (and corrected) before it is handed to
//! [`build_recipe`](super::assembler::build_recipe).

use crate::model::{ClassifiedLine, LineClassification};
use log::debug;
use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

/// Unsectioned lines longer than this read as prose, which means directions.
const LONG_LINE_CHARS: usize = 50;

const INGREDIENT_HEADERS: [&str; 5] = [
    "ingredients",
    "ingredient list",
    "what you need",
    "you will need",
    "you'll need",
];

const DIRECTION_HEADERS: [&str; 7] = [
    "directions",
    "instructions",
    "method",
    "steps",
    "preparation",
    "how to make",
    "procedure",
];

const NOTE_HEADERS: [&str; 6] = [
    "notes",
    "tips",
    "chef's notes",
    "cook's notes",
    "serving suggestions",
    "variations",
];

const COOKING_VERBS: [&str; 72] = [
    "add", "allow", "arrange", "bake", "beat", "blend", "boil", "bring", "broil", "brown",
    "brush", "chill", "chop", "combine", "continue", "cook", "cool", "cover", "cream", "cut",
    "dice", "divide", "drain", "drizzle", "fill", "flip", "fold", "fry", "garnish", "grate",
    "grease", "grill", "heat", "knead", "layer", "let", "line", "marinate", "mash", "melt",
    "microwave", "mince", "mix", "pat", "peel", "place", "pour", "preheat", "prepare",
    "reduce", "refrigerate", "remove", "repeat", "return", "rinse", "roast", "roll", "sauté",
    "saute", "season", "serve", "set", "simmer", "slice", "soak", "spread", "sprinkle",
    "stir", "strain", "toss", "transfer", "whisk",
];

static METADATA_SET: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"(?i)^(?:serves|servings?|serving size|yields?|makes)\b",
        r"(?i)^(?:prep|preparation)\s*time\b",
        r"(?i)^(?:cook|cooking)\s*time\b",
        r"(?i)^total\s*time\b",
        r"(?i)^active\s*time\b",
        r"(?i)^ready\s+in\b",
        r"(?i)^difficulty\b",
        r"(?i)^cuisine\b",
        r"(?i)^course\b",
        r"(?i)^category\b",
        r"(?i)^(?:calories\b|\d+\s*(?:k?cal|calories)\b)",
        r"(?i)^nutrition\b",
        r"(?i)^source\b",
        r"(?i)^adapted\s+from\b",
        r"(?i)^photo(?:graph(?:s|y)?|s)?\b",
        r"(?i)^(?:page|p\.)?\s*\d{1,4}$",
    ])
    .unwrap()
});

static INGREDIENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?ix)
        ^[\s•·*\-–—]*
        (?: \d+\s+\d+/\d+ | \d+/\d+ | \d+(?:[.,]\d+)? | [½⅓⅔¼¾⅛⅜⅝⅞] )
        (?: \s*[½⅓⅔¼¾⅛⅜⅝⅞] )?
        (?: \s*(?:-|–|to)\s*\d+(?:[./]\d+)? )?
        \s*
        (?: cups? | c | tablespoons? | tbsps? | tbs | teaspoons? | tsps? | ounces? | oz
          | pounds? | lbs? | grams? | g | kilograms? | kg | milliliters? | millilitres?
          | ml | liters? | litres? | l | cloves? | pinch(?:es)? | dash(?:es)? | cans?
          | packages? | pkgs? | sticks? | slices? | pieces? | quarts? | qts? | pints?
          | pts? | gallons? | bunch(?:es)? | sprigs? | heads? | stalks? | handfuls?
          | jars? | bottles? | bags? | large | medium | small | whole | eggs? )
        \b",
    )
    .unwrap()
});

static STEP_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*(?:step\s*\d+|\d+\s*[.):])").unwrap());

static BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\s•·∙◦▪▫●○■□►▸➤✓✔*\-–—]+").unwrap());

static STEP_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:(?:step\s*)?\d+\s*[.):\-–]\s*|step\s*\d+\s*)").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Unknown,
    Ingredients,
    Directions,
    Notes,
}

/// Tags each non-empty line of reading-order text.
pub fn classify_lines(text: &str) -> Vec<ClassifiedLine> {
    let mut section = Section::Unknown;
    let mut found_title = false;
    let mut classified = Vec::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if is_metadata(line) {
            classified.push(ClassifiedLine::new(line, LineClassification::Skip));
            continue;
        }

        if let Some(header) = header_section(line) {
            debug!("Classifier: {:?} header {:?}", header, line);
            section = header;
            classified.push(ClassifiedLine::new(line, LineClassification::Skip));
            continue;
        }

        let entry = match section {
            Section::Unknown => {
                if !found_title && line.chars().count() >= 2 {
                    found_title = true;
                    ClassifiedLine::new(line, LineClassification::Title)
                } else {
                    ClassifiedLine::new(line, heuristic_classification(line))
                }
            }
            Section::Ingredients => {
                let cleaned = strip_bullet(line);
                if cleaned.is_empty() {
                    ClassifiedLine::new(line, LineClassification::Skip)
                } else {
                    ClassifiedLine::new(cleaned, LineClassification::Ingredient)
                }
            }
            Section::Directions => {
                let cleaned = strip_step_prefix(&strip_bullet(line));
                if cleaned.is_empty() {
                    ClassifiedLine::new(line, LineClassification::Skip)
                } else {
                    ClassifiedLine::new(cleaned, LineClassification::Direction)
                }
            }
            Section::Notes => ClassifiedLine::new(line, LineClassification::Note),
        };
        classified.push(entry);
    }

    if !classified
        .iter()
        .any(|l| l.classification == LineClassification::Title)
    {
        if let Some(first) = classified
            .iter_mut()
            .find(|l| l.classification != LineClassification::Skip)
        {
            first.classification = LineClassification::Title;
        }
    }

    if section == Section::Unknown {
        debug!("Classifier: no section headers, using whole-document heuristics");
        for line in classified
            .iter_mut()
            .filter(|l| l.classification != LineClassification::Title)
        {
            line.classification = if is_metadata(&line.text) {
                LineClassification::Skip
            } else {
                heuristic_classification(&line.text)
            };
        }
    }

    debug!("Classifier: classified {} lines", classified.len());
    classified
}

fn header_section(line: &str) -> Option<Section> {
    let normalized = line
        .to_lowercase()
        .replace(':', "")
        .replace('\u{2019}', "'");
    let normalized = normalized.trim();

    let matches = |headers: &[&str]| headers.iter().any(|header| normalized.starts_with(*header));

    if matches(&INGREDIENT_HEADERS) {
        Some(Section::Ingredients)
    } else if matches(&DIRECTION_HEADERS) {
        Some(Section::Directions)
    } else if matches(&NOTE_HEADERS) {
        Some(Section::Notes)
    } else {
        None
    }
}

fn is_metadata(line: &str) -> bool {
    METADATA_SET.is_match(line.trim())
}

fn heuristic_classification(line: &str) -> LineClassification {
    if looks_like_ingredient(line) {
        LineClassification::Ingredient
    } else if looks_like_direction(line) {
        LineClassification::Direction
    } else {
        LineClassification::Skip
    }
}

fn looks_like_ingredient(line: &str) -> bool {
    INGREDIENT_RE.is_match(line)
}

fn looks_like_direction(line: &str) -> bool {
    if STEP_NUMBER_RE.is_match(line) || line.chars().count() > LONG_LINE_CHARS {
        return true;
    }

    line.split_whitespace()
        .next()
        .map(|word| word.trim_matches(|c: char| !c.is_alphabetic()).to_lowercase())
        .is_some_and(|word| COOKING_VERBS.contains(&word.as_str()))
}

/// Removes leading bullet and dash glyphs.
pub(crate) fn strip_bullet(line: &str) -> String {
    BULLET_RE.replace(line, "").trim().to_string()
}

/// Removes a leading `1.`, `2)`, `Step 3:` style step number.
pub(crate) fn strip_step_prefix(line: &str) -> String {
    STEP_PREFIX_RE.replace(line, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_detection() {
        assert_eq!(header_section("INGREDIENTS:"), Some(Section::Ingredients));
        assert_eq!(header_section("You’ll need"), Some(Section::Ingredients));
        assert_eq!(header_section("Ingredients for the glaze"), Some(Section::Ingredients));
        assert_eq!(header_section("Method"), Some(Section::Directions));
        assert_eq!(header_section("How to make it"), Some(Section::Directions));
        assert_eq!(header_section("Cook's Notes"), Some(Section::Notes));
        assert_eq!(
            header_section("Ingredients for the chocolate cake and frosting"),
            Some(Section::Ingredients)
        );
        assert_eq!(header_section("Method: mix everything"), Some(Section::Directions));
        assert_eq!(header_section("Lemon Bars"), None);
        assert_eq!(header_section("2 cups flour"), None);
    }

    #[test]
    fn test_metadata_lines() {
        for line in [
            "Serves: 4",
            "Yield: 12 muffins",
            "Prep Time: 15 minutes",
            "Preparation time 10 min",
            "Cook time: 1 hour",
            "Total Time 45 min",
            "Ready in 30 minutes",
            "Difficulty: easy",
            "Calories: 320",
            "320 kcal",
            "Nutrition information",
            "Source: Grandma",
            "Adapted from The Joy of Cooking",
            "Photograph by Jane Doe",
            "Page 42",
            "117",
        ] {
            assert!(is_metadata(line), "{line:?} should be metadata");
        }
        assert!(!is_metadata("2 cups flour"));
        assert!(!is_metadata("Preheat the oven to 350F."));
    }

    #[test]
    fn test_ingredient_heuristic() {
        for line in [
            "2 cups flour",
            "1/2 tsp salt",
            "1 1/2 cups milk",
            "½ cup sugar",
            "1½ tbsp butter",
            "2-3 cloves garlic",
            "3 large eggs",
            "- 200 g dark chocolate",
            "1 pinch nutmeg",
        ] {
            assert!(looks_like_ingredient(line), "{line:?} should be an ingredient");
        }
        assert!(!looks_like_ingredient("350F oven"));
        assert!(!looks_like_ingredient("1. Preheat the oven"));
        assert!(!looks_like_ingredient("Salt to taste"));
    }

    #[test]
    fn test_direction_heuristic() {
        assert!(looks_like_direction("1. Preheat the oven"));
        assert!(looks_like_direction("Step 2 mix well"));
        assert!(looks_like_direction("Whisk the eggs"));
        assert!(looks_like_direction("Sauté onions"));
        assert!(looks_like_direction(
            "When the dough has doubled in size, punch it down and shape into loaves"
        ));
        assert!(!looks_like_direction("Lemon Bars"));
    }

    #[test]
    fn test_strip_prefixes() {
        assert_eq!(strip_bullet("• 2 cups flour"), "2 cups flour");
        assert_eq!(strip_bullet("-- pinch of salt"), "pinch of salt");
        assert_eq!(strip_step_prefix("1. Preheat oven"), "Preheat oven");
        assert_eq!(strip_step_prefix("2) Mix"), "Mix");
        assert_eq!(strip_step_prefix("Step 3: Bake"), "Bake");
        assert_eq!(strip_step_prefix("STEP 4 Cool"), "Cool");
        assert_eq!(strip_step_prefix("Bake 20 minutes"), "Bake 20 minutes");
    }

    #[test]
    fn test_sectioned_text_keeps_cleaned_text() {
        let lines = classify_lines("Pancakes\nIngredients\n• 1 cup flour\nDirections\n1. Whisk everything.");
        assert_eq!(
            lines,
            vec![
                ClassifiedLine::new("Pancakes", LineClassification::Title),
                ClassifiedLine::new("Ingredients", LineClassification::Skip),
                ClassifiedLine::new("1 cup flour", LineClassification::Ingredient),
                ClassifiedLine::new("Directions", LineClassification::Skip),
                ClassifiedLine::new("Whisk everything.", LineClassification::Direction),
            ]
        );
    }

    #[test]
    fn test_bullet_only_line_in_section_is_skipped() {
        let lines = classify_lines("Soup\nIngredients\n•\n2 cups stock");
        assert_eq!(lines[2].classification, LineClassification::Skip);
        assert_eq!(lines[3].classification, LineClassification::Ingredient);
    }
}
