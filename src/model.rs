use serde::{Deserialize, Serialize};

/// Recipe extracted from a web page.
///
/// Durations are whole seconds. A missing or malformed duration is `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub directions: Vec<String>,
    pub source_url: String,
    pub image_url: Option<String>,
    pub prep_duration: u64,
    pub cook_duration: u64,
    pub notes: String,
}

impl ParsedRecipe {
    /// Prep plus cook time, in seconds.
    pub fn total_duration(&self) -> u64 {
        self.prep_duration.saturating_add(self.cook_duration)
    }
}

/// Role a line of scanned text plays in the recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineClassification {
    Title,
    Ingredient,
    Direction,
    Note,
    Skip,
}

/// One line of scanned text with its (possibly user-corrected) classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    pub text: String,
    pub classification: LineClassification,
}

impl ClassifiedLine {
    pub fn new(text: impl Into<String>, classification: LineClassification) -> Self {
        Self {
            text: text.into(),
            classification,
        }
    }
}

/// Recipe rebuilt from reviewed scan lines. Each direction is one paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub directions: Vec<String>,
    pub notes: String,
}
