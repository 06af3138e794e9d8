//! Scanned recipe handling: OCR observations to reading-order text, text to
//! classified lines, and reviewed lines back to a recipe.

pub mod assembler;
pub mod classifier;
pub mod ocr;

pub use assembler::build_recipe;
pub use classifier::classify_lines;
pub use ocr::{reading_order_text, BoundingBox, RecognizedCandidate, RecognizedObservation};
