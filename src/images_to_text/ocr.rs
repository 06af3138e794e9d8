use serde::{Deserialize, Serialize};

/// Observations whose vertical midpoints are closer than this share a row.
const ROW_TOLERANCE: f64 = 0.01;

/// Normalized (0..1) box with a top-left origin; `y` grows down the page.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// One candidate string the recognizer proposed for an observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedCandidate {
    pub text: String,
    pub confidence: f32,
}

/// A region of recognized text, as produced by the OCR engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedObservation {
    pub bounding_box: BoundingBox,
    pub candidates: Vec<RecognizedCandidate>,
}

impl RecognizedObservation {
    /// Highest-confidence candidate; the earliest one wins a tie.
    pub fn best_candidate(&self) -> Option<&RecognizedCandidate> {
        self.candidates.iter().reduce(|best, candidate| {
            if candidate.confidence > best.confidence {
                candidate
            } else {
                best
            }
        })
    }
}

/// Joins observations into newline-separated text in reading order: top of
/// the page first, and left to right within a row.
pub fn reading_order_text(observations: &[RecognizedObservation]) -> String {
    let mut ordered: Vec<&RecognizedObservation> = observations.iter().collect();
    ordered.sort_by(|a, b| a.bounding_box.mid_y().total_cmp(&b.bounding_box.mid_y()));

    let mut rows: Vec<Vec<&RecognizedObservation>> = Vec::new();
    let mut row_anchor = f64::NEG_INFINITY;
    for observation in ordered {
        let mid_y = observation.bounding_box.mid_y();
        match rows.last_mut() {
            Some(row) if mid_y - row_anchor < ROW_TOLERANCE => row.push(observation),
            _ => {
                row_anchor = mid_y;
                rows.push(vec![observation]);
            }
        }
    }

    rows.into_iter()
        .flat_map(|mut row| {
            row.sort_by(|a, b| a.bounding_box.x.total_cmp(&b.bounding_box.x));
            row
        })
        .filter_map(RecognizedObservation::best_candidate)
        .map(|candidate| candidate.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
