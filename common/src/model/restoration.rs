use serde::{Deserialize, Serialize};

/// Result of `POST /restore`. Every field is optional: the view renders each
/// one independently and only when present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RestorationResult {
    #[serde(default)]
    pub restored_text: Option<String>,
    /// Model confidence in `0.0..=1.0`. Not range-checked.
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub changes_made: Vec<String>,
}

impl RestorationResult {
    /// Confidence with a missing value treated as zero.
    pub fn confidence_or_zero(&self) -> f64 {
        self.confidence.unwrap_or(0.0)
    }
}
