use serde::{Deserialize, Serialize};

/// Result of `POST /translate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub translated_text: String,
    #[serde(default)]
    pub cultural_notes: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}
