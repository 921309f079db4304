use serde::{Deserialize, Serialize};

/// Result of `POST /story/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryResult {
    #[serde(default)]
    pub story_id: Option<String>,
    pub story_type: String,
    pub content: String,
    /// Title of the document the story was generated from.
    pub source_document: String,
}
