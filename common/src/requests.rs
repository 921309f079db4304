//! JSON request bodies sent by the client.

use serde::Serialize;

/// Page size the search view always asks for.
pub const SEARCH_LIMIT: u32 = 20;

/// Body of `POST /restore`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestoreRequest {
    pub text: String,
    pub language: String,
    pub context: String,
}

/// Body of `POST /translate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslateRequest {
    pub text: String,
    pub source_language: String,
    pub target_language: String,
}

/// Body of `POST /story/generate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoryRequest {
    pub document_id: String,
    pub story_type: String,
    pub target_language: String,
}

/// Body of `POST /search`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub search_type: String,
    /// Omitted from the payload when no language filter is chosen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub limit: u32,
}
