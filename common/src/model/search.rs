use serde::{Deserialize, Serialize};

/// Kind of record a search hit points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Document,
    FolkSong,
    #[serde(other)]
    Other,
}

impl ContentKind {
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Document => "Document",
            ContentKind::FolkSong => "Folk Song",
            ContentKind::Other => "Other",
        }
    }
}

/// One row of a search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub content: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub performer: Option<String>,
    /// Relevance, only supplied by semantic search.
    #[serde(default)]
    pub score: Option<f64>,
}

/// Response of `POST /search`. Replaces any previous result set as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    #[serde(default)]
    pub search_type: Option<String>,
    pub total_found: u32,
    #[serde(default)]
    pub results: Vec<SearchHit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_hit_has_no_score() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"query":"raga","search_type":"keyword","total_found":1,
                "results":[{"type":"document","id":"d1","title":"Raga notes",
                            "content":"...","language":"hindi","region":""}]}"#,
        )
        .unwrap();

        let hit = &response.results[0];
        assert_eq!(hit.kind, ContentKind::Document);
        assert_eq!(hit.score, None);
        assert_eq!(hit.language.as_deref(), Some("hindi"));
    }

    #[test]
    fn folk_song_hit_carries_performer() {
        let hit: SearchHit = serde_json::from_str(
            r#"{"type":"folk_song","title":"Bihu","content":"","performer":"Asha","region":"Assam","score":0.7}"#,
        )
        .unwrap();
        assert_eq!(hit.kind, ContentKind::FolkSong);
        assert_eq!(hit.kind.label(), "Folk Song");
        assert_eq!(hit.performer.as_deref(), Some("Asha"));
        assert_eq!(hit.score, Some(0.7));
    }

    #[test]
    fn unknown_kind_falls_back_to_other() {
        let hit: SearchHit =
            serde_json::from_str(r#"{"type":"artifact","title":"Bronze idol"}"#).unwrap();
        assert_eq!(hit.kind, ContentKind::Other);
    }

    #[test]
    fn null_content_decodes_as_empty() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"query":"bhajan","total_found":2,
                "results":[{"type":"document","title":"Untranscribed scan","content":null},
                           {"type":"folk_song","title":"Lavani","content":"Dholki rhythm"}]}"#,
        )
        .unwrap();

        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].content, "");
        assert_eq!(response.results[1].content, "Dholki rhythm");
    }
}
