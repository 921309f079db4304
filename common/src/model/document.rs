use serde::{Deserialize, Serialize};

/// A digitized manuscript or inscription, created server-side by an OCR upload.
///
/// The list returned by `GET /documents` is loaded once at startup and handed to
/// the Home and Storytelling views as read-only data. Only `id`, `title` and
/// `language` are guaranteed; every other attribute may be missing on older
/// records, so they all decode to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub language: String,
    #[serde(default)]
    pub script_type: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    /// Text produced by OCR. The API stores it as `original_text`.
    #[serde(default, alias = "original_text")]
    pub extracted_text: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub time_period: Option<String>,
    #[serde(default)]
    pub restored_text: Option<String>,
    #[serde(default)]
    pub restoration_confidence: Option<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_record_with_original_text() {
        let json = r#"{
            "id": "d1",
            "title": "palm_leaf.jpg",
            "language": "sanskrit",
            "script_type": "devanagari",
            "region": "Unknown",
            "original_text": "सर्वे भवन्तु सुखिनः",
            "tags": ["ocr", "devanagari"],
            "embeddings": [0.1, 0.2]
        }"#;

        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.id, "d1");
        assert_eq!(doc.extracted_text.as_deref(), Some("सर्वे भवन्तु सुखिनः"));
        assert_eq!(doc.tags, vec!["ocr", "devanagari"]);
        assert_eq!(doc.restoration_confidence, None);
    }

    #[test]
    fn missing_optional_fields_default() {
        let doc: Document =
            serde_json::from_str(r#"{"id":"d2","title":"t","language":"tamil"}"#).unwrap();
        assert!(doc.script_type.is_none());
        assert!(doc.region.is_none());
        assert!(doc.tags.is_empty());
    }
}
