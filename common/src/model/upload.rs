//! Response bodies of the two multipart upload endpoints.

use serde::{Deserialize, Serialize};

/// Response of `POST /ocr/upload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrUploadResponse {
    pub document_id: String,
    #[serde(default)]
    pub extracted_text: Option<String>,
    #[serde(default)]
    pub script_type: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Response of `POST /speech/upload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechUploadResponse {
    pub song_id: String,
    #[serde(default)]
    pub transcription: Option<String>,
    #[serde(default)]
    pub performer: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ocr_response_without_text() {
        let response: OcrUploadResponse =
            serde_json::from_str(r#"{"document_id":"d1","status":"success"}"#).unwrap();
        assert_eq!(response.document_id, "d1");
        assert!(response.extracted_text.is_none());
    }

    #[test]
    fn speech_response_keeps_transcription() {
        let response: SpeechUploadResponse = serde_json::from_str(
            r#"{"song_id":"s9","transcription":"गीत के बोल","performer":"","region":"Rajasthan","status":"success"}"#,
        )
        .unwrap();
        assert_eq!(response.song_id, "s9");
        assert_eq!(response.transcription.as_deref(), Some("गीत के बोल"));
    }
}
