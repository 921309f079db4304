use serde::{Deserialize, Serialize};

/// Response of `GET /vr/preview/{document_id}`, a placeholder for 3D artifact
/// viewing that the API announces but does not render yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VrPreview {
    pub message: String,
    pub document_id: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl VrPreview {
    /// Text shown in the alert: the message followed by one bullet per feature.
    pub fn summary(&self) -> String {
        let mut text = self.message.clone();
        for feature in &self.features {
            text.push_str("\n• ");
            text.push_str(feature);
        }
        text
    }
}

/// Response of `GET /`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WelcomeMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_features() {
        let preview = VrPreview {
            message: "3D artifact preview coming soon!".to_string(),
            document_id: "d1".to_string(),
            features: vec!["Virtual manuscript viewing".to_string()],
            status: Some("in_development".to_string()),
        };
        assert_eq!(
            preview.summary(),
            "3D artifact preview coming soon!\n• Virtual manuscript viewing"
        );
    }
}
