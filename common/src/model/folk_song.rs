use serde::{Deserialize, Serialize};

/// A folk-song recording registered through the audio upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolkSong {
    pub id: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub performer: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub region: String,
    pub language: String,
    #[serde(default)]
    pub transcription: Option<String>,
    #[serde(default)]
    pub lyrics: Option<String>,
    #[serde(default)]
    pub cultural_significance: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_title_and_region_decode_as_empty() {
        let song: FolkSong = serde_json::from_str(
            r#"{"id":"s1","title":null,"region":null,"language":"marathi","transcription":null}"#,
        )
        .unwrap();

        assert_eq!(song.title, "");
        assert_eq!(song.region, "");
        assert_eq!(song.transcription, None);
    }

    #[test]
    fn missing_title_and_region_default_to_empty() {
        let song: FolkSong =
            serde_json::from_str(r#"{"id":"s2","language":"tamil","performer":"Meena"}"#).unwrap();
        assert_eq!(song.title, "");
        assert_eq!(song.performer.as_deref(), Some("Meena"));
    }
}
