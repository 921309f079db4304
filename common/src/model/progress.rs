use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Gamification record returned by `GET /user/{id}/progress`.
///
/// The server is the only writer. After awarding a badge the client fetches
/// the whole record again instead of patching its local copy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserProgress {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub points: u64,
    #[serde(default)]
    pub badges: BTreeSet<String>,
    #[serde(default)]
    pub documents_explored: BTreeSet<String>,
    #[serde(default)]
    pub translations_contributed: u32,
    #[serde(default)]
    pub stories_completed: u32,
}

impl UserProgress {
    pub fn has_badge(&self, name: &str) -> bool {
        self.badges.contains(name)
    }
}

/// Response of `POST /user/{id}/badge/{name}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeAwardResponse {
    pub message: String,
    #[serde(default)]
    pub points: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_badges_collapse_into_set() {
        let progress: UserProgress = serde_json::from_str(
            r#"{"user_id":"demo_user","points":20,"badges":["explorer","explorer","translator"],
                "documents_explored":["d1"],"translations_contributed":3}"#,
        )
        .unwrap();

        assert_eq!(progress.badges.len(), 2);
        assert!(progress.has_badge("translator"));
        assert!(!progress.has_badge("storyteller"));
        assert_eq!(progress.stories_completed, 0);
    }

    #[test]
    fn fresh_record_decodes_from_empty_object() {
        let progress: UserProgress = serde_json::from_str("{}").unwrap();
        assert_eq!(progress, UserProgress::default());
    }
}
