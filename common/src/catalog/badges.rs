/// A badge the gamification view knows how to describe.
///
/// `name` is the wire identifier used in `POST /user/{id}/badge/{name}` and in
/// `UserProgress::badges`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const BADGES: [BadgeInfo; 5] = [
    BadgeInfo {
        name: "first_upload",
        title: "Heritage Keeper",
        description: "Digitized your first manuscript or folk song.",
        icon: "📜",
    },
    BadgeInfo {
        name: "restorer",
        title: "Text Restorer",
        description: "Brought a damaged text back to life with AI restoration.",
        icon: "🛠️",
    },
    BadgeInfo {
        name: "translator",
        title: "Bridge Builder",
        description: "Translated a cultural text into another language.",
        icon: "🌐",
    },
    BadgeInfo {
        name: "storyteller",
        title: "Storyteller",
        description: "Turned a document into a story, summary or quiz.",
        icon: "📖",
    },
    BadgeInfo {
        name: "explorer",
        title: "Explorer",
        description: "Discovered heritage content through search.",
        icon: "🧭",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn badge_names_are_unique() {
        let names: HashSet<_> = BADGES.iter().map(|b| b.name).collect();
        assert_eq!(names.len(), BADGES.len());
    }
}
