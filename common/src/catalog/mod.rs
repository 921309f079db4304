//! Fixed catalogs the client offers in its selectors.
//!
//! Each enum carries its wire value (`as_str`) and a display label. The wire
//! values are what the heritage API expects in form fields and JSON bodies.

mod badges;

pub use badges::{BadgeInfo, BADGES};

use std::fmt;
use std::str::FromStr;

/// Service statuses the health endpoint reports for a working service.
pub const HEALTHY_SERVICE_STATES: [&str; 3] = ["connected", "ready", "loaded"];

/// Returned by the `FromStr` impls when a value is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEntry(pub String);

impl fmt::Display for UnknownEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown catalog entry: {}", self.0)
    }
}

impl std::error::Error for UnknownEntry {}

macro_rules! catalog_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => ($wire:literal, $label:literal)),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownEntry;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(UnknownEntry(other.to_string())),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

catalog_enum! {
    /// Languages offered by every language selector.
    Language {
        Hindi => ("hindi", "Hindi"),
        Sanskrit => ("sanskrit", "Sanskrit"),
        Tamil => ("tamil", "Tamil"),
        Telugu => ("telugu", "Telugu"),
        Bengali => ("bengali", "Bengali"),
        Marathi => ("marathi", "Marathi"),
        Gujarati => ("gujarati", "Gujarati"),
        English => ("english", "English"),
    }
}

catalog_enum! {
    /// Writing systems a scanned document can be declared in.
    ScriptType {
        Devanagari => ("devanagari", "Devanagari"),
        Tamil => ("tamil", "Tamil"),
        Telugu => ("telugu", "Telugu"),
        Bengali => ("bengali", "Bengali"),
        Gujarati => ("gujarati", "Gujarati"),
        Kannada => ("kannada", "Kannada"),
        Malayalam => ("malayalam", "Malayalam"),
        Gurmukhi => ("gurmukhi", "Gurmukhi"),
    }
}

catalog_enum! {
    StoryType {
        Summary => ("summary", "Summary"),
        Interactive => ("interactive", "Interactive Story"),
        Quiz => ("quiz", "Quiz"),
    }
}

catalog_enum! {
    SearchType {
        Semantic => ("semantic", "Semantic"),
        Keyword => ("keyword", "Keyword"),
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Hindi
    }
}

impl Default for ScriptType {
    fn default() -> Self {
        ScriptType::Devanagari
    }
}

impl Default for StoryType {
    fn default() -> Self {
        StoryType::Summary
    }
}

impl Default for SearchType {
    fn default() -> Self {
        SearchType::Semantic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_catalog_has_eight_entries() {
        assert_eq!(Language::ALL.len(), 8);
        assert_eq!(Language::ALL[0], Language::default());
    }

    #[test]
    fn wire_values_parse_back() {
        for script in ScriptType::ALL {
            assert_eq!(script.as_str().parse::<ScriptType>(), Ok(*script));
        }
        assert_eq!("quiz".parse::<StoryType>(), Ok(StoryType::Quiz));
        assert_eq!(
            "klingon".parse::<Language>(),
            Err(UnknownEntry("klingon".to_string()))
        );
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(StoryType::Interactive.to_string(), "Interactive Story");
        assert_eq!(SearchType::Keyword.as_str(), "keyword");
    }
}
