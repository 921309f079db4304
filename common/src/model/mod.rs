pub mod document;
pub mod folk_song;
pub mod health;
pub mod progress;
pub mod restoration;
pub mod search;
pub mod story;
pub mod translation;
pub mod upload;
pub mod vr;

use serde::{Deserialize, Deserializer};

/// Text fields the server may send as `null`; decoded as an empty string.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
