//! Serde helper functions for product payloads.
//!
//! Clients tend to send `""` for an image they have not uploaded yet. That is
//! treated the same as an absent field so validation reports the missing image
//! instead of the JSON extractor rejecting the whole body.

use serde::{Deserialize, Deserializer};
use url::Url;

/// Deserialize an optional URL, treating null and empty strings as None.
///
/// Only absolute URLs are accepted; a relative reference such as
/// `/img/a.png` is an error.
pub fn deserialize_optional_url<'de, D>(deserializer: D) -> Result<Option<Url>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => Url::parse(s.trim())
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
