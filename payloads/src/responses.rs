use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::JokeType;

/// A single joke as returned by `GET /joke/{category}?type=single`.
///
/// Only `joke` matters to the UI. Every field is optional and decoded
/// leniently: a field of the wrong type reads as `None` instead of failing
/// the whole payload. Unknown fields (`flags`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Joke {
    /// JokeAPI sets this on its own error payloads.
    #[serde(default, deserialize_with = "lenient")]
    pub error: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub joke_type: Option<JokeType>,
    #[serde(default, deserialize_with = "lenient")]
    pub joke: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub lang: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub safe: Option<bool>,
}

impl Joke {
    /// Read a joke out of any JSON document. Anything that is not an object
    /// yields an empty joke.
    pub fn from_value(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// The joke text, if the payload carried a non-empty string.
    pub fn text(&self) -> Option<&str> {
        self.joke.as_deref().filter(|joke| !joke.is_empty())
    }
}

/// Decode a field, mapping a value of the wrong shape to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}
