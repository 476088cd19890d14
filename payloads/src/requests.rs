use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Joke categories understood by JokeAPI.
///
/// The `Display` form is the path segment the API expects, e.g.
/// `/joke/Programming`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub enum Category {
    Any,
    Programming,
    Misc,
    Dark,
    Pun,
    Spooky,
    Christmas,
}

/// Shape of the joke payload. `single` jokes carry one `joke` string,
/// `twopart` jokes a `setup` and a `delivery`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum JokeType {
    #[display("single")]
    Single,
    #[display("twopart")]
    TwoPart,
}

/// Which joke to ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JokeFilter {
    pub category: Category,
    pub joke_type: JokeType,
}

impl JokeFilter {
    /// Path of the joke endpoint for this filter, relative to the API root.
    pub fn path(&self) -> String {
        format!("joke/{}", self.category)
    }

    /// Query parameters sent alongside [`JokeFilter::path`].
    pub fn query(&self) -> JokeQuery {
        JokeQuery {
            joke_type: self.joke_type,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JokeQuery {
    #[serde(rename = "type")]
    pub joke_type: JokeType,
}
