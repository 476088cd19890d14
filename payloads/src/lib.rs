//! Wire types and HTTP client for the JokeAPI service.

pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};
pub use requests::{Category, JokeFilter, JokeType};
pub use responses::Joke;

/// Address of the public JokeAPI deployment the UI talks to.
pub const JOKE_API_ADDRESS: &str = "https://v2.jokeapi.dev";
