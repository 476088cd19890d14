use crate::{JokeFilter, responses};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with JokeAPI.
#[derive(Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    /// Client for the given API root, e.g. [`crate::JOKE_API_ADDRESS`].
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
        }
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}/{path}", self.address.trim_end_matches('/'))
    }

    async fn get_with_query(
        &self,
        path: &str,
        query: &impl Serialize,
    ) -> ReqwestResult {
        self.inner_client
            .get(self.format_url(path))
            .query(query)
            .send()
            .await
    }
}

/// Methods on JokeAPI
impl APIClient {
    /// Fetch one joke matching `filter`.
    ///
    /// Only a body that is not JSON at all is an error; fields of the wrong
    /// shape decode as absent (see [`responses::Joke`]).
    pub async fn get_joke(
        &self,
        filter: &JokeFilter,
    ) -> Result<responses::Joke, ClientError> {
        let response =
            self.get_with_query(&filter.path(), &filter.query()).await?;
        let body: serde_json::Value = ok_body(response).await?;
        Ok(responses::Joke::from_value(body))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}
