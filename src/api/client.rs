//! REST client for making requests to the remote API

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::OnceLock;
use tracing::debug;

use crate::schema::Resource;

static API_BASE: OnceLock<String> = OnceLock::new();

const DEFAULT_API_BASE: &str = "/api";

/// Initialize the API base URL. Call this at startup.
pub fn init_api_base(url: String) {
    API_BASE.set(url).ok();
}

/// Get the configured API base URL
pub fn api_base() -> &'static str {
    API_BASE.get().map(String::as_str).unwrap_or(DEFAULT_API_BASE)
}

/// Error type for API operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server rejected the request: {0}")]
    Rejected(String),
}

/// Collection-level operations the store runs against the remote API.
///
/// `ApiClient` is the real implementation; tests drive the store through a
/// recording mock instead. `?Send` because the UI runs single-threaded.
#[async_trait(?Send)]
pub trait ResourceApi<R: Resource> {
    async fn list(&self) -> Result<Vec<R>, ClientError>;
    async fn create(&self, body: &R::Create) -> Result<R, ClientError>;
    async fn update(&self, id: &str, patch: &R::Patch) -> Result<R, ClientError>;
}

/// REST client for making requests
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), collection)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        if !response.status().is_success() {
            return Err(ClientError::Rejected(response.status().to_string()));
        }
        Ok(response.json().await?)
    }
}

#[async_trait(?Send)]
impl<R: Resource> ResourceApi<R> for ApiClient {
    async fn list(&self) -> Result<Vec<R>, ClientError> {
        debug!(collection = R::COLLECTION, "fetching collection");
        let response = self
            .client
            .get(self.collection_url(R::COLLECTION))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn create(&self, body: &R::Create) -> Result<R, ClientError> {
        debug!(collection = R::COLLECTION, "creating record");
        let response = self
            .client
            .post(self.collection_url(R::COLLECTION))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn update(&self, id: &str, patch: &R::Patch) -> Result<R, ClientError> {
        debug!(collection = R::COLLECTION, id, "patching record");
        let url = format!("{}/{}", self.collection_url(R::COLLECTION), id);
        let response = self.client.patch(url).json(patch).send().await?;
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_url_handles_trailing_slash() {
        let client = ApiClient::new("https://example.org/api/");
        assert_eq!(client.collection_url("users"), "https://example.org/api/users");

        let client = ApiClient::new("/api");
        assert_eq!(client.collection_url("animals"), "/api/animals");
    }
}
