//! Remote data source
//!
//! The core depends on the remote API through the single-operation
//! [`CharacterSource`] trait; [`RestCharacterSource`] is the HTTP-backed
//! implementation. Failures never yield partial data.

use super::query::CharacterQuery;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::model::CharacterPage;
use async_trait::async_trait;
use tracing::debug;

/// Base URL of the public character API
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// A paginated character listing the core can query
#[async_trait]
pub trait CharacterSource: Send + Sync {
    /// Fetch one page of characters matching the query
    async fn fetch(&self, query: &CharacterQuery) -> Result<CharacterPage>;
}

/// REST implementation of [`CharacterSource`]
#[derive(Debug)]
pub struct RestCharacterSource {
    client: HttpClient,
}

impl RestCharacterSource {
    /// Create a source against the default public API
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a source against a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let config = HttpClientConfig::builder().base_url(base_url).build();
        Self {
            client: HttpClient::with_config(config),
        }
    }

    /// Create a source over an existing HTTP client
    pub fn with_client(client: HttpClient) -> Self {
        Self { client }
    }
}

impl Default for RestCharacterSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CharacterSource for RestCharacterSource {
    async fn fetch(&self, query: &CharacterQuery) -> Result<CharacterPage> {
        let mut config = RequestConfig::new();
        for (key, value) in query.params() {
            config = config.query(key, value);
        }

        debug!(
            name = %query.name,
            status = %query.status,
            page = query.page,
            "fetching character page"
        );

        self.client
            .get_json_with_config::<CharacterPage>("/character", config)
            .await
    }
}
