//! PokeAPI implementation of [`CatalogSource`] over plain HTTPS + JSON.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use serde::de::DeserializeOwned;

use super::client::{CatalogSource, FetchError};
use super::types::{DetailRecord, ListPage};

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

pub struct PokeApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl PokeApiClient {
    /// Creates a client rooted at `base_url` (e.g. `https://pokeapi.co/api/v2`).
    ///
    /// A trailing slash on the base URL is ignored.
    pub fn new(base_url: &str, timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn page_url(&self, offset: u32, limit: u32) -> String {
        format!("{}/pokemon?limit={limit}&offset={offset}", self.base_url)
    }

    pub fn detail_url(&self, id: &str) -> String {
        format!("{}/pokemon/{id}", self.base_url)
    }

    /// GETs `url` and decodes the body as `T`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!("PokeAPI error: {} for {}", status, url);
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to parse response from {}: {}", url, e);
            FetchError::Parse(e.to_string())
        })
    }
}

#[async_trait]
impl CatalogSource for PokeApiClient {
    fn name(&self) -> &str {
        "pokeapi"
    }

    async fn fetch_page(&self, offset: u32, limit: u32) -> Result<ListPage, FetchError> {
        self.get_json(&self.page_url(offset, limit)).await
    }

    async fn fetch_detail_at(&self, url: &str) -> Result<DetailRecord, FetchError> {
        self.get_json(url).await
    }

    async fn fetch_detail(&self, id: &str) -> Result<DetailRecord, FetchError> {
        self.get_json(&self.detail_url(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> PokeApiClient {
        PokeApiClient::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_page_url_carries_limit_and_offset() {
        let c = client(DEFAULT_BASE_URL);
        assert_eq!(
            c.page_url(40, 20),
            "https://pokeapi.co/api/v2/pokemon?limit=20&offset=40"
        );
    }

    #[test]
    fn test_detail_url() {
        let c = client(DEFAULT_BASE_URL);
        assert_eq!(c.detail_url("25"), "https://pokeapi.co/api/v2/pokemon/25");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let c = client("http://localhost:8080/api/v2/");
        assert_eq!(c.base_url(), "http://localhost:8080/api/v2");
        assert_eq!(c.detail_url("1"), "http://localhost:8080/api/v2/pokemon/1");
    }
}
