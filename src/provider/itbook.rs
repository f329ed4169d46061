//! itbook.store search API client
//!
//! Direct HTTP client for the itbook.store books API. The search endpoint is
//! `GET {base}/search/{keyword}/{page}` and returns the total match count,
//! the covered page, and up to ten book records.

use crate::config::Config;
use crate::provider::error::ProviderError;
use crate::provider::types::{SearchItem, SearchResult};
use crate::provider::SearchProvider;
use anyhow::anyhow;
use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use std::time::Duration;

/// Value of the body-level `error` field on a successful response
const API_OK: &str = "0";

/// HTTP client for the itbook.store search API
///
/// Holds a pooled `reqwest::Client` with the configured request timeout.
/// Timeouts live here, not in the orchestrator.
pub struct ItBookClient {
    client: reqwest::Client,
    base_url: String,
}

impl ItBookClient {
    /// Create a client from configuration
    ///
    /// # Errors
    /// Returns `ProviderError::Transport` if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.api.base_url.clone(),
        })
    }

    // Builds {base}/search/{keyword}/{page} with the keyword escaped as a
    // single path segment.
    fn search_url(&self, keyword: &str, page: u32) -> Result<reqwest::Url, ProviderError> {
        let mut url = reqwest::Url::parse(&self.base_url).map_err(|e| {
            ProviderError::Internal(anyhow!(
                "Invalid search API base URL {:?}: {}",
                self.base_url,
                e
            ))
        })?;
        let page = page.to_string();
        url.path_segments_mut()
            .map_err(|_| {
                ProviderError::Internal(anyhow!(
                    "Search API base URL {:?} cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["search", keyword, page.as_str()]);
        Ok(url)
    }
}

#[async_trait]
impl SearchProvider for ItBookClient {
    async fn search(&self, keyword: &str, page: u32) -> Result<SearchResult, ProviderError> {
        let url = self.search_url(keyword, page)?;

        tracing::debug!(
            url = %url,
            keyword = %keyword,
            page = page,
            "Calling search API"
        );

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());

            tracing::error!(
                status_code = status.as_u16(),
                body = %body,
                "Search API returned error status"
            );

            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: SearchResponseBody = serde_json::from_str(&body)
            .map_err(|e| ProviderError::Decode(format!("{} - Response body: {}", e, body)))?;

        if let Some(error) = parsed.error.as_deref() {
            if error != API_OK {
                return Err(ProviderError::Api(error.to_string()));
            }
        }

        tracing::debug!(
            page = parsed.page,
            total = parsed.total,
            count = parsed.books.len(),
            "Search API responded"
        );

        Ok(SearchResult {
            books: parsed.books,
            page: parsed.page,
            total: parsed.total,
        })
    }
}

/// Response body of the search endpoint
///
/// The API reports `total` and `page` as JSON strings, and omits `page` on
/// some first-page responses.
#[derive(Deserialize, Debug)]
struct SearchResponseBody {
    /// Body-level error indicator ("0" means success)
    #[serde(default)]
    error: Option<String>,
    /// Total number of matches across all pages
    #[serde(default, deserialize_with = "u32_from_string_or_number")]
    total: u32,
    /// The page this body covers
    #[serde(default = "first_page", deserialize_with = "u32_from_string_or_number")]
    page: u32,
    /// Book records for this page
    #[serde(default)]
    books: Vec<SearchItem>,
}

fn first_page() -> u32 {
    1
}

// Accepts both "25" and 25 for counter fields.
fn u32_from_string_or_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid integer {:?}", text))),
    }
}
