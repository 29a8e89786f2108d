//! Client for the upstream image search service.

use shared_types::PayloadError;
use thiserror::Error;

use crate::config::SearchConfig;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Search query must not be empty")]
    EmptyQuery,
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("Failed to reach the image search service: {0}")]
    Transport(String),
    #[error("Failed to decode the image search response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Unexpected image search response: {0}")]
    Payload(#[from] PayloadError),
    #[error("Image search client not initialized")]
    Uninitialized,
    #[error("Image search client already initialized")]
    AlreadyInitialized,
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Transport("request timed out".to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// `{api_url}?q=..&page=..&take=..&excludeEarth=..`
pub fn search_url(config: &SearchConfig, query: &str, page: u32, page_size: u32) -> String {
    format!(
        "{}?q={}&page={}&take={}&excludeEarth={}",
        config.api_url,
        urlencoding::encode(query),
        page,
        page_size,
        config.exclude_earth
    )
}

#[cfg(feature = "ssr")]
mod client {
    use std::sync::OnceLock;

    use shared_types::{SearchPage, SearchPayload};

    use super::{search_url, ApiError};
    use crate::config::SearchConfig;

    static HTTP_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

    pub fn init_client(config: &SearchConfig) -> Result<(), ApiError> {
        HTTP_CLIENT
            .set(build_client(config)?)
            .map_err(|_| ApiError::AlreadyInitialized)
    }

    pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, ApiError> {
        Ok(reqwest::Client::builder().timeout(config.timeout).build()?)
    }

    fn http_client() -> Result<&'static reqwest::Client, ApiError> {
        HTTP_CLIENT.get().ok_or(ApiError::Uninitialized)
    }

    /// Fetches and normalizes one page of results with the shared client.
    pub async fn fetch_page(
        config: &SearchConfig,
        query: &str,
        page: u32,
        page_size: u32,
    ) -> Result<SearchPage, ApiError> {
        request_page(http_client()?, config, query, page, page_size).await
    }

    pub async fn request_page(
        client: &reqwest::Client,
        config: &SearchConfig,
        query: &str,
        page: u32,
        page_size: u32,
    ) -> Result<SearchPage, ApiError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ApiError::EmptyQuery);
        }

        let url = search_url(config, query, page, page_size);
        tracing::debug!(%url, "requesting image search page");

        let response = client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let value: serde_json::Value = serde_json::from_slice(&body)?;
        let result = SearchPayload::from_json(value)?.normalize()?;
        if result.skipped > 0 {
            tracing::warn!(
                query,
                page,
                skipped = result.skipped,
                "skipped unreadable image records"
            );
        }
        Ok(result)
    }
}

#[cfg(feature = "ssr")]
pub use client::{build_client, fetch_page, init_client, request_page};
