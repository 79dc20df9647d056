//! HTTP client for the encyclopedia API

use std::time::Duration;

use reqwest::Url;

use super::endpoint::{extract_url, parse_endpoint, search_url};
use super::extract::parse_extract;
use super::opensearch::parse_opensearch;
use super::{SuggestionItem, WikiApi, WikiError};
use crate::config::SearchConfig;
use crate::error::WiqError;

const USER_AGENT: &str = concat!("wiq/", env!("CARGO_PKG_VERSION"));

/// Encyclopedia API client backed by `reqwest`
#[derive(Debug, Clone)]
pub struct WikiClient {
    http: reqwest::Client,
    endpoint: Url,
    limit: u32,
}

impl WikiClient {
    /// Build a client from the search configuration
    ///
    /// Fails when the endpoint is not an absolute http(s) URL or the
    /// HTTP client cannot be constructed.
    pub fn new(config: &SearchConfig) -> Result<Self, WiqError> {
        let endpoint = parse_endpoint(&config.endpoint_url())?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| WiqError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            endpoint,
            limit: config.limit,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn get_text(&self, url: Url) -> Result<String, WikiError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| WikiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WikiError::Status {
                code: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| WikiError::Network(e.to_string()))
    }
}

impl WikiApi for WikiClient {
    async fn search(&self, query: &str) -> Result<Vec<SuggestionItem>, WikiError> {
        let body = self
            .get_text(search_url(&self.endpoint, query, self.limit))
            .await?;
        parse_opensearch(&body)
    }

    async fn extract(&self, title: &str) -> Result<Option<String>, WikiError> {
        let body = self.get_text(extract_url(&self.endpoint, title)).await?;
        parse_extract(&body)
    }
}
