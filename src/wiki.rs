//! Encyclopedia API access
//!
//! URL construction, response parsing and the HTTP client behind the
//! [`WikiApi`] trait. Everything here is pure except [`WikiClient`].

pub mod client;
pub mod endpoint;
pub mod extract;
pub mod opensearch;

use std::future::Future;

use thiserror::Error;

pub use client::WikiClient;

/// One candidate search result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionItem {
    pub title: String,
    /// Short description, empty when the API returned none
    pub description: String,
    pub url: String,
}

impl SuggestionItem {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
        }
    }
}

/// Errors raised while talking to the encyclopedia API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WikiError {
    /// Connection, timeout or body read failure
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status
    #[error("HTTP status {code}")]
    Status { code: u16 },

    /// Response body did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Source of suggestions and article extracts
///
/// Implementations must be `Send + Sync` so the worker can share one
/// instance across concurrently running requests.
pub trait WikiApi: Send + Sync {
    /// Search titles matching `query`
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<SuggestionItem>, WikiError>> + Send;

    /// Fetch the article extract for `title` as plain text
    ///
    /// `Ok(None)` means the page exists in the response but has no extract.
    fn extract(&self, title: &str)
    -> impl Future<Output = Result<Option<String>, WikiError>> + Send;
}
