//! Request URL construction for the MediaWiki action API

use reqwest::Url;

use crate::error::WiqError;

/// Parse and validate the configured API endpoint
///
/// Only absolute `http`/`https` URLs are accepted.
pub fn parse_endpoint(endpoint: &str) -> Result<Url, WiqError> {
    let url = Url::parse(endpoint.trim())
        .map_err(|_| WiqError::InvalidEndpoint(endpoint.to_string()))?;

    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(url),
        _ => Err(WiqError::InvalidEndpoint(endpoint.to_string())),
    }
}

/// OpenSearch suggestions request
pub fn search_url(base: &Url, query: &str, limit: u32) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair("action", "opensearch")
        .append_pair("format", "json")
        .append_pair("limit", &limit.to_string())
        .append_pair("origin", "*")
        .append_pair("search", query);
    url
}

/// Article extract request
pub fn extract_url(base: &Url, title: &str) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair("action", "query")
        .append_pair("format", "json")
        .append_pair("titles", title)
        .append_pair("prop", "extracts")
        .append_pair("origin", "*");
    url
}
