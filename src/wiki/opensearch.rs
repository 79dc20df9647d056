//! OpenSearch response parsing
//!
//! The endpoint answers with four parallel positions:
//! `[query, [titles...], [descriptions...], [urls...]]`.

use serde_json::Value;

use super::{SuggestionItem, WikiError};

/// Zip the parallel arrays of an OpenSearch response into items
///
/// A missing or non-string description becomes an empty string. Titles
/// without a matching URL are dropped since they cannot be opened.
pub fn parse_opensearch(body: &str) -> Result<Vec<SuggestionItem>, WikiError> {
    let json: Value = serde_json::from_str(body).map_err(|e| WikiError::Parse(e.to_string()))?;

    let parts = json
        .as_array()
        .ok_or_else(|| WikiError::Parse("expected a top-level array".to_string()))?;

    let titles = parts
        .get(1)
        .and_then(Value::as_array)
        .ok_or_else(|| WikiError::Parse("missing titles array".to_string()))?;
    let descriptions = parts.get(2).and_then(Value::as_array);
    let urls = parts
        .get(3)
        .and_then(Value::as_array)
        .ok_or_else(|| WikiError::Parse("missing urls array".to_string()))?;

    let items = titles
        .iter()
        .enumerate()
        .filter_map(|(i, title)| {
            let title = title.as_str()?;
            let url = urls.get(i)?.as_str()?;
            let description = descriptions
                .and_then(|d| d.get(i))
                .and_then(Value::as_str)
                .unwrap_or_default();
            Some(SuggestionItem::new(title, description, url))
        })
        .collect();

    Ok(items)
}
