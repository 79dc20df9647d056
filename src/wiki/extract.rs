//! Article extract parsing
//!
//! `prop=extracts` answers with `{"query":{"pages":{"<id>":{"extract":"<p>...</p>"}}}}`.
//! The HTML is flattened to plain text for the terminal.

use scraper::{Html, Node};
use serde_json::Value;

use super::WikiError;

/// Elements that start a new paragraph in the flattened text
const BLOCK_ELEMENTS: &[&str] = &[
    "p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "li", "ul", "ol", "dl", "dt", "dd", "table",
    "tr", "blockquote", "pre",
];

/// Extract the first page's `extract` field
///
/// Returns `Ok(None)` for a page without extract (missing or empty article).
pub fn parse_extract(body: &str) -> Result<Option<String>, WikiError> {
    let json: Value = serde_json::from_str(body).map_err(|e| WikiError::Parse(e.to_string()))?;

    let pages = json
        .get("query")
        .and_then(|q| q.get("pages"))
        .and_then(Value::as_object)
        .ok_or_else(|| WikiError::Parse("missing query.pages object".to_string()))?;

    let extract = pages
        .values()
        .next()
        .and_then(|page| page.get("extract"))
        .and_then(Value::as_str)
        .map(html_to_text)
        .filter(|text| !text.is_empty());

    Ok(extract)
}

/// Flatten an HTML fragment into paragraphs of plain text
pub fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut text = String::new();

    for node in fragment.root_element().descendants() {
        match node.value() {
            Node::Text(t) => text.push_str(t),
            Node::Element(el) if el.name() == "br" => text.push('\n'),
            Node::Element(el) if BLOCK_ELEMENTS.contains(&el.name()) => {
                if !text.is_empty() {
                    text.push_str("\n\n");
                }
            }
            _ => {}
        }
    }

    normalise_whitespace(&text)
}

/// Collapse runs of spaces inside lines and runs of blank lines between paragraphs
fn normalise_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0;

    for line in text.lines() {
        let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            blank_run += 1;
            continue;
        }
        if !out.is_empty() {
            out.push_str(if blank_run > 0 { "\n\n" } else { "\n" });
        }
        out.push_str(&collapsed);
        blank_run = 0;
    }

    out
}
