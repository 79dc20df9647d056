// Configuration type definitions

use serde::Deserialize;

use crate::error::WiqError;

pub const DEFAULT_LANG: &str = "en";
pub const DEFAULT_LIMIT: u32 = 8;
pub const DEFAULT_DEBOUNCE_MS: u64 = 250;
pub const DEFAULT_MIN_QUERY_CHARS: usize = 2;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Largest `limit` the OpenSearch API honours for anonymous clients
pub const MAX_LIMIT: u32 = 500;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// What happens when a suggestion is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SelectionAction {
    /// Show the article extract inside the terminal
    #[default]
    Detail,
    /// Open the article in the system browser
    Browser,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// Search endpoint and debounce settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Encyclopedia language code, also picks the UI message table
    pub lang: String,
    /// Full API URL override; derived from `lang` when absent
    pub endpoint: Option<String>,
    pub limit: u32,
    pub debounce_ms: u64,
    pub min_query_chars: usize,
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG.to_string(),
            endpoint: None,
            limit: DEFAULT_LIMIT,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl SearchConfig {
    /// API URL used for both search and article requests
    pub fn endpoint_url(&self) -> String {
        match self.endpoint.as_deref().map(str::trim) {
            Some(endpoint) if !endpoint.is_empty() => endpoint.to_string(),
            _ => format!("https://{}.wikipedia.org/w/api.php", self.lang.trim()),
        }
    }

    /// Reject values that would make searching impossible
    pub fn validate(&self) -> Result<(), WiqError> {
        if self.limit == 0 || self.limit > MAX_LIMIT {
            return Err(WiqError::Config(format!(
                "search.limit must be between 1 and {}, got {}",
                MAX_LIMIT, self.limit
            )));
        }
        if self.min_query_chars == 0 {
            return Err(WiqError::Config(
                "search.min_query_chars must be at least 1".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(WiqError::Config(
                "search.timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.endpoint.is_none() && !is_language_code(self.lang.trim()) {
            return Err(WiqError::Config(format!(
                "search.lang '{}' is not a language code",
                self.lang
            )));
        }
        Ok(())
    }
}

fn is_language_code(lang: &str) -> bool {
    !lang.is_empty()
        && lang
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Selection behaviour section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub action: SelectionAction,
    /// Re-run the search when the input regains focus in browser mode
    pub refetch_on_focus: bool,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}
