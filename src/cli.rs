//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, SelectionAction};

/// Search Wikipedia interactively with live suggestions
#[derive(Parser, Debug, Default)]
#[command(name = "wiq", version, about)]
pub struct Args {
    /// Initial query, searched as soon as the UI starts
    pub query: Option<String>,

    /// Wikipedia language code (en, es, fr, de, ...)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// What selecting a suggestion does
    #[arg(short, long, value_enum)]
    pub open: Option<SelectionAction>,

    /// Quiet period after typing before a search is sent
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Path to the TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Apply flags on top of values loaded from the config file
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(lang) = &self.lang {
            config.search.lang = lang.clone();
        }
        if let Some(action) = self.open {
            config.selection.action = action;
        }
        if let Some(ms) = self.debounce_ms {
            config.search.debounce_ms = ms;
        }
    }

    /// Initial query with surrounding whitespace removed; blank means none
    pub fn initial_query(&self) -> Option<&str> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }
}
