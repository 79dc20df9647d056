//! Inline article view state
//!
//! An article is opened in `Loading` and settles exactly once into
//! `Loaded`, `Unavailable` or `Failed`. Responses for any other request
//! sequence number are ignored.

use crate::scroll::ScrollState;

/// What the detail body currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailContent {
    Loading,
    Loaded(String),
    /// The page had no extract
    Unavailable,
    /// The fetch failed
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub content: DetailContent,
    seq: u64,
}

#[derive(Debug, Clone, Default)]
pub struct DetailState {
    article: Option<Article>,
    pub scroll: ScrollState,
}

impl DetailState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `title` in the loading state for request `seq`
    pub fn open(&mut self, title: impl Into<String>, url: impl Into<String>, seq: u64) {
        self.article = Some(Article {
            title: title.into(),
            url: url.into(),
            content: DetailContent::Loading,
            seq,
        });
        self.scroll.reset();
    }

    /// Drop the article and its content
    pub fn close(&mut self) {
        self.article = None;
        self.scroll.reset();
    }

    pub fn article(&self) -> Option<&Article> {
        self.article.as_ref()
    }

    /// Article together with its scroll position, for rendering
    pub fn article_and_scroll(&mut self) -> Option<(&Article, &mut ScrollState)> {
        let scroll = &mut self.scroll;
        self.article.as_ref().map(|article| (article, scroll))
    }

    pub fn is_open(&self) -> bool {
        self.article.is_some()
    }

    pub fn is_loading(&self) -> bool {
        matches!(
            self.article,
            Some(Article {
                content: DetailContent::Loading,
                ..
            })
        )
    }

    /// Apply a finished fetch; returns false when `seq` is not the open request
    pub fn resolve(&mut self, seq: u64, extract: Option<String>) -> bool {
        let content = match extract {
            Some(text) if !text.trim().is_empty() => DetailContent::Loaded(text),
            _ => DetailContent::Unavailable,
        };
        self.settle(seq, content)
    }

    /// Apply a failed fetch; returns false when `seq` is not the open request
    pub fn fail(&mut self, seq: u64) -> bool {
        self.settle(seq, DetailContent::Failed)
    }

    fn settle(&mut self, seq: u64, content: DetailContent) -> bool {
        match &mut self.article {
            Some(article) if article.seq == seq && article.content == DetailContent::Loading => {
                article.content = content;
                true
            }
            _ => false,
        }
    }
}
