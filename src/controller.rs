//! Search interaction controller
//!
//! Owns the suggestion list, the debouncer and the detail view, and turns
//! discrete input events into state changes plus [`Command`]s for the
//! application shell to execute. Nothing in here performs I/O.
//!
//! Every dispatched search gets a fresh sequence number. A search response
//! is applied only while its number is the one still awaited; clearing the
//! list (Escape, outside click, short query, selection) stops awaiting, so
//! late responses can never bring a dismissed list back.

use std::time::{Duration, Instant};

use crate::config::{Config, SelectionAction};
use crate::detail::DetailState;
use crate::suggestions::{Debouncer, SuggestionListState};
use crate::wiki::SuggestionItem;
use crate::worker::{FetchRequest, FetchResponse};

/// Input the controller understands, independent of the terminal backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The query text changed
    Input(String),
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    /// The search input regained focus
    Focus,
    /// Click anywhere outside the input and its popup
    OutsideClick,
    /// Click on a suggestion row
    Click(usize),
    /// Leave the detail view
    Back,
}

/// Side effects requested by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Fetch(FetchRequest),
    OpenUrl(String),
}

/// Which body is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    List,
    Detail,
}

/// Last successful result set, kept for re-showing on focus
#[derive(Debug, Clone, PartialEq, Eq)]
struct RecentResults {
    query: String,
    items: Vec<SuggestionItem>,
}

#[derive(Debug, Clone)]
pub struct SearchController {
    action: SelectionAction,
    min_query_chars: usize,
    refetch_on_focus: bool,
    debouncer: Debouncer,
    list: SuggestionListState,
    detail: DetailState,
    view: View,
    /// Trimmed text of the input as last reported
    query: String,
    recent: Option<RecentResults>,
    search_seq: u64,
    /// Sequence number and query of the search whose answer is wanted
    awaiting: Option<(u64, String)>,
    article_seq: u64,
}

impl SearchController {
    pub fn new(
        action: SelectionAction,
        debounce_ms: u64,
        min_query_chars: usize,
        refetch_on_focus: bool,
    ) -> Self {
        Self {
            action,
            min_query_chars,
            refetch_on_focus,
            debouncer: Debouncer::new(debounce_ms),
            list: SuggestionListState::new(),
            detail: DetailState::new(),
            view: View::List,
            query: String::new(),
            recent: None,
            search_seq: 0,
            awaiting: None,
            article_seq: 0,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.selection.action,
            config.search.debounce_ms,
            config.search.min_query_chars,
            config.selection.refetch_on_focus,
        )
    }

    pub fn action(&self) -> SelectionAction {
        self.action
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn list(&self) -> &SuggestionListState {
        &self.list
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    pub fn detail_mut(&mut self) -> &mut DetailState {
        &mut self.detail
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// A search is waiting on the debouncer or on the network
    pub fn is_searching(&self) -> bool {
        self.debouncer.is_pending() || self.awaiting.is_some()
    }

    /// How long the event loop may sleep before [`tick`](Self::tick) has work
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_due(now)
    }

    /// URL of whatever the user is looking at: the open article, or the
    /// suggestion Enter would pick
    pub fn current_url(&self) -> Option<&str> {
        match self.view {
            View::Detail => self.detail.article().map(|a| a.url.as_str()),
            View::List => self.list.current().map(|item| item.url.as_str()),
        }
    }

    pub fn handle(&mut self, event: InputEvent) -> Option<Command> {
        self.handle_at(event, Instant::now())
    }

    /// Apply one input event at time `now`
    pub fn handle_at(&mut self, event: InputEvent, now: Instant) -> Option<Command> {
        match event {
            InputEvent::Input(text) => {
                if self.view == View::Detail {
                    self.go_back();
                }
                self.on_input(&text, now);
                None
            }
            InputEvent::ArrowDown => {
                match self.view {
                    View::Detail => self.detail.scroll.scroll_down(1),
                    View::List => self.list.move_down(),
                }
                None
            }
            InputEvent::ArrowUp => {
                match self.view {
                    View::Detail => self.detail.scroll.scroll_up(1),
                    View::List => self.list.move_up(),
                }
                None
            }
            InputEvent::Enter => match self.view {
                View::List => self.select_current(),
                View::Detail => None,
            },
            InputEvent::Escape => {
                match self.view {
                    View::Detail => self.go_back(),
                    View::List => self.dismiss(),
                }
                None
            }
            InputEvent::Focus => {
                self.on_focus(now);
                None
            }
            InputEvent::OutsideClick => {
                self.dismiss();
                None
            }
            InputEvent::Click(index) => {
                if self.view != View::List || index >= self.list.len() {
                    return None;
                }
                self.list.set_active(index);
                self.select_current()
            }
            InputEvent::Back => {
                self.go_back();
                None
            }
        }
    }

    /// Fire the debounced search once its quiet period is over
    pub fn tick(&mut self, now: Instant) -> Option<Command> {
        let query = self.debouncer.take_due(now)?;
        Some(self.dispatch_search(query))
    }

    /// Fire the pending search immediately
    pub fn flush(&mut self) -> Option<Command> {
        let query = self.debouncer.flush()?;
        Some(self.dispatch_search(query))
    }

    /// Apply a worker response, discarding stale ones
    pub fn apply(&mut self, response: FetchResponse) {
        match response {
            FetchResponse::Search { seq, items } => {
                let Some(query) = self.take_awaited(seq) else {
                    log::debug!("Discarding stale search #{}", seq);
                    return;
                };
                self.recent = (!items.is_empty()).then(|| RecentResults {
                    query,
                    items: items.clone(),
                });
                self.list.render(items);
            }
            FetchResponse::SearchFailed { seq, error } => {
                if self.take_awaited(seq).is_none() {
                    log::debug!("Discarding stale search failure #{}: {}", seq, error);
                    return;
                }
                self.list.clear();
                self.recent = None;
            }
            FetchResponse::Article { seq, extract } => {
                if !self.detail.resolve(seq, extract) {
                    log::debug!("Discarding stale article #{}", seq);
                }
            }
            FetchResponse::ArticleFailed { seq, error } => {
                if !self.detail.fail(seq) {
                    log::debug!("Discarding stale article failure #{}: {}", seq, error);
                }
            }
        }
    }

    /// Invoke the selection action on the current item and clear the list
    ///
    /// Does nothing on an empty list.
    pub fn select_current(&mut self) -> Option<Command> {
        let item = self.list.select_current()?;
        self.debouncer.cancel();
        self.awaiting = None;

        match self.action {
            SelectionAction::Detail => Some(self.show_detail(item.title, item.url)),
            SelectionAction::Browser => Some(Command::OpenUrl(item.url)),
        }
    }

    /// Switch to the detail view and request the article extract
    pub fn show_detail(&mut self, title: String, url: String) -> Command {
        self.article_seq += 1;
        let seq = self.article_seq;

        self.detail.open(title.clone(), url, seq);
        self.view = View::Detail;

        Command::Fetch(FetchRequest::Article { title, seq })
    }

    /// Return to the list view, dropping the article
    pub fn go_back(&mut self) {
        self.detail.close();
        self.view = View::List;
    }

    fn on_input(&mut self, text: &str, now: Instant) {
        let query = text.trim();
        self.query = query.to_string();

        if query.chars().count() < self.min_query_chars.max(1) {
            self.dismiss();
            self.recent = None;
            return;
        }

        self.debouncer.schedule_at(query, now);
    }

    fn on_focus(&mut self, now: Instant) {
        if self.action != SelectionAction::Browser || self.view != View::List {
            return;
        }
        if !self.list.is_empty() || self.is_searching() {
            return;
        }

        match &self.recent {
            Some(recent) if recent.query == self.query => {
                self.list.render(recent.items.clone());
                if self.refetch_on_focus {
                    self.debouncer.schedule_at(self.query.clone(), now);
                }
            }
            _ if self.query.chars().count() >= self.min_query_chars.max(1) => {
                self.debouncer.schedule_at(self.query.clone(), now);
            }
            _ => {}
        }
    }

    /// Clear the list and forget any pending or awaited search
    fn dismiss(&mut self) {
        self.debouncer.cancel();
        self.awaiting = None;
        self.list.clear();
    }

    fn dispatch_search(&mut self, query: String) -> Command {
        self.search_seq += 1;
        let seq = self.search_seq;
        self.awaiting = Some((seq, query.clone()));
        Command::Fetch(FetchRequest::Search { query, seq })
    }

    fn take_awaited(&mut self, seq: u64) -> Option<String> {
        match &self.awaiting {
            Some((awaited, _)) if *awaited == seq => self.awaiting.take().map(|(_, q)| q),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
