use std::time::{Duration, Instant};

use crate::config::{ClipboardBackend, Config};
use crate::controller::{Command, InputEvent, SearchController};
use crate::input::InputState;
use crate::layout::LayoutRegions;
use crate::locale::{Locale, Messages};
use crate::notification::NotificationState;
use crate::opener::{self, UrlOpener};
use crate::wiki::WikiError;
use crate::worker::{FetchRequest, FetchResponse, Fetcher};

/// Upper bound on how long the event loop waits for terminal input
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct App {
    pub input: InputState,
    pub controller: SearchController,
    pub layout_regions: LayoutRegions,
    pub notification: NotificationState,
    pub messages: &'static Messages,
    pub clipboard_backend: ClipboardBackend,
    pub should_quit: bool,
    fetcher: Fetcher,
    opener: UrlOpener,
}

impl App {
    pub fn new(config: &Config, fetcher: Fetcher) -> Self {
        Self {
            input: InputState::new(),
            controller: SearchController::from_config(config),
            layout_regions: LayoutRegions::new(),
            notification: NotificationState::new(),
            messages: Locale::from_lang(&config.search.lang).messages(),
            clipboard_backend: config.clipboard.backend,
            should_quit: false,
            fetcher,
            opener: opener::system_opener(),
        }
    }

    /// Replace how article URLs are shown in the browser
    pub fn with_opener(mut self, opener: UrlOpener) -> Self {
        self.opener = opener;
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn query(&self) -> &str {
        self.input.query()
    }

    /// Put `text` in the input and search for it without waiting for the debounce
    pub fn set_query(&mut self, text: &str) {
        self.input.set_text(text);
        let query = self.input.query().to_string();
        self.dispatch(InputEvent::Input(query));
        if let Some(command) = self.controller.flush() {
            self.execute(command);
        }
    }

    /// Feed one event to the controller and run whatever it asks for
    pub fn dispatch(&mut self, event: InputEvent) {
        if let Some(command) = self.controller.handle(event) {
            self.execute(command);
        }
    }

    /// Drain worker responses, fire due searches and expire notifications
    pub fn tick(&mut self, now: Instant) {
        for response in self.fetcher.poll() {
            self.controller.apply(response);
        }

        if let Some(command) = self.controller.tick(now) {
            self.execute(command);
        }

        self.notification.expire(now);
    }

    /// How long the event loop may block before the next [`tick`](Self::tick)
    pub fn next_timeout(&self, now: Instant) -> Duration {
        self.controller
            .time_until_due(now)
            .map_or(POLL_INTERVAL, |due| due.min(POLL_INTERVAL))
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::Fetch(request) => {
                if !self.fetcher.send(request.clone()) {
                    log::warn!("Fetch worker is gone, failing request");
                    self.controller.apply(worker_gone(request));
                }
            }
            Command::OpenUrl(url) => {
                if let Err(e) = (self.opener)(&url) {
                    log::warn!("{}", e);
                    self.notification.show_error(self.messages.open_failed);
                }
            }
        }
    }
}

fn worker_gone(request: FetchRequest) -> FetchResponse {
    let error = WikiError::Network("fetch worker stopped".to_string());
    match request {
        FetchRequest::Search { seq, .. } => FetchResponse::SearchFailed { seq, error },
        FetchRequest::Article { seq, .. } => FetchResponse::ArticleFailed { seq, error },
    }
}
