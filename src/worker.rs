//! Fetch Worker Thread
//!
//! Runs encyclopedia requests on a background thread so the UI never blocks.
//! Every request becomes its own task on a current-thread Tokio runtime, so
//! several searches can be in flight at once and may finish out of order.
//! Responses carry the sequence number of their request; deciding which
//! ones are stale is the caller's job.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use crate::wiki::{SuggestionItem, WikiApi, WikiError};

/// Request messages sent to the worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// Fetch suggestions for a query
    Search { query: String, seq: u64 },
    /// Fetch the extract of an article
    Article { title: String, seq: u64 },
}

/// Response messages received from the worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResponse {
    Search {
        seq: u64,
        items: Vec<SuggestionItem>,
    },
    SearchFailed {
        seq: u64,
        error: WikiError,
    },
    Article {
        seq: u64,
        extract: Option<String>,
    },
    ArticleFailed {
        seq: u64,
        error: WikiError,
    },
}

/// Handle to a running worker thread
///
/// Dropping the handle cancels the worker; the thread is left to wind down
/// on its own.
pub struct Fetcher {
    request_tx: UnboundedSender<FetchRequest>,
    response_rx: Receiver<FetchResponse>,
    cancel: CancellationToken,
}

impl Fetcher {
    /// Spawn a worker serving requests with `api`
    pub fn spawn<A: WikiApi + 'static>(api: A) -> Self {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        let cancel = CancellationToken::new();

        spawn_worker(api, request_rx, response_tx, cancel.clone());

        Self {
            request_tx,
            response_rx,
            cancel,
        }
    }

    /// Stop the worker; queued and in-flight requests are dropped
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    /// Queue a request; returns false if the worker is gone
    pub fn send(&self, request: FetchRequest) -> bool {
        self.request_tx.send(request).is_ok()
    }

    /// Drain every response that has arrived so far without blocking
    pub fn poll(&self) -> Vec<FetchResponse> {
        self.response_rx.try_iter().collect()
    }

    #[cfg(test)]
    pub fn recv_timeout(&self, timeout: std::time::Duration) -> Option<FetchResponse> {
        self.response_rx.recv_timeout(timeout).ok()
    }
}

impl Drop for Fetcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Spawn the worker thread
///
/// The thread owns a current-thread Tokio runtime and runs until the
/// request channel closes or `cancel` fires. Tasks still in flight at that
/// point are dropped with the runtime.
pub fn spawn_worker<A: WikiApi + 'static>(
    api: A,
    request_rx: UnboundedReceiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                log::error!("Failed to start fetch runtime: {}", e);
                fail_all(request_rx, &response_tx, &e.to_string());
                return;
            }
        };

        runtime.block_on(worker_loop(Arc::new(api), request_rx, response_tx, cancel));
        log::debug!("Fetch worker thread shutting down");
    })
}

/// Main worker loop - spawns one task per request until cancelled
async fn worker_loop<A: WikiApi + 'static>(
    api: Arc<A>,
    mut request_rx: UnboundedReceiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
    cancel: CancellationToken,
) {
    loop {
        tokio::select! {
            biased;

            _ = cancel.cancelled() => break,
            request = request_rx.recv() => {
                let Some(request) = request else { break };
                let api = Arc::clone(&api);
                let response_tx = response_tx.clone();

                tokio::spawn(async move {
                    let response = handle_request(api.as_ref(), request).await;
                    // Receiver gone means the UI has shut down
                    let _ = response_tx.send(response);
                });
            }
        }
    }
}

/// Run a single request, downgrading errors into failure responses
async fn handle_request<A: WikiApi>(api: &A, request: FetchRequest) -> FetchResponse {
    match request {
        FetchRequest::Search { query, seq } => {
            log::debug!("Search #{} for {:?}", seq, query);
            match api.search(&query).await {
                Ok(items) => FetchResponse::Search { seq, items },
                Err(error) => {
                    log::warn!("Search #{} failed: {}", seq, error);
                    FetchResponse::SearchFailed { seq, error }
                }
            }
        }
        FetchRequest::Article { title, seq } => {
            log::debug!("Article #{} for {:?}", seq, title);
            match api.extract(&title).await {
                Ok(extract) => FetchResponse::Article { seq, extract },
                Err(error) => {
                    log::warn!("Article #{} failed: {}", seq, error);
                    FetchResponse::ArticleFailed { seq, error }
                }
            }
        }
    }
}

/// Answer every queued request with a failure when no runtime is available
fn fail_all(
    mut request_rx: UnboundedReceiver<FetchRequest>,
    response_tx: &Sender<FetchResponse>,
    reason: &str,
) {
    while let Some(request) = request_rx.blocking_recv() {
        let error = WikiError::Network(reason.to_string());
        let response = match request {
            FetchRequest::Search { seq, .. } => FetchResponse::SearchFailed { seq, error },
            FetchRequest::Article { seq, .. } => FetchResponse::ArticleFailed { seq, error },
        };
        if response_tx.send(response).is_err() {
            return;
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
