// TimeLog Viewer - app/fetch.rs
//
// Fetch lifecycle management. Each request runs on its own background
// thread and reports its outcome to the UI thread via an mpsc channel.
//
// Architecture:
//   - `FetchManager` lives on the UI thread and hands out request ids.
//   - Every worker thread owns a clone of the sender and sends exactly one
//     `FetchOutcome`, tagged with its request id.
//   - Requests are never cancelled. Ordering is enforced downstream by the
//     reducer, which ignores outcomes that are not for the latest id.

use crate::app::client::LogSource;
use crate::app::state::ViewEvent;
use crate::core::model::{LogEntry, LogFilter};
use crate::util::error::FetchError;
use std::sync::{mpsc, Arc};

/// Result of one request, as delivered to the UI thread.
#[derive(Debug)]
pub struct FetchOutcome {
    pub request_id: u64,
    pub result: Result<Vec<LogEntry>, FetchError>,
}

impl FetchOutcome {
    /// Convert into the reducer event for this outcome.
    pub fn into_event(self) -> ViewEvent {
        match self.result {
            Ok(entries) => ViewEvent::FetchSucceeded {
                request_id: self.request_id,
                entries,
            },
            Err(e) => ViewEvent::FetchFailed {
                request_id: self.request_id,
                message: e.to_string(),
            },
        }
    }
}

/// Spawns fetches and collects their outcomes.
pub struct FetchManager {
    source: Arc<dyn LogSource>,
    outcome_tx: mpsc::Sender<FetchOutcome>,
    outcome_rx: mpsc::Receiver<FetchOutcome>,
    next_request_id: u64,
}

impl FetchManager {
    pub fn new(source: Arc<dyn LogSource>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::channel();
        Self {
            source,
            outcome_tx,
            outcome_rx,
            next_request_id: 1,
        }
    }

    /// Start a fetch for `filter` on a background thread.
    ///
    /// Returns the request id immediately. Ids increase monotonically.
    pub fn start_fetch(&mut self, filter: LogFilter) -> u64 {
        let request_id = self.next_request_id;
        self.next_request_id += 1;

        let source = Arc::clone(&self.source);
        let tx = self.outcome_tx.clone();

        std::thread::spawn(move || {
            let result = source.fetch_logs(&filter);
            if let Err(ref e) = result {
                tracing::warn!(request_id, error = %e, "Fetch failed");
            }
            // Receiver dropped means the UI closed; nothing left to do.
            let _ = tx.send(FetchOutcome { request_id, result });
        });

        tracing::info!(request_id, "Fetch started");
        request_id
    }

    /// Drain up to `max` completed outcomes without blocking.
    pub fn poll_outcomes(&self, max: usize) -> Vec<FetchOutcome> {
        self.outcome_rx.try_iter().take(max).collect()
    }
}
