// TimeLog Viewer - app/state.rs
//
// View state and its reducer. `ViewState` is never mutated in place: every
// user action or fetch completion is a `ViewEvent`, and `reduce` maps
// (state, event) to the next state.
//
// Stale-response guard: each fetch carries the request id it was issued
// with. Only the outcome of the latest issued request is applied.

use crate::core::model::{LogEntry, LogFilter, ViewTab};

/// Progress of the most recent load.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadStatus {
    /// Nothing has been requested yet.
    #[default]
    Idle,

    /// Waiting for the response to `request_id`.
    Loading { request_id: u64 },

    /// The latest request succeeded with `count` entries.
    Loaded { count: usize },

    /// The latest request failed.
    Failed { message: String },
}

/// Discrete transitions of the viewer.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    EmployeeEdited(String),
    ProjectEdited(String),
    DateEdited(String),
    TabSelected(ViewTab),

    /// A request was handed to the fetch worker.
    FetchIssued { request_id: u64 },

    FetchSucceeded {
        request_id: u64,
        entries: Vec<LogEntry>,
    },

    FetchFailed { request_id: u64, message: String },

    /// The filter could not be sent (e.g. malformed date); no request issued.
    /// An outstanding request keeps running and its outcome still applies.
    FilterRejected { message: String },
}

/// Everything the UI renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Current filter form values.
    pub filter: LogFilter,

    /// Current display mode.
    pub tab: ViewTab,

    /// Entries from the most recent successful fetch, in backend order.
    pub entries: Vec<LogEntry>,

    pub status: LoadStatus,

    /// Id of the most recently issued request (0 = none yet).
    pub latest_request: u64,

    /// Why the last Load Logs was refused. Cleared by a filter edit or the
    /// next issued request; independent of `status`.
    pub filter_error: Option<String>,
}

impl ViewState {
    /// Initial state with the filter form pre-populated.
    pub fn with_filter(filter: LogFilter) -> Self {
        Self {
            filter,
            ..Default::default()
        }
    }

    /// Apply one event and return the resulting state.
    pub fn reduce(self, event: ViewEvent) -> Self {
        match event {
            ViewEvent::EmployeeEdited(employee) => Self {
                filter: LogFilter {
                    employee,
                    ..self.filter
                },
                filter_error: None,
                ..self
            },
            ViewEvent::ProjectEdited(project) => Self {
                filter: LogFilter {
                    project,
                    ..self.filter
                },
                filter_error: None,
                ..self
            },
            ViewEvent::DateEdited(date) => Self {
                filter: LogFilter { date, ..self.filter },
                filter_error: None,
                ..self
            },
            ViewEvent::TabSelected(tab) => Self { tab, ..self },
            ViewEvent::FetchIssued { request_id } => Self {
                status: LoadStatus::Loading { request_id },
                latest_request: request_id,
                filter_error: None,
                ..self
            },
            ViewEvent::FetchSucceeded {
                request_id,
                entries,
            } => {
                if !self.is_current(request_id) {
                    return self;
                }
                Self {
                    status: LoadStatus::Loaded {
                        count: entries.len(),
                    },
                    entries,
                    ..self
                }
            }
            ViewEvent::FetchFailed {
                request_id,
                message,
            } => {
                if !self.is_current(request_id) {
                    return self;
                }
                Self {
                    status: LoadStatus::Failed { message },
                    ..self
                }
            }
            ViewEvent::FilterRejected { message } => Self {
                filter_error: Some(message),
                ..self
            },
        }
    }

    /// Whether an outcome for `request_id` should still be applied.
    fn is_current(&self, request_id: u64) -> bool {
        if request_id != self.latest_request {
            tracing::debug!(
                request_id,
                latest = self.latest_request,
                "Discarding stale fetch outcome"
            );
            return false;
        }
        true
    }

    /// Whether a request is outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading { .. })
    }

    /// Whether the status bar should show an error.
    pub fn has_error(&self) -> bool {
        self.filter_error.is_some() || matches!(self.status, LoadStatus::Failed { .. })
    }

    /// One-line summary for the status bar.
    pub fn status_line(&self) -> String {
        if let Some(message) = &self.filter_error {
            return format!("Invalid filter: {message}");
        }
        match &self.status {
            LoadStatus::Idle => "Ready. Set filters and press Load Logs.".to_string(),
            LoadStatus::Loading { .. } => "Loading logs...".to_string(),
            LoadStatus::Loaded { count: 1 } => "Loaded 1 entry.".to_string(),
            LoadStatus::Loaded { count } => format!("Loaded {count} entries."),
            LoadStatus::Failed { message } => format!("Failed to load logs: {message}"),
        }
    }
}
