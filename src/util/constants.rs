// TimeLog Viewer - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "TimeLog Viewer";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "TimeLogViewer";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Backend
// =============================================================================

/// Backend base URL used when neither the CLI nor config.toml supply one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Path of the only endpoint the viewer talks to, appended to the base URL.
pub const LOGS_PATH: &str = "/logs";

/// Query parameter names, in the order they appear in the query string.
pub const QUERY_KEY_EMPLOYEE: &str = "employee";
pub const QUERY_KEY_PROJECT: &str = "project";
pub const QUERY_KEY_DATE: &str = "date";

/// Whole-request timeout applied to every fetch (seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Minimum user-configurable request timeout (seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum user-configurable request timeout (seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Number of characters of a non-2xx response body kept for the error message.
pub const MAX_ERROR_BODY_PREVIEW: usize = 200;

/// Maximum number of fetch outcomes drained from the channel per UI frame.
pub const MAX_FETCH_MESSAGES_PER_FRAME: usize = 16;

// =============================================================================
// Time formats
// =============================================================================

/// Format of the date filter and of `LogEntry::date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format of `LogEntry::start_time` / `end_time`.
pub const CLOCK_FORMAT: &str = "%H:%M";

// =============================================================================
// Presentation
// =============================================================================

/// Table column headers. Also the CSV export header row.
pub const TABLE_COLUMNS: [&str; 6] = [
    "Employee",
    "Date",
    "Start Time",
    "End Time",
    "Task",
    "Project",
];

/// Shown in place of the table or the charts when no logs are loaded.
pub const EMPTY_STATE_MESSAGE: &str = "No logs found.";

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
