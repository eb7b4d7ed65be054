// TimeLog Viewer - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every error keeps its cause reachable through `source()` for logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all TimeLog Viewer operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum TimeLogError {
    /// Fetching logs from the backend failed.
    Fetch(FetchError),

    /// Export operation failed.
    Export(ExportError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for TimeLogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(e) => write!(f, "Fetch error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for TimeLogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fetch(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Fetch errors
// ---------------------------------------------------------------------------

/// Errors raised while requesting `/logs` from the backend.
#[derive(Debug)]
pub enum FetchError {
    /// The HTTP client could not be constructed (TLS backend, bad timeout).
    Client { source: reqwest::Error },

    /// The request never produced a response: DNS, refused, timeout.
    Network { url: String, source: reqwest::Error },

    /// The response arrived but its body could not be read.
    Body { url: String, source: reqwest::Error },

    /// The backend answered with a non-2xx status.
    Status {
        url: String,
        status: u16,
        body_preview: String,
    },

    /// The body was not a JSON array of log entries.
    Decode {
        url: String,
        source: serde_json::Error,
    },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client { source } => write!(f, "Cannot create HTTP client: {source}"),
            Self::Network { url, source } => write!(f, "Cannot reach '{url}': {source}"),
            Self::Body { url, source } => {
                write!(f, "Cannot read response body from '{url}': {source}")
            }
            Self::Status {
                url,
                status,
                body_preview,
            } => {
                if body_preview.is_empty() {
                    write!(f, "'{url}' returned HTTP {status}")
                } else {
                    write!(f, "'{url}' returned HTTP {status}: {body_preview}")
                }
            }
            Self::Decode { url, source } => write!(
                f,
                "Response from '{url}' is not a list of log entries: {source}"
            ),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Client { source } => Some(source),
            Self::Network { source, .. } => Some(source),
            Self::Body { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::Status { .. } => None,
        }
    }
}

impl From<FetchError> for TimeLogError {
    fn from(e: FetchError) -> Self {
        Self::Fetch(e)
    }
}

// ---------------------------------------------------------------------------
// Hours errors
// ---------------------------------------------------------------------------

/// Errors computing the worked hours of a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoursError {
    /// A start or end time is not a valid `HH:MM` clock value.
    InvalidClock { value: String },

    /// The end time is earlier than the start time (overnight shifts are
    /// not accepted).
    EndBeforeStart { start: String, end: String },
}

impl fmt::Display for HoursError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidClock { value } => {
                write!(f, "'{value}' is not a valid HH:MM time")
            }
            Self::EndBeforeStart { start, end } => {
                write!(f, "end time {end} is earlier than start time {start}")
            }
        }
    }
}

impl std::error::Error for HoursError {}

// ---------------------------------------------------------------------------
// Filter errors
// ---------------------------------------------------------------------------

/// Errors related to the filter form.
#[derive(Debug)]
pub enum FilterError {
    /// The date filter is not an ISO calendar date.
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate { value, source } => {
                write!(f, "Date filter '{value}' is not YYYY-MM-DD: {source}")
            }
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidDate { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for TimeLogError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// The backend base URL is not an absolute http(s) URL.
    InvalidUrl { value: String, reason: String },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::InvalidUrl { value, reason } => {
                write!(f, "Backend URL '{value}' is invalid: {reason}")
            }
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for TimeLogError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for TimeLog Viewer results.
pub type Result<T> = std::result::Result<T, TimeLogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_top_level_display_prefixes_subsystem() {
        let err: TimeLogError = ConfigError::InvalidUrl {
            value: "ftp://x".to_string(),
            reason: "scheme must be http or https".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Backend URL 'ftp://x' is invalid: scheme must be http or https"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_status_error_without_body() {
        let err = FetchError::Status {
            url: "http://x/logs".to_string(),
            status: 503,
            body_preview: String::new(),
        };
        assert_eq!(err.to_string(), "'http://x/logs' returned HTTP 503");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let source = serde_json::from_str::<Vec<u8>>("{}").unwrap_err();
        let err = FetchError::Decode {
            url: "http://x/logs".to_string(),
            source,
        };
        assert!(err.to_string().contains("not a list of log entries"));
        assert!(err.source().is_some());
    }
}
