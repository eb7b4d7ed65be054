// TimeLog Viewer - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for TimeLog Viewer configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/timelogviewer/ or %APPDATA%\TimeLogViewer\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[backend]` section.
    pub backend: BackendSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[backend]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct BackendSection {
    /// Base URL the `/logs` path is appended to.
    pub base_url: Option<String>,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: Option<u64>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce warnings and fall back to defaults field by field.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    // -- Backend --
    pub base_url: String,
    pub request_timeout_secs: u64,

    // -- UI --
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    pub font_size: f32,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: constants::DEFAULT_REQUEST_TIMEOUT_SECS,
            dark_mode: true,
            font_size: constants::DEFAULT_FONT_SIZE,
            log_level: None,
        }
    }
}

/// Check that `value` is an absolute http(s) URL.
pub fn validate_base_url(value: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        value: value.to_string(),
        reason,
    };
    let parsed = url::Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{other}'"))),
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    if parsed.query().is_some() {
        return Err(invalid("must not contain a query string".to_string()));
    }
    Ok(())
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first run).
/// If the file is unreadable or unparseable, returns defaults with a warning.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(source) => {
            let err = ConfigError::Io {
                path: config_path.clone(),
                source,
            };
            tracing::warn!(error = %err, "Could not read config file; using defaults");
            return (AppConfig::default(), vec![format!("{err}. Using defaults.")]);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(source) => {
            let err = ConfigError::TomlParse {
                path: config_path.clone(),
                source,
            };
            tracing::warn!(error = %err, "Could not parse config file; using defaults");
            return (AppConfig::default(), vec![format!("{err}. Using defaults.")]);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");
    validate(raw)
}

/// Validate each field of a parsed config, accumulating all problems.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut warnings: Vec<String> = Vec::new();

    let mut out_of_range = |field: &str, value: String, expected: String, default: String| {
        let err = ConfigError::ValueOutOfRange {
            field: field.to_string(),
            value,
            expected,
        };
        warnings.push(format!("{err}. Using default ({default})."));
    };

    // -- Backend: base_url --
    if let Some(base_url) = raw.backend.base_url {
        match validate_base_url(&base_url) {
            Ok(()) => config.base_url = base_url,
            Err(err) => out_of_range(
                "backend.base_url",
                base_url,
                err.to_string(),
                constants::DEFAULT_BASE_URL.to_string(),
            ),
        }
    }

    // -- Backend: request_timeout_secs --
    if let Some(secs) = raw.backend.request_timeout_secs {
        if (constants::MIN_REQUEST_TIMEOUT_SECS..=constants::MAX_REQUEST_TIMEOUT_SECS)
            .contains(&secs)
        {
            config.request_timeout_secs = secs;
        } else {
            out_of_range(
                "backend.request_timeout_secs",
                secs.to_string(),
                format!(
                    "{}-{}",
                    constants::MIN_REQUEST_TIMEOUT_SECS,
                    constants::MAX_REQUEST_TIMEOUT_SECS
                ),
                constants::DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
            );
        }
    }

    // -- UI: theme --
    if let Some(theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            _ => out_of_range(
                "ui.theme",
                theme,
                "\"dark\" or \"light\"".to_string(),
                "dark".to_string(),
            ),
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            out_of_range(
                "ui.font_size",
                size.to_string(),
                format!("{}-{}", constants::MIN_FONT_SIZE, constants::MAX_FONT_SIZE),
                constants::DEFAULT_FONT_SIZE.to_string(),
            );
        }
    }

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level);
        } else {
            out_of_range(
                "logging.level",
                level,
                constants::VALID_LOG_LEVELS.join(", "),
                constants::DEFAULT_LOG_LEVEL.to_string(),
            );
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}
