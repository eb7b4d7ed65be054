// TimeLog Viewer - util/logging.rs
//
// tracing subscriber setup. The level comes from the first of RUST_LOG,
// `--debug`, or `[logging] level` in config.toml that is set; otherwise
// "info". Everything goes to stderr in the compact format.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Safe to call more than once.
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let env_set = std::env::var("RUST_LOG").is_ok();
    let filter = match directive(env_set, debug_flag, config_level) {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::from_default_env(),
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .try_init()
        .is_ok();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        installed,
        "Logging initialised"
    );
}

/// Level directive to use, or `None` to defer to RUST_LOG.
fn directive(env_set: bool, debug_flag: bool, config_level: Option<&str>) -> Option<&str> {
    if env_set {
        None
    } else if debug_flag {
        Some("debug")
    } else {
        Some(config_level.unwrap_or(super::constants::DEFAULT_LOG_LEVEL))
    }
}
