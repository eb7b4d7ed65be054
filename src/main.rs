// TimeLog Viewer - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation
// 3. HTTP client construction for the configured backend
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::core::...` etc.
pub use timelog_viewer::app;
pub use timelog_viewer::core;
pub use timelog_viewer::platform;
pub use timelog_viewer::ui;
pub use timelog_viewer::util;

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use util::error::{Result, TimeLogError};

/// TimeLog Viewer - browse a time-logging backend as a table or as
/// hours-per-employee and hours-per-project charts.
#[derive(Parser, Debug)]
#[command(name = "timelog-viewer", version, about)]
struct Cli {
    /// Backend base URL; `/logs` is appended (overrides config.toml).
    #[arg(short = 'u', long = "base-url")]
    base_url: Option<String>,

    /// Pre-fill the employee filter.
    #[arg(short = 'e', long)]
    employee: Option<String>,

    /// Pre-fill the project filter.
    #[arg(short = 'p', long)]
    project: Option<String>,

    /// Pre-fill the date filter (YYYY-MM-DD).
    #[arg(long)]
    date: Option<String>,

    /// Directory containing config.toml (defaults to the platform config dir).
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging exists; its warnings are logged below.
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_dir);
    let (mut config, mut warnings) = platform::config::load_config(&config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "TimeLog Viewer starting"
    );

    for warning in &warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    let source = match backend_source(cli.base_url, &mut config) {
        Ok(source) => source,
        Err(e) => {
            tracing::error!(error = %e, "Backend setup failed");
            eprintln!("Error: {e}");
            let code = match e {
                TimeLogError::Config(_) => 2,
                _ => 1,
            };
            std::process::exit(code);
        }
    };
    tracing::info!(base_url = %source.base_url(), "Backend configured");

    let filter = core::model::LogFilter {
        employee: cli.employee.unwrap_or_default(),
        project: cli.project.unwrap_or_default(),
        date: cli.date.unwrap_or_default(),
    };
    let view = app::state::ViewState::with_filter(filter);
    let fetch_manager = app::fetch::FetchManager::new(Arc::new(source));

    let notice = match warnings.len() {
        0 => None,
        1 => warnings.pop(),
        n => Some(format!("{n} configuration warnings; see log output.")),
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([720.0, 420.0]),
        ..Default::default()
    };

    let dark_mode = config.dark_mode;
    let font_size = config.font_size;

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, dark_mode, font_size);
            Ok(Box::new(gui::TimeLogApp::new(view, fetch_manager, notice)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch TimeLog Viewer GUI: {e}");
        std::process::exit(1);
    }
}

/// Apply a `--base-url` override to `config` and build the HTTP client.
fn backend_source(
    base_url_override: Option<String>,
    config: &mut platform::config::AppConfig,
) -> Result<app::client::HttpLogSource> {
    if let Some(base_url) = base_url_override {
        platform::config::validate_base_url(&base_url)?;
        config.base_url = base_url;
    }
    let source = app::client::HttpLogSource::new(
        config.base_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?;
    Ok(source)
}
